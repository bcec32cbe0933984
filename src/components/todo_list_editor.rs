//! Todo List Editor
//!
//! Editable todo rows of the note form. Rows are keyed by their stable id.

use leptos::prelude::*;

use crate::models::{NoteComposer, TodoField, TodoId};

#[component]
fn TodoRow(composer: RwSignal<NoteComposer>, id: TodoId) -> impl IntoView {
    let title = move || composer.with(|c| c.todos().get(id).map(|t| t.title.clone()).unwrap_or_default());
    let done = move || composer.with(|c| c.todos().get(id).is_some_and(|t| t.is_complete));

    view! {
        <div class="todo-row">
            <input
                type="text"
                placeholder="Todo title..."
                required
                prop:value=title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    composer.update(|c| {
                        c.update_todo(id, TodoField::Title(value));
                    });
                }
            />
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    composer.update(|c| {
                        c.update_todo(id, TodoField::IsComplete(checked));
                    });
                }
            />
            <button
                type="button"
                class="todo-remove-btn"
                title="Remove todo"
                on:click=move |_| {
                    composer.update(|c| {
                        c.remove_todo(id);
                    });
                }
            >
                "X"
            </button>
        </div>
    }
}

/// Todo sub-list with add/remove controls
#[component]
pub fn TodoListEditor(composer: RwSignal<NoteComposer>) -> impl IntoView {
    let is_empty = move || composer.with(|c| c.todos().is_empty());

    view! {
        <div class="form-field todo-list">
            <label>"Todo List"</label>
            <For
                each=move || composer.with(|c| c.todos().ids())
                key=|id| *id
                children=move |id| view! { <TodoRow composer=composer id=id /> }
            />
            <Show when=is_empty>
                <p class="todo-empty">"No todos yet."</p>
            </Show>
            <button
                type="button"
                class="todo-add-btn"
                on:click=move |_| {
                    composer.update(|c| {
                        c.add_todo();
                    });
                }
            >
                "Add Todo"
            </button>
        </div>
    }
}
