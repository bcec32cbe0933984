//! Add Note Form Component
//!
//! Title, description, body, todo sub-list and optional image, submitted as
//! one multipart request to the notes API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use note_draft::{submit_note, ComposerCell, FormEffects};

use crate::api::HttpNoteGateway;
use crate::components::TodoListEditor;
use crate::config::SUCCESS_REDIRECT_DELAY_MS;
use crate::models::{DraftField, ImageAttachment, NoteComposer, Notice, NoticeStatus, Session};
use crate::paths::notes_path;
use crate::store::{store_show_toast, use_app_store, AppStateStoreFields, AppStore};

/// Composer held in a signal; `None` once the form is unmounted
#[derive(Clone, Copy)]
struct ComposerSignal(RwSignal<NoteComposer>);

impl ComposerCell for ComposerSignal {
    fn with_composer<R>(&self, f: impl FnOnce(&mut NoteComposer) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Toasts through the app store, navigation through the router
struct FormUi<N> {
    store: AppStore,
    navigate: N,
}

impl<N> FormEffects for FormUi<N>
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn notify(&self, notice: Notice) {
        store_show_toast(&self.store, notice);
    }

    fn show_notes(&self, user_id: &str) {
        let path = notes_path(user_id);
        let navigate = self.navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_REDIRECT_DELAY_MS).await;
            navigate(&path, NavigateOptions::default());
        });
    }
}

/// Move `steps` entries through the browser history (negative = back)
fn go_history(steps: i32) {
    if let Err(err) = window().history().and_then(|h| h.go_with_delta(steps)) {
        log::warn!("[NOTE_FORM] History navigation failed: {:?}", err);
    }
}

async fn read_image(file: web_sys::File) -> Result<ImageAttachment, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageAttachment::new(file.name(), file.type_(), bytes))
}

#[component]
fn DraftInput(
    composer: RwSignal<NoteComposer>,
    field: DraftField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.name()>{label}</label>
            <input
                id=field.name()
                type="text"
                placeholder=placeholder
                required
                prop:value=move || composer.with(|c| c.draft().get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    composer.update(|c| c.update_field(field, value));
                }
            />
        </div>
    }
}

/// Form fields only render for a known user; anyone else sees the login notice
fn shows_form(session: &Session) -> bool {
    session.is_authenticated()
}

/// Note creation form; logged-out users get a notice instead
#[component]
pub fn AddNoteForm() -> impl IntoView {
    let store = use_app_store();
    let navigate = StoredValue::new_local(use_navigate());
    let composer = RwSignal::new(NoteComposer::new());
    let submitting = Memo::new(move |_| composer.with(|c| c.is_submitting()));
    let logged_in = Memo::new(move |_| store.session().with(shows_form));
    let file_input = NodeRef::<leptos::html::Input>::new();

    // The browser keeps the old file name after a reset unless cleared
    Effect::new(move |_| {
        let has_image = composer.with(|c| c.draft().image.is_some());
        if !has_image {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let session = store.session().get_untracked();
        let effects = FormUi {
            store,
            navigate: navigate.get_value(),
        };
        spawn_local(async move {
            let _ = submit_note(&ComposerSignal(composer), &session, &HttpNoteGateway, &effects).await;
        });
    };

    let on_image = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match input.files().and_then(|files| files.get(0)) {
            None => composer.update(|c| c.select_image(None)),
            Some(file) => spawn_local(async move {
                match read_image(file).await {
                    Ok(image) => {
                        log::debug!("[NOTE_FORM] Selected {:?}", image);
                        composer.update(|c| c.select_image(Some(image)));
                    }
                    Err(err) => {
                        log::error!("[NOTE_FORM] Could not read image: {:?}", err);
                        let notice = Notice::new("Image not added", "The file could not be read.", NoticeStatus::Error);
                        store_show_toast(&store, notice);
                    }
                }
            }),
        }
    };

    view! {
        <Show
            when=move || logged_in.get()
            fallback=|| view! { <p class="login-required">"You must be logged in to add notes."</p> }
        >
            <div class="note-form-wrapper">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">"Add New Note"</h2>
                    </div>
                    <div class="card-content">
                        <form class="note-form" on:submit=on_submit>
                            <DraftInput composer=composer field=DraftField::Title label="Title" placeholder="Add title..." />
                            <DraftInput
                                composer=composer
                                field=DraftField::Description
                                label="Description"
                                placeholder="Add description..."
                            />
                            <DraftInput composer=composer field=DraftField::Body label="Body" placeholder="Add body..." />

                            <TodoListEditor composer=composer />

                            <div class="form-field">
                                <label for="image">"Image"</label>
                                <input id="image" type="file" accept="image/*" node_ref=file_input on:change=on_image />
                            </div>

                            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <div class="loader"></div> }.into_any()
                                } else {
                                    "Add Note".into_any()
                                }}
                            </button>
                        </form>
                    </div>
                    <div class="card-footer">
                        <button type="button" class="back-btn" on:click=move |_| go_history(-1)>
                            "Back"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_fields_render_only_for_known_user() {
        assert!(!shows_form(&Session::Anonymous));
        assert!(!shows_form(&Session::Resolving));
        assert!(shows_form(&Session::Authenticated(User::new("u1", "baba"))));
    }
}
