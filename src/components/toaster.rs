//! Toaster Component
//!
//! Renders the toast queue from the app store.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.notice.title.clone()}</div>
                                <div class="toast-description">{toast.notice.description.clone()}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
