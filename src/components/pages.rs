//! Pages
//!
//! Route targets outside the note form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::paths::CREATE_NOTE_PAGE;
use crate::store::{store_user, use_app_store};

/// Placeholder page showing its name
#[component]
pub fn StaticPage(title: &'static str) -> impl IntoView {
    view! { <div class="static-page">{title}</div> }
}

/// Notes listing of the user in the path
#[component]
pub fn NotesPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.with(|p| p.get("user_id").unwrap_or_default());

    view! {
        <section class="notes-page">
            <div class="notes-page-header">
                <h2>"Notes"</h2>
                <A href=CREATE_NOTE_PAGE>"Add Note"</A>
            </div>
            <p class="notes-owner">{move || format!("Notes of user {}", user_id())}</p>
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let params = use_params_map();
    let user_id = move || params.with(|p| p.get("user_id").unwrap_or_default());
    let own = move || store_user(&store).filter(|u| u.user_id == user_id());

    view! {
        <section class="profile-page">
            <h2>"Profile"</h2>
            {move || match own() {
                Some(user) => view! {
                    <dl>
                        <dt>"Username"</dt>
                        <dd>{user.username}</dd>
                        <dt>"User ID"</dt>
                        <dd>{user.user_id}</dd>
                    </dl>
                }.into_any(),
                None => view! { <p>"Profile not available."</p> }.into_any(),
            }}
        </section>
    }
}
