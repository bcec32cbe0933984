//! Header Component
//!
//! Brand link, main navigation, user menu and theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ModeToggle, UserMenu};
use crate::paths::notes_path;
use crate::store::{use_app_store, AppStateStoreFields};

/// Top navigation bar; hidden until the session is resolved
#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let resolving = Memo::new(move |_| store.session().with(|s| s.is_resolving()));
    let user = Memo::new(move |_| store.session().with(|s| s.user().cloned()));
    let notes_href = move || user.with(|u| u.as_ref().map(|u| notes_path(&u.user_id)).unwrap_or_default());

    view! {
        <Show when=move || !resolving.get()>
            <header class="app-header">
                <div class="header-brand">
                    <A href="/">
                        <img class="header-logo" src="/public/logo.svg" alt="Logo" />
                        "NoteNimbus"
                    </A>
                </div>
                <nav>
                    <ul class="header-nav">
                        <li><A href=notes_href>"Notes"</A></li>
                        <li><A href="/contact">"Contact"</A></li>
                    </ul>
                </nav>
                <div class="header-actions">
                    {move || user.get().map(|user| view! { <UserMenu user=user /> })}
                    <ModeToggle />
                </div>
            </header>
        </Show>
    }
}
