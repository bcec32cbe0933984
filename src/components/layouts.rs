//! Layouts
//!
//! Shells around the routed pages.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::Header;
use crate::store::{use_app_store, AppStateStoreFields};

/// Header plus the routed page
#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="main-layout">
            <Header />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Centered card for the login and register pages; logged-in users go home
#[component]
pub fn AuthLayout() -> impl IntoView {
    let store = use_app_store();
    let logged_in = Memo::new(move |_| store.session().with(|s| s.is_authenticated()));

    view! {
        <Show
            when=move || !logged_in.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="auth-layout">
                <h1 class="auth-brand">"NoteNimbus"</h1>
                <div class="card">
                    <Outlet />
                </div>
            </div>
        </Show>
    }
}
