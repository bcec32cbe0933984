//! NoteNimbus Frontend App
//!
//! Router, guarded layout and the route table.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{
    AddNoteForm, AuthLayout, LoginPage, MainLayout, NotesPage, ProfilePage, RegisterPage, StaticPage, Toaster,
};
use crate::context::provide_auth_context;
use crate::models::Session;
use crate::paths::LOGIN_PATH;
use crate::store::{use_app_store, AppState, AppStateStoreFields};
use crate::theme;

/// What a guarded route should show for the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    Wait,
    Login,
    Open,
}

fn gate(session: &Session) -> Gate {
    match session {
        Session::Resolving => Gate::Wait,
        Session::Anonymous => Gate::Login,
        Session::Authenticated(_) => Gate::Open,
    }
}

/// Renders children only for a logged-in user, otherwise sends them to login
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let state = Memo::new(move |_| store.session().with(gate));

    move || match state.get() {
        Gate::Wait => ().into_any(),
        Gate::Login => view! { <Redirect path=LOGIN_PATH /> }.into_any(),
        Gate::Open => children().into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    theme::apply_theme(store.theme().get_untracked());

    let auth = provide_auth_context();
    auth.restore();

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <ParentRoute
                    path=path!("/")
                    view=|| view! { <ProtectedRoute><MainLayout /></ProtectedRoute> }
                >
                    <Route path=path!("") view=|| view! { <StaticPage title="home" /> } />
                    <Route path=path!("about") view=|| view! { <StaticPage title="about" /> } />
                    <Route path=path!("contact") view=|| view! { <StaticPage title="contact" /> } />
                    <Route path=path!("task") view=|| view! { <StaticPage title="tasks" /> } />
                    <Route path=path!("notes/create") view=AddNoteForm />
                    <Route path=path!("notes/:user_id") view=NotesPage />
                    <Route path=path!("profile/:user_id") view=ProfilePage />
                </ParentRoute>

                <ParentRoute path=path!("/auth") view=AuthLayout>
                    <Route path=path!("login") view=LoginPage />
                    <Route path=path!("register") view=RegisterPage />
                </ParentRoute>
            </Routes>
            <Toaster />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_gate_per_session() {
        assert_eq!(gate(&Session::Resolving), Gate::Wait);
        assert_eq!(gate(&Session::Anonymous), Gate::Login);
        assert_eq!(gate(&Session::Authenticated(User::new("u1", "baba"))), Gate::Open);
    }
}
