//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TOAST_DURATION_MS;
use crate::models::{Notice, Session, User};
use crate::theme::{self, Theme};
use crate::toast::{ToastId, ToastQueue};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Who is logged in; `Resolving` until the token check finishes
    pub session: Session,
    /// Visible toasts
    pub toasts: ToastQueue,
    /// Selected color theme
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: theme::load_theme(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Logged-in user, tracked
pub fn store_user(store: &AppStore) -> Option<User> {
    store.session().with(|s| s.user().cloned())
}

pub fn store_set_session(store: &AppStore, session: Session) {
    store.session().set(session);
}

/// Show a toast and schedule its removal
pub fn store_show_toast(store: &AppStore, notice: Notice) -> ToastId {
    let id = store.toasts().write().push(notice);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        store_dismiss_toast(&store, id);
    });
    id
}

pub fn store_dismiss_toast(store: &AppStore, id: ToastId) {
    store.toasts().write().dismiss(id);
}

/// Persist, apply and publish a theme change
pub fn store_set_theme(store: &AppStore, theme: Theme) {
    theme::apply_theme(theme);
    store.theme().set(theme);
}
