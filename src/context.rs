//! Auth Context
//!
//! Session actions shared by the header, the auth pages and the guarded routes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{ApiError, Credentials, Session, User};
use crate::store::{store_set_session, use_app_store, AppStore};

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: AppStore,
}

impl AuthContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Resolve the session from the stored token; runs once at startup
    pub fn restore(&self) {
        let store = self.store;
        spawn_local(async move {
            let session = match api::restore_session().await {
                Some(user) => {
                    log::info!("[AUTH] Restored session for {}", user.username);
                    Session::Authenticated(user)
                }
                None => Session::Anonymous,
            };
            store_set_session(&store, session);
        });
    }

    pub async fn login(&self, credentials: Credentials) -> Result<User, ApiError> {
        let user = api::login(&credentials).await?;
        log::info!("[AUTH] Logged in as {}", user.username);
        store_set_session(&self.store, Session::Authenticated(user.clone()));
        Ok(user)
    }

    pub async fn register(&self, credentials: Credentials) -> Result<(), ApiError> {
        api::register(&credentials).await?;
        log::info!("[AUTH] Registered {}", credentials.username);
        Ok(())
    }

    /// Drop the token; guarded routes redirect to the login page
    pub fn logout(&self) {
        api::clear_token();
        store_set_session(&self.store, Session::Anonymous);
        log::info!("[AUTH] Logged out");
    }
}

pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext::new(use_app_store());
    provide_context(ctx);
    ctx
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
