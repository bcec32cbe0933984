//! API Bindings
//!
//! HTTP calls to the NoteNimbus API, organized by domain.

mod auth;
mod notes;

use gloo_net::http::{RequestBuilder, Response};

use crate::config::TOKEN_STORAGE_KEY;
use crate::models::{ApiError, ErrorBody};

// Re-export all public items
pub use auth::*;
pub use notes::*;

// ========================
// Token Storage
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

/// Persist the token; a login whose token cannot be kept is reported as failed
pub fn store_token(token: &str) -> Result<(), ApiError> {
    let storage = local_storage().ok_or_else(|| storage_error("localStorage unavailable"))?;
    storage.set_item(TOKEN_STORAGE_KEY, token).map_err(storage_error)
}

fn storage_error(err: impl std::fmt::Debug) -> ApiError {
    log::error!("[AUTH] Could not store token: {:?}", err);
    ApiError::Storage(format!("{:?}", err))
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

// ========================
// Request Helpers
// ========================

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Attach the stored token, if any
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match read_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-2xx reply into an `ApiError`, reading the server's message when present
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => response.status_text(),
    };
    log::warn!("[API] {} {} -> {}", status, response.url(), message);
    Err(ApiError::from_status(status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn test_storage_error_is_not_reported_as_bad_credentials() {
        let err = storage_error("QuotaExceededError");
        assert_eq!(err, ApiError::Storage("\"QuotaExceededError\"".into()));
        assert_ne!(err, ApiError::Unauthorized);
        assert!(err.user_message().contains("stored"));
    }
}
