//! Auth Endpoints

use gloo_net::http::Request;

use super::{check, clear_token, read_token, store_token, transport, with_auth};
use crate::config::api_url;
use crate::models::{ApiError, Credentials, LoginResponse, User};

pub async fn fetch_logged_in_user() -> Result<User, ApiError> {
    let response = with_auth(Request::get(&api_url("/auth/loggedInUser")))
        .send()
        .await
        .map_err(transport)?;
    let response = check(response).await?;
    response.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Resolve the session from a stored token. A rejected token is dropped.
pub async fn restore_session() -> Option<User> {
    read_token()?;
    match fetch_logged_in_user().await {
        Ok(user) => Some(user),
        Err(ApiError::Unauthorized) => {
            log::info!("[AUTH] Stored token rejected, clearing it");
            clear_token();
            None
        }
        Err(err) => {
            log::error!("[AUTH] Could not restore session: {}", err);
            None
        }
    }
}

/// Log in, store the token and return the user it belongs to
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    let response = Request::post(&api_url("/auth/login"))
        .json(credentials)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let response = check(response).await?;
    let LoginResponse { token } = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    store_token(&token)?;
    fetch_logged_in_user().await
}

pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/auth/register"))
        .json(credentials)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check(response).await.map(|_| ())
}
