//! Frontend Configuration
//!
//! Values fixed at build time. Set `NOTENIMBUS_API_URL` when building to
//! point the client at another API server.

/// Base URL of the notes API
pub const API_BASE_URL: &str = match option_env!("NOTENIMBUS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// localStorage key of the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage key of the selected color theme
pub const THEME_STORAGE_KEY: &str = "notenimbus-ui-theme";

/// Pause between the "Note added" toast and leaving the form
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 1000;

pub const TOAST_DURATION_MS: u32 = 5000;

pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Join the API base with an endpoint path
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_slashes() {
        assert_eq!(join_url("http://h/api", "/notes/create"), "http://h/api/notes/create");
        assert_eq!(join_url("http://h/api/", "notes/create"), "http://h/api/notes/create");
        assert_eq!(join_url("http://h/api//", "//auth/login"), "http://h/api/auth/login");
    }

    #[test]
    fn test_api_url_uses_base() {
        assert!(api_url("/notes/create").starts_with(API_BASE_URL.trim_end_matches('/')));
        assert!(api_url("/notes/create").ends_with("/notes/create"));
    }
}
