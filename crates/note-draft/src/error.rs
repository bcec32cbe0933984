//! API Error Types

use thiserror::Error;

/// Failure talking to the notes API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never got a response (offline, CORS, DNS). Safe to retry.
    #[error("network error: {0}")]
    Transport(String),
    /// Server answered with a non-2xx status
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("not authorized")]
    Unauthorized,
    #[error("could not read response: {0}")]
    Decode(String),
    /// Browser refused to keep the session token
    #[error("could not store session: {0}")]
    Storage(String),
}

impl ApiError {
    /// Map a non-2xx status to the matching variant
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Rejected {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Rejected { status, .. } => *status >= 500,
            ApiError::Unauthorized | ApiError::Decode(_) | ApiError::Storage(_) => false,
        }
    }

    /// Short text suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server. Check your connection and retry.".to_string(),
            ApiError::Rejected { status, .. } if *status >= 500 => {
                format!("The server failed to handle the request ({}). Please retry.", status)
            }
            ApiError::Rejected { status, .. } => {
                format!("The server rejected the request ({}). Check the fields and try again.", status)
            }
            ApiError::Unauthorized => "Your session has expired. Log in again.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::Storage(_) => "Your session could not be stored in this browser.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, "nope"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(422, "bad title"),
            ApiError::Rejected { status: 422, message: "bad title".into() }
        );
    }

    #[test]
    fn test_retryable_split() {
        assert!(ApiError::Transport("offline".into()).is_retryable());
        assert!(ApiError::from_status(503, "").is_retryable());
        assert!(!ApiError::from_status(400, "").is_retryable());
        assert!(!ApiError::Unauthorized.is_retryable());
    }

    #[test]
    fn test_user_message_mentions_status() {
        assert!(ApiError::from_status(400, "").user_message().contains("400"));
    }
}
