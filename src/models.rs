//! Frontend Models
//!
//! Draft and session types come from `note-draft`; the rest are API bodies.

use serde::{Deserialize, Serialize};

pub use note_draft::{
    ApiError, DraftField, ImageAttachment, MultipartPayload, NoteComposer, Notice, NoticeStatus, PayloadValue,
    Session, SubmitError, TodoField, TodoId, User,
};

/// Body of `POST /auth/login` and `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Reply to a successful login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body the API sends with non-2xx replies
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_accepts_both_keys() {
        let a: ErrorBody = serde_json::from_str(r#"{"message":"bad"}"#).unwrap();
        let b: ErrorBody = serde_json::from_str(r#"{"error":"bad"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_credentials_serialize_plain_keys() {
        let body = serde_json::to_string(&Credentials {
            username: "baba".into(),
            password: "pw".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"username":"baba","password":"pw"}"#);
    }
}
