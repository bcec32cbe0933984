//! Session Model
//!
//! Who is acting: resolved once at startup, then either a user or nobody.

use serde::{Deserialize, Serialize};

/// Logged-in user as returned by `/auth/loggedInUser`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl User {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            img_url: None,
        }
    }

    /// Avatar fallback letter, "P" when the username is blank
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "P".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Token lookup still in flight
    #[default]
    Resolving,
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, Session::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}
