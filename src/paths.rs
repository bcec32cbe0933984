//! Route Paths
//!
//! Builders for links that embed a user id.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but unreserved URL characters
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub const LOGIN_PATH: &str = "/auth/login";
pub const CREATE_NOTE_PAGE: &str = "/notes/create";

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// Notes listing of one user
pub fn notes_path(user_id: &str) -> String {
    format!("/notes/{}", segment(user_id))
}

pub fn profile_path(user_id: &str) -> String {
    format!("/profile/{}", segment(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_untouched() {
        assert_eq!(notes_path("u1"), "/notes/u1");
        assert_eq!(profile_path("65f0c2-ab_9"), "/profile/65f0c2-ab_9");
    }

    #[test]
    fn test_reserved_characters_escaped() {
        assert_eq!(notes_path("a/b c"), "/notes/a%2Fb%20c");
        assert_eq!(notes_path("x?y#z"), "/notes/x%3Fy%23z");
    }
}
