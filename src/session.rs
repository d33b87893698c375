//! The authenticated user's stored identity.

use serde::{Deserialize, Serialize};

/// Username and bearer token issued at login.
///
/// No expiry is tracked; a stale token is discovered when the service
/// rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Bearer token, if it is non-empty.
    pub fn bearer(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_bearer() {
        assert_eq!(Session::new("alice", "tok").bearer(), Some("tok"));
        assert_eq!(Session::new("alice", "").bearer(), None);
        assert_eq!(Session::default().bearer(), None);
    }

    #[test]
    fn test_session_json_keys() {
        let json = serde_json::to_value(Session::new("alice", "tok")).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["token"], "tok");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
