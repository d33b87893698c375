//! Session storage trait abstraction.
//!
//! The API client never reaches for global state: it is handed a
//! [`SessionStore`] at construction and reads it at the start of every
//! authenticated call.

use crate::session::Session;

/// Session storage errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Failed to load the session
    LoadFailed(String),
    /// Failed to save the session
    SaveFailed(String),
    /// Failed to clear the session
    ClearFailed(String),
    /// No home directory to place the session file in
    NoHomeDirectory,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::LoadFailed(msg) => write!(f, "Failed to load session: {}", msg),
            SessionError::SaveFailed(msg) => write!(f, "Failed to save session: {}", msg),
            SessionError::ClearFailed(msg) => write!(f, "Failed to clear session: {}", msg),
            SessionError::NoHomeDirectory => write!(f, "Could not determine home directory"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Synchronous key/value storage for the logged-in user's session.
///
/// Reads are cheap and synchronous so the client can read the session right
/// before issuing a request without holding anything across an await point.
pub trait SessionStore: Send + Sync {
    /// Load the current session.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if a session is stored
    /// - `Ok(None)` if nobody is logged in
    /// - `Err(error)` if the store could not be read
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove every stored key.
    fn clear(&self) -> Result<(), SessionError>;
}
