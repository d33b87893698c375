//! In-memory session store.
//!
//! Backs tests, and any embedding that does not want the session on disk.

use std::sync::{Arc, Mutex, RwLock};

use crate::session::Session;
use crate::traits::{SessionError, SessionStore};

/// Session store that keeps the session in memory.
///
/// Clones share the same storage, so a test can hold one handle while the
/// client holds another.
///
/// # Example
///
/// ```ignore
/// use myflix::adapters::InMemorySessionStore;
/// use myflix::session::Session;
/// use myflix::traits::SessionStore;
///
/// let store = InMemorySessionStore::new();
/// assert!(store.load()?.is_none());
///
/// store.save(&Session::new("alice", "jwt"))?;
/// assert_eq!(store.load()?.unwrap().username, "alice");
///
/// store.clear()?;
/// assert!(store.load()?.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<Session>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an initial session.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set_session(Some(session));
        store
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Current session, bypassing the failure switches.
    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Replace the session, bypassing the failure switches.
    pub fn set_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = session;
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(SessionError::LoadFailed("Mock load failure".to_string()));
        }

        self.session
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| SessionError::LoadFailed(e.to_string()))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(SessionError::SaveFailed("Mock save failure".to_string()));
        }

        let mut guard = self
            .session
            .write()
            .map_err(|e| SessionError::SaveFailed(e.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(SessionError::ClearFailed("Mock clear failure".to_string()));
        }

        let mut guard = self
            .session
            .write()
            .map_err(|e| SessionError::ClearFailed(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
