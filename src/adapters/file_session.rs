//! File-based session store.
//!
//! The session lives in `~/.myflix/session.json` as a two-key JSON object
//! (`username`, `token`).

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::session::Session;
use crate::traits::{SessionError, SessionStore};

/// The session directory name.
const SESSION_DIR: &str = ".myflix";

/// The session file name.
const SESSION_FILE: &str = "session.json";

/// Session store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at the default location under the home directory.
    pub fn new() -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or(SessionError::NoHomeDirectory)?;
        Ok(Self {
            path: home.join(SESSION_DIR).join(SESSION_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    /// A missing or unparsable file loads as "not logged in".
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Cannot open session file {:?}: {}", self.path, e);
                return Ok(None);
            }
        };

        match serde_json::from_reader::<_, Session>(BufReader::new(file)) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Ignoring malformed session file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| SessionError::SaveFailed(e.to_string()))?;
            }
        }

        let file =
            File::create(&self.path).map_err(|e| SessionError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| SessionError::SaveFailed(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| SessionError::SaveFailed(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).map_err(|e| SessionError::ClearFailed(e.to_string()))
    }
}
