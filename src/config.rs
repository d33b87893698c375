//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! pick up overrides from the environment.

use std::path::PathBuf;

/// Default URL for the movie API
pub const DEFAULT_API_URL: &str = "https://movie-list-api-5858.herokuapp.com";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "MYFLIX_API_URL";

/// Environment variable overriding the session file location
pub const SESSION_FILE_ENV: &str = "MYFLIX_SESSION_FILE";

/// Environment variable enabling debug logging
pub const VERBOSE_ENV: &str = "MYFLIX_VERBOSE";

/// Configuration for building a [`crate::api::MovieApiClient`].
///
/// # Example
///
/// ```ignore
/// use myflix::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_verbose(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the movie API, without trailing slash
    pub base_url: String,
    /// Session file location (None means `~/.myflix/session.json`)
    pub session_file: Option<PathBuf>,
    /// Enable debug logging
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            session_file: None,
            verbose: false,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the session file location.
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Set whether debug logging is enabled.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Create config from `MYFLIX_API_URL`, `MYFLIX_SESSION_FILE` and
    /// `MYFLIX_VERBOSE`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(API_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(path) = non_empty_var(SESSION_FILE_ENV) {
            config = config.with_session_file(path);
        }
        config.with_verbose(std::env::var_os(VERBOSE_ENV).is_some())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
