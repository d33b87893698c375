//! Error category classification.
//!
//! Categories let a view branch on the broad cause of a failed call
//! (re-login, fix input, wait) without matching every variant.

use std::fmt;

/// High-level categorization of API failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request never got an HTTP answer (connection, DNS, TLS, timeout).
    Network,

    /// The service rejected the credentials (401/403).
    Auth,

    /// The service rejected the request itself (other 4xx).
    Validation,

    /// The service failed (5xx) or answered with something unusable.
    Server,

    /// The caller gave up on the request.
    Client,

    /// Local session storage failed.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a suggested next step, printed under the generic failure text.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Try logging out and logging back in",
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::Server => {
                "The server may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "Run the command again if you still need the result",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
