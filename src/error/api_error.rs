//! The error every API client operation returns.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::{HttpError, SessionError};

/// The one message views show for any failed call.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something bad happened, please try again later.";

/// Longest body excerpt kept in an error; service error pages can be large.
const MAX_BODY_LEN: usize = 512;

/// Failure of a single API call, tagged by cause.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never got an HTTP answer.
    #[error("{endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: HttpError,
    },

    /// 401 or 403.
    #[error("{endpoint}: unauthorized (HTTP {status}): {body}")]
    Unauthorized {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Any other 4xx; `body` carries the service's explanation.
    #[error("{endpoint}: rejected (HTTP {status}): {body}")]
    Validation {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// 5xx, or a non-2xx status outside the 4xx range.
    #[error("{endpoint}: server error (HTTP {status}): {body}")]
    Server {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// A 2xx answer whose body does not match the expected schema.
    #[error("{endpoint}: invalid response: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// The session store could not be read or written.
    #[error("session storage: {0}")]
    Session(#[from] SessionError),

    /// The request was aborted before it completed.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Classify a non-2xx answer.
    pub fn from_status(endpoint: impl Into<String>, status: u16, body: &str) -> Self {
        let endpoint = endpoint.into();
        let body = truncate_body(body);
        match status {
            401 | 403 => ApiError::Unauthorized {
                endpoint,
                status,
                body,
            },
            400..=499 => ApiError::Validation {
                endpoint,
                status,
                body,
            },
            _ => ApiError::Server {
                endpoint,
                status,
                body,
            },
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// HTTP status, for the variants that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body excerpt, for the variants that carry one.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { body, .. }
            | ApiError::Validation { body, .. }
            | ApiError::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Network { .. } => ErrorCategory::Network,
            ApiError::Unauthorized { .. } => ErrorCategory::Auth,
            ApiError::Validation { .. } => ErrorCategory::Validation,
            ApiError::Server { .. } | ApiError::InvalidResponse { .. } => ErrorCategory::Server,
            ApiError::Cancelled => ErrorCategory::Client,
            ApiError::Session(_) => ErrorCategory::System,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "E_API_NETWORK",
            ApiError::Unauthorized { .. } => "E_API_AUTH",
            ApiError::Validation { .. } => "E_API_VALIDATION",
            ApiError::Server { .. } => "E_API_SERVER",
            ApiError::InvalidResponse { .. } => "E_API_INVALID",
            ApiError::Session(_) => "E_API_SESSION",
            ApiError::Cancelled => "E_API_CANCEL",
        }
    }

    /// Text shown to the user. Deliberately the same for every cause; the
    /// detail lives in the logs and in the variant fields.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_LEN {
        return body.to_string();
    }
    let mut end = MAX_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
