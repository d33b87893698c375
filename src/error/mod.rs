//! Error handling for the movie API client.
//!
//! Every client operation returns [`ApiResult<T>`]. The error is tagged by
//! cause so callers can branch (re-login on [`ApiError::Unauthorized`], show
//! the form again on [`ApiError::Validation`]), while
//! [`ApiError::user_message`] keeps the single generic text views display.
//!
//! | Variant | Category | Cause |
//! |---------|----------|-------|
//! | Network | Network | connection, DNS, TLS, timeout |
//! | Unauthorized | Auth | HTTP 401/403 |
//! | Validation | Validation | other HTTP 4xx |
//! | Server | Server | HTTP 5xx and other non-2xx |
//! | InvalidResponse | Server | 2xx body not matching the schema |
//! | Session | System | session store failure |
//! | Cancelled | Client | aborted by the caller |

mod api_error;
mod category;

pub use api_error::{ApiError, GENERIC_FAILURE_MESSAGE};
pub use category::ErrorCategory;

/// Type alias for Results of API client operations.
pub type ApiResult<T> = Result<T, ApiError>;
