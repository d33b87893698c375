//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport (GET, POST, PUT, DELETE)
//! - [`SessionStore`] - Session storage and retrieval

pub mod http;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use session::{SessionError, SessionStore};
