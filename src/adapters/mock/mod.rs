//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySessionStore`] - In-memory session storage

pub mod http;
pub mod session;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session::InMemorySessionStore;
