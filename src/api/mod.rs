//! Movie catalog API client.
//!
//! [`MovieApiClient`] wraps the service's REST endpoints. It depends only on
//! the [`crate::traits::HttpClient`] and [`crate::traits::SessionStore`]
//! seams, so it runs the same against reqwest and the file store in the
//! binary as against the mocks in tests.

mod client;

pub use client::MovieApiClient;
