//! Common test utilities for integration tests.
//!
//! Fixtures for the service's JSON shapes and helpers that point a real
//! reqwest-backed [`MovieApiClient`] at a wiremock server.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let (client, store) = logged_in_client(&server, "alice");
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use myflix::adapters::{InMemorySessionStore, ReqwestHttpClient};
use myflix::api::MovieApiClient;
use myflix::session::Session;

/// Token every logged-in fixture carries.
pub const TEST_TOKEN: &str = "test-jwt-12345";

/// A movie as the service returns it.
pub fn movie_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "Title": title,
        "Description": format!("{} description.", title),
        "Genre": { "Name": "Drama", "Description": "Serious stories." },
        "Director": {
            "Name": "Jane Doe",
            "Bio": "Filmmaker.",
            "Birth": "1950",
            "Death": null
        },
        "ImagePath": format!("{}.png", id),
        "Featured": false
    })
}

/// `count` distinct movies.
pub fn movies_json(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| movie_json(&format!("m{}", i), &format!("Movie {}", i)))
            .collect(),
    )
}

/// A user document with the given favorites.
pub fn user_json(username: &str, favorites: &[&str]) -> Value {
    json!({
        "_id": format!("id-{}", username),
        "Username": username,
        "Password": "$2b$10$hashed",
        "Email": format!("{}@example.com", username),
        "Birthday": "1990-04-02T00:00:00.000Z",
        "FavoriteMovies": favorites
    })
}

/// Client against `server` with an empty in-memory session store.
pub fn anonymous_client(server: &MockServer) -> (MovieApiClient, InMemorySessionStore) {
    client_with_store(server, InMemorySessionStore::new())
}

/// Client against `server` already logged in as `username`.
pub fn logged_in_client(
    server: &MockServer,
    username: &str,
) -> (MovieApiClient, InMemorySessionStore) {
    client_with_store(
        server,
        InMemorySessionStore::with_session(Session::new(username, TEST_TOKEN)),
    )
}

pub fn client_with_store(
    server: &MockServer,
    store: InMemorySessionStore,
) -> (MovieApiClient, InMemorySessionStore) {
    let client = MovieApiClient::new(
        server.uri(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store.clone()),
    );
    (client, store)
}

/// The bearer header value the fixtures send.
pub fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}
