//! Session persistence across client instances, using the file store.

mod common;

use std::sync::Arc;

use common::*;
use myflix::adapters::{FileSessionStore, ReqwestHttpClient};
use myflix::api::MovieApiClient;
use myflix::config::ClientConfig;
use myflix::models::Credentials;
use myflix::session::Session;
use myflix::traits::SessionStore;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn file_client(server: &MockServer, store: &FileSessionStore) -> MovieApiClient {
    MovieApiClient::new(
        server.uri(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store.clone()),
    )
}

#[tokio::test]
async fn test_login_session_survives_new_client() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::at(temp_dir.path().join("session.json"));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json("alice", &[]),
            "token": "persisted-token"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .and(header("Authorization", "Bearer persisted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alice", &["m1"])))
        .expect(1)
        .mount(&server)
        .await;

    file_client(&server, &store)
        .login_user(&Credentials::new("alice", "pw"))
        .await
        .unwrap();

    // A fresh client, as in the next CLI invocation
    let favorites = file_client(&server, &store)
        .favorite_movies()
        .await
        .unwrap();

    assert_eq!(favorites, vec!["m1"]);
}

#[tokio::test]
async fn test_logout_removes_session_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::at(temp_dir.path().join("nested").join("session.json"));
    store.save(&Session::new("alice", TEST_TOKEN)).unwrap();
    assert!(store.path().exists());

    let server = MockServer::start().await;
    file_client(&server, &store).logout().unwrap();

    assert!(!store.path().exists());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_session_file_sends_unauthenticated_request() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("session.json");
    std::fs::write(&session_path, "{ not json").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_session_file(&session_path);
    let client = MovieApiClient::from_config(&config).unwrap();

    let err = client.list_movies().await.unwrap_err();
    assert!(err.is_auth_failure());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_delete_profile_removes_session_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::at(temp_dir.path().join("session.json"));
    store.save(&Session::new("alice", TEST_TOKEN)).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/alice"))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("alice was deleted."))
        .mount(&server)
        .await;

    file_client(&server, &store).delete_profile().await.unwrap();

    assert_eq!(store.load().unwrap(), None);
    assert!(!store.path().exists());
}
