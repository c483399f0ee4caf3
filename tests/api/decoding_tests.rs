//! Routing and request decoding failures.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_error, TestApp};

#[tokio::test]
async fn test_unknown_path() {
    let app = TestApp::new();

    let response = app.post("/chats/delete", json!({})).await;

    assert_error(&response, StatusCode::NOT_FOUND, "No such endpoint exists");
}

#[tokio::test]
async fn test_wrong_method() {
    let app = TestApp::new();

    let response = app.server.get("/users/add").await;

    assert_error(
        &response,
        StatusCode::NOT_FOUND,
        "No such HTTP method for this endpoint",
    );
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users/add")
        .text(r#"{"username":"plain"}"#)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_oversized_body() {
    let app = TestApp::new();
    let huge = "x".repeat(2 * 1024 * 1024);

    let response = app.post("/users/add", json!({ "username": huge })).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_unknown_fields_are_rejected() {
    let app = TestApp::new();

    let response = app
        .post("/users/add", json!({ "username": "x", "admin": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("admin"));
}

#[tokio::test]
async fn test_member_ids_must_be_strings() {
    let app = TestApp::new();

    let response = app
        .post("/chats/add", json!({ "name": "team", "users": [1, 2] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unparsable_member_id() {
    let app = TestApp::new();

    let response = app
        .post("/chats/get", json!({ "user": "abc" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_syntax_error() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users/add")
        .content_type("application/json")
        .bytes("{\"username\":".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["result"], serde_json::Value::Null);
}
