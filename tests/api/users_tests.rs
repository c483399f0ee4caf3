//! User API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_error, result, unique_name, TestApp};

#[tokio::test]
async fn test_add_user_returns_new_id() {
    let app = TestApp::new();

    let response = app
        .post("/users/add", json!({ "username": unique_name() }))
        .await;

    response.assert_status_ok();
    let id: i64 = result(&response);
    assert!(id > 0);
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = TestApp::new();
    let name = unique_name();
    app.add_user(&name).await;

    let response = app.post("/users/add", json!({ "username": name })).await;

    assert_error(&response, StatusCode::CONFLICT, "user with this name already exists");
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_null_and_empty_usernames_are_told_apart() {
    let app = TestApp::new();

    let response = app.post("/users/add", json!({})).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "'username' can't be null");

    let response = app.post("/users/add", json!({ "username": null })).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "'username' can't be null");

    let response = app.post("/users/add", json!({ "username": "" })).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "'username' can't be empty");

    assert_eq!(app.store.user_count(), 0);
}
