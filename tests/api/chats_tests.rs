//! Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use chat_backend::domain::ChatDetails;

use crate::common::{assert_error, result, unique_name, TestApp};

#[tokio::test]
async fn test_duplicate_members_are_stored_once() {
    let app = TestApp::new();
    let a = app.add_user(&unique_name()).await;
    let b = app.add_user(&unique_name()).await;

    let chat = app.add_chat("team", &[a, a, b]).await;

    assert_eq!(app.store.members_of(chat), vec![a, b]);
}

#[tokio::test]
async fn test_chat_name_conflicts_regardless_of_members() {
    let app = TestApp::new();
    let a = app.add_user(&unique_name()).await;
    let b = app.add_user(&unique_name()).await;
    app.add_chat("team", &[a]).await;

    let response = app
        .post("/chats/add", json!({ "name": "team", "users": [b.to_string()] }))
        .await;

    assert_error(&response, StatusCode::CONFLICT, "The chat with this name already exists");
    assert_eq!(app.store.chat_count(), 1);
}

#[tokio::test]
async fn test_unknown_members_conflict() {
    let app = TestApp::new();
    let a = app.add_user(&unique_name()).await;

    let response = app
        .post(
            "/chats/add",
            json!({ "name": "team", "users": [a.to_string(), "4242"] }),
        )
        .await;

    assert_error(&response, StatusCode::CONFLICT, "Some users don't exist");
    assert_eq!(app.store.chat_count(), 0);
}

#[test_case(json!({ "name": "", "users": null }), "'users' can't be null" ; "users null wins over empty name")]
#[test_case(json!({ "name": "team" }), "'users' can't be null" ; "users absent")]
#[test_case(json!({ "name": "team", "users": [] }), "'users' can't be empty" ; "users empty")]
#[test_case(json!({ "name": "team", "users": ["1", null] }), "'users' can't contain null(s)" ; "users with null")]
#[test_case(json!({ "users": ["1"] }), "'name' can't be null" ; "name absent")]
#[test_case(json!({ "name": "", "users": ["1"] }), "'name' can't be empty" ; "name empty")]
#[tokio::test]
async fn test_add_chat_validation(body: serde_json::Value, message: &str) {
    let app = TestApp::new();

    let response = app.post("/chats/add", body).await;

    assert_error(&response, StatusCode::BAD_REQUEST, message);
}

#[tokio::test]
async fn test_listing_orders_by_latest_message() {
    let app = TestApp::new();
    let u = app.add_user(&unique_name()).await;
    let a = app.add_chat("A", &[u]).await;
    let b = app.add_chat("B", &[u]).await;
    let c = app.add_chat("C", &[u]).await;

    app.post_message(b, u, "first").await;
    app.post_message(a, u, "second").await;
    app.post_message(a, u, "third").await;

    let response = app
        .post("/chats/get", json!({ "user": u.to_string() }))
        .await;
    response.assert_status_ok();
    let chats: Vec<ChatDetails> = result(&response);

    let order: Vec<i64> = chats.iter().map(ChatDetails::id).collect();
    assert_eq!(order, vec![a, b, c]);

    let texts: Vec<&str> = chats[0].messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "second"]);
    assert!(chats[2].messages.is_empty());
}

#[tokio::test]
async fn test_listing_is_an_empty_list_for_a_user_without_chats() {
    let app = TestApp::new();
    let u = app.add_user(&unique_name()).await;

    let response = app
        .post("/chats/get", json!({ "user": u.to_string() }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "result": [], "error": null }));
}

#[tokio::test]
async fn test_listing_for_unknown_or_missing_user() {
    let app = TestApp::new();

    let response = app.post("/chats/get", json!({ "user": "77" })).await;
    assert_error(
        &response,
        StatusCode::NOT_FOUND,
        "the user with the provided id doesn't exist",
    );

    let response = app.post("/chats/get", json!({})).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "'user' can't be null");
}

#[tokio::test]
async fn test_listed_chat_wire_shape() {
    let app = TestApp::new();
    let u = app.add_user("solo").await;
    let chat = app.add_chat("notes", &[u]).await;

    let response = app
        .post("/chats/get", json!({ "user": u.to_string() }))
        .await;
    let body: serde_json::Value = response.json();
    let listed = &body["result"][0];

    assert_eq!(listed["id"], chat);
    assert_eq!(listed["name"], "notes");
    assert_eq!(listed["users"][0]["username"], "solo");
    assert!(listed["created_at"].is_string());
    assert_eq!(listed["messages"], json!([]));
}
