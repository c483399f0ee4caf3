//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use chat_backend::domain::Message;

use crate::common::{assert_error, result, unique_name, TestApp};

#[tokio::test]
async fn test_messages_are_listed_oldest_first() {
    let app = TestApp::new();
    let u = app.add_user(&unique_name()).await;
    let chat = app.add_chat("team", &[u]).await;

    for text in ["one", "two", "three"] {
        app.post_message(chat, u, text).await;
    }

    let response = app.post("/messages/get", json!({ "chat": chat })).await;
    response.assert_status_ok();
    let messages: Vec<Message> = result(&response);

    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    assert!(messages.iter().all(|m| m.chat_id == chat && m.author_id == u));
}

#[tokio::test]
async fn test_author_outside_the_chat_is_forbidden() {
    let app = TestApp::new();
    let member = app.add_user(&unique_name()).await;
    let outsider = app.add_user(&unique_name()).await;
    let team = app.add_chat("team", &[member]).await;
    app.add_chat("elsewhere", &[outsider]).await;

    let response = app
        .post(
            "/messages/add",
            json!({ "chat": team, "author": outsider, "text": "hi" }),
        )
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "the user is not in the chat");
}

#[tokio::test]
async fn test_missing_chat_and_author() {
    let app = TestApp::new();
    let u = app.add_user(&unique_name()).await;
    let chat = app.add_chat("team", &[u]).await;

    let response = app
        .post("/messages/add", json!({ "chat": 999, "author": u, "text": "hi" }))
        .await;
    assert_error(
        &response,
        StatusCode::NOT_FOUND,
        "the chat with the provided id doesn't exist",
    );

    let response = app
        .post("/messages/add", json!({ "chat": chat, "author": 999, "text": "hi" }))
        .await;
    assert_error(
        &response,
        StatusCode::NOT_FOUND,
        "the user with the provided id doesn't exist",
    );

    let response = app.post("/messages/get", json!({ "chat": 999 })).await;
    assert_error(
        &response,
        StatusCode::NOT_FOUND,
        "the chat with the provided id doesn't exist",
    );
}

#[test_case(json!({ "author": 1, "text": "hi" }), "'chat' can't be null" ; "chat absent")]
#[test_case(json!({}), "'chat' can't be null" ; "all absent")]
#[test_case(json!({ "chat": 1, "text": "hi" }), "'author' can't be null" ; "author absent")]
#[test_case(json!({ "chat": 1, "author": 1 }), "'text' can't be null" ; "text absent")]
#[test_case(json!({ "chat": 1, "author": 1, "text": "" }), "'text' can't be empty" ; "text empty")]
#[tokio::test]
async fn test_add_message_validation(body: serde_json::Value, message: &str) {
    let app = TestApp::new();

    let response = app.post("/messages/add", body).await;

    assert_error(&response, StatusCode::BAD_REQUEST, message);
}

#[tokio::test]
async fn test_get_messages_requires_chat() {
    let app = TestApp::new();

    let response = app.post("/messages/get", json!({ "chat": null })).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "'chat' can't be null");
}
