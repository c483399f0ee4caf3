//! End-to-end flow through every endpoint.

use pretty_assertions::assert_eq;
use serde_json::json;

use chat_backend::domain::{ChatDetails, Message};

use crate::common::{result, TestApp};

#[tokio::test]
async fn test_team_chat_flow() {
    let app = TestApp::new();

    let alice = app.add_user("alice").await;
    let bob = app.add_user("bob").await;
    let team = app.add_chat("team", &[alice, bob]).await;
    let message = app.post_message(team, alice, "hello bob").await;

    let response = app.post("/messages/get", json!({ "chat": team })).await;
    let messages: Vec<Message> = result(&response);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, message);
    assert_eq!(messages[0].author_id, alice);
    assert_eq!(messages[0].text, "hello bob");

    let response = app
        .post("/chats/get", json!({ "user": bob.to_string() }))
        .await;
    let chats: Vec<ChatDetails> = result(&response);
    assert_eq!(chats.len(), 1);

    let chat = &chats[0];
    assert_eq!(chat.chat.name, "team");
    assert_eq!(chat.messages, messages);

    let members: Vec<(i64, &str)> = chat
        .users
        .iter()
        .map(|u| (u.id, u.name.as_str()))
        .collect();
    assert_eq!(members, vec![(alice, "alice"), (bob, "bob")]);
}

#[tokio::test]
async fn test_listing_preload_is_history_reversed() {
    let app = TestApp::new();

    let alice = app.add_user("alice").await;
    let bob = app.add_user("bob").await;
    let team = app.add_chat("team", &[alice, bob]).await;
    let first = app.post_message(team, alice, "first").await;
    let second = app.post_message(team, bob, "second").await;
    let third = app.post_message(team, alice, "third").await;

    let response = app.post("/messages/get", json!({ "chat": team })).await;
    let history: Vec<Message> = result(&response);
    let ids: Vec<i64> = history.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first, second, third]);

    let response = app
        .post("/chats/get", json!({ "user": alice.to_string() }))
        .await;
    let chats: Vec<ChatDetails> = result(&response);
    assert_eq!(chats.len(), 1);

    let preloaded = &chats[0].messages;
    assert_ne!(preloaded, &history);

    let mut reversed = history.clone();
    reversed.reverse();
    assert_eq!(preloaded, &reversed);
}
