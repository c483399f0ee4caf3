//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use fake::faker::name::en::FirstName;
use fake::Fake;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use chat_backend::application::dto::ApiResponse;
use chat_backend::application::services::Services;
use chat_backend::config::CorsSettings;
use chat_backend::infrastructure::memory::InMemoryStore;
use chat_backend::startup::{build_router, AppState};

/// The full router over a fresh in-memory store.
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let state = AppState::new(Services::over_store(store.clone()), None);
        let cors = CorsSettings {
            allowed_origins: Vec::new(),
        };
        let server = TestServer::new(build_router(state, &cors)).expect("test server");

        Self { server, store }
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    pub async fn add_user(&self, name: &str) -> i64 {
        let response = self.post("/users/add", json!({ "username": name })).await;
        response.assert_status_ok();
        result(&response)
    }

    pub async fn add_chat(&self, name: &str, users: &[i64]) -> i64 {
        let users: Vec<String> = users.iter().map(i64::to_string).collect();
        let response = self
            .post("/chats/add", json!({ "name": name, "users": users }))
            .await;
        response.assert_status_ok();
        result(&response)
    }

    pub async fn post_message(&self, chat: i64, author: i64, text: &str) -> i64 {
        let response = self
            .post(
                "/messages/add",
                json!({ "chat": chat, "author": author, "text": text }),
            )
            .await;
        response.assert_status_ok();
        result(&response)
    }
}

/// A fresh random user name.
pub fn unique_name() -> String {
    let first: String = FirstName().fake();
    format!("{}_{}", first.to_lowercase(), uuid::Uuid::new_v4().simple())
}

/// The `result` of a success envelope.
pub fn result<T: DeserializeOwned>(response: &TestResponse) -> T {
    let body: ApiResponse<T> = response.json();
    assert!(body.error.is_none());
    body.result
}

/// Assert a failure envelope with the given status and public message.
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body["result"], Value::Null);
    assert_eq!(body["error"], message);
}
