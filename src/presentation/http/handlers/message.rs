//! Message Handlers

use axum::{extract::State, Json};

use crate::application::dto::ApiResponse;
use crate::domain::{CreateMessage, Message, MessageRepository, MessagesByChat};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /messages/add`
pub async fn add_message(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateMessage>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    let id = state.services.message.create(body).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// `POST /messages/get`: the chat's messages, oldest first.
pub async fn get_messages(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<MessagesByChat>,
) -> Result<Json<ApiResponse<Vec<Message>>>, AppError> {
    let messages = state.services.message.by_chat_id(body.chat).await?;
    Ok(Json(ApiResponse::ok(messages)))
}
