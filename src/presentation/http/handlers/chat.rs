//! Chat Handlers

use axum::{extract::State, Json};

use crate::application::dto::ApiResponse;
use crate::domain::{ChatDetails, ChatRepository, ChatsByUser, CreateChat};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /chats/add`
pub async fn add_chat(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateChat>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    let id = state.services.chat.create(body).await?;
    Ok(Json(ApiResponse::ok(id)))
}

/// `POST /chats/get`: the user's chats, most recently active first.
pub async fn get_chats(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ChatsByUser>,
) -> Result<Json<ApiResponse<Vec<ChatDetails>>>, AppError> {
    let chats = state.services.chat.by_user_id(body.user_id()).await?;
    Ok(Json(ApiResponse::ok(chats)))
}
