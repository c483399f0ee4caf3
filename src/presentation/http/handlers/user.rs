//! User Handlers

use axum::{extract::State, Json};

use crate::application::dto::ApiResponse;
use crate::domain::{CreateUser, UserRepository};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /users/add`
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUser>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    let id = state.services.user.create(body).await?;
    Ok(Json(ApiResponse::ok(id)))
}
