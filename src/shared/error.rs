//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure the core
//! can produce is classified here into exactly one HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Malformed, missing or empty required request fields (400).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'username' can't be null")]
    UserNameIsNull,

    #[error("'username' can't be empty")]
    UserNameIsEmpty,

    #[error("'name' can't be null")]
    ChatNameIsNull,

    #[error("'name' can't be empty")]
    ChatNameIsEmpty,

    #[error("'users' can't be null")]
    ChatUsersIsNull,

    #[error("'users' can't be empty")]
    ChatUsersIsEmpty,

    #[error("'users' can't contain null(s)")]
    ChatUsersContainNull,

    #[error("'user' can't be null")]
    ChatUserIsNull,

    #[error("'chat' can't be null")]
    MessageChatIsNull,

    #[error("'author' can't be null")]
    MessageAuthorIsNull,

    #[error("'text' can't be null")]
    MessageTextIsNull,

    #[error("'text' can't be empty")]
    MessageTextIsEmpty,
}

/// A referenced chat or user is absent (404).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("the chat with the provided id doesn't exist")]
    ChatDoesntExist,

    #[error("the user with the provided id doesn't exist")]
    UserDoesntExist,
}

/// Duplicate names or member sets that don't fully resolve (409).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("user with this name already exists")]
    UserAlreadyExists,

    #[error("The chat with this name already exists")]
    ChatAlreadyExists,

    #[error("Some users don't exist")]
    SomeUsersDontExist,
}

/// The caller may not perform the mutation (401).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForbiddenError {
    #[error("the user is not in the chat")]
    UserIsNotInChat,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be decoded.
    #[error("{message}")]
    MalformedRequest { status: StatusCode, message: String },

    #[error("No such endpoint exists")]
    NoSuchEndpoint,

    #[error("No such HTTP method for this endpoint")]
    NoSuchMethod,
}

impl AppError {
    /// HTTP status this error is classified as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedRequest { status, .. } => *status,
            AppError::NoSuchEndpoint | AppError::NoSuchMethod => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to hand to the caller. Store-level detail never leaks.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) | AppError::Database(_) => "Internal server error".into(),
            other => other.to_string(),
        }
    }

    /// Whether this error should be logged as a server-side fault.
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub result: Option<()>,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!(error = %self, "Request failed with an internal error");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            result: None,
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
