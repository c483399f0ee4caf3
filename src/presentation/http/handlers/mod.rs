//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers decode, delegate to a
//! service and wrap the result; classification lives in `AppError`.

pub mod chat;
pub mod health;
pub mod message;
pub mod user;

use axum::http::{Method, Uri};

use crate::shared::error::AppError;

/// Fallback for paths no route matches.
pub async fn no_such_endpoint(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No such endpoint");
    AppError::NoSuchEndpoint
}

/// Fallback for known paths requested with the wrong method.
pub async fn no_such_method(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No such method");
    AppError::NoSuchMethod
}
