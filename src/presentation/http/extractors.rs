//! Custom Extractors
//!
//! JSON body extraction with failures rendered through [`AppError`].

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Like [`Json`], but rejects through the API error envelope.
///
/// Missing `Content-Type: application/json` is 415, an oversized body 413,
/// anything else that fails to decode 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(rejection)),
        }
    }
}

fn malformed(rejection: JsonRejection) -> AppError {
    let status = match rejection.status() {
        // Type mismatches and unknown fields are plain bad requests here
        StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
        status => status,
    };

    AppError::MalformedRequest {
        status,
        message: rejection.body_text(),
    }
}
