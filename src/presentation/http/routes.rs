//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::extractors::MAX_BODY_BYTES;
use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::no_such_endpoint)
        .method_not_allowed_fallback(handlers::no_such_method)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Messaging API, JSON over `POST`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/add", post(handlers::user::add_user))
        .route("/chats/add", post(handlers::chat::add_chat))
        .route("/chats/get", post(handlers::chat::get_chats))
        .route("/messages/add", post(handlers::message::add_message))
        .route("/messages/get", post(handlers::message::get_messages))
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
