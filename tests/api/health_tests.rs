//! Health Check and Metrics Tests

use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_without_database() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_count_api_requests() {
    let app = TestApp::new();
    app.add_user("metered").await;

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("chat_backend_http_requests_total"));
}
