//! Health Check and Metrics API Tests

use axum::http::StatusCode;

use crate::common::{body_bytes, json_body, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let json = json_body(app.get("/health").await, StatusCode::OK).await;

    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let json = json_body(app.get("/health/live").await, StatusCode::OK).await;

    assert_eq!(json["status"], "alive");
}

/// Readiness reports the storage check
#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::new();

    let json = json_body(app.get("/health/ready").await, StatusCode::OK).await;

    assert_eq!(json["storage"]["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_track_loan_routes() {
    let app = TestApp::new();
    app.get("/api/loans").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();

    assert!(text.contains("loan_service_http_requests_total"));
    assert!(text.contains("path=\"/api/loans\""));
}
