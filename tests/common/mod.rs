//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use loan_service::config::CorsSettings;
use loan_service::infrastructure::repositories::InMemoryLoanApplicationRepository;
use loan_service::shared::clock::FixedClock;
use loan_service::startup::{build_router, AppState};

/// Date the test clock reports as "today"
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryLoanApplicationRepository>,
}

impl TestApp {
    /// Create a new test application backed by in-memory storage
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryLoanApplicationRepository::new());
        let state = AppState::with_clock(repository.clone(), Arc::new(FixedClock(today())));

        Self {
            router: build_router(state, &CorsSettings::default()),
            repository,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response {
        self.send(json_request("POST", uri, body)).await
    }

    /// Make a POST request with a JSON body given as raw text
    pub async fn post_raw(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &serde_json::Value) -> Response {
        self.send(json_request("PUT", uri, body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a CORS preflight request
    pub async fn preflight(&self, uri: &str, method: &str, origin: &str) -> Response {
        self.send(
            Request::builder()
                .method("OPTIONS")
                .uri(uri)
                .header("Origin", origin)
                .header("Access-Control-Request-Method", method)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read the whole response body
pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Read the response body as JSON, asserting the status first
pub async fn json_body(response: Response, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
