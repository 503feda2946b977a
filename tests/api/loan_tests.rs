//! Loan Application API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_bytes, json_body, today, TestApp};

#[tokio::test]
async fn test_full_lifecycle() {
    let app = TestApp::new();

    // Create with only the required fields
    let created = json_body(
        app.post_json("/api/loans", &json!({"applicantName": "Alice", "loanAmount": 10000}))
            .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["applicationDate"], today().to_string());
    assert_eq!(created["loanAmount"].as_f64(), Some(10000.0));

    // Read it back
    let fetched = json_body(app.get("/api/loans/1").await, StatusCode::OK).await;
    assert_eq!(fetched, created);

    // Replace it
    let updated = json_body(
        app.put_json(
            "/api/loans/1",
            &json!({
                "applicantName": "Alice B",
                "loanAmount": 12000,
                "status": "APPROVED",
                "applicationDate": "2024-01-01"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["applicantName"], "Alice B");
    assert_eq!(updated["loanAmount"].as_f64(), Some(12000.0));
    assert_eq!(updated["status"], "APPROVED");
    assert_eq!(updated["applicationDate"], "2024-01-01");

    // Delete it
    let response = app.delete("/api/loans/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    // Gone
    let response = app.get("/api/loans/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_list_empty_returns_array() {
    let app = TestApp::new();

    let json = json_body(app.get("/api/loans").await, StatusCode::OK).await;

    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let app = TestApp::new();
    for (name, amount) in [("Alice", 1000), ("Bob", 2000), ("Carol", 3000)] {
        let response = app
            .post_json("/api/loans", &json!({"applicantName": name, "loanAmount": amount}))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = json_body(app.get("/api/loans").await, StatusCode::OK).await;

    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|loan| loan["applicantName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_create_keeps_supplied_values_and_ignores_id() {
    let app = TestApp::new();

    let created = json_body(
        app.post_json(
            "/api/loans",
            &json!({
                "id": 77,
                "applicantName": "Dana",
                "loanAmount": 2500.75,
                "applicationDate": "2024-05-01",
                "status": "REJECTED",
                "email": "dana@example.com",
                "phoneNumber": "555-0199",
                "income": 48000,
                "creditScore": 640
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let expected: serde_json::Value = serde_json::from_str(
        r#"{
            "id": 1,
            "applicantName": "Dana",
            "loanAmount": 2500.75,
            "applicationDate": "2024-05-01",
            "status": "REJECTED",
            "email": "dana@example.com",
            "phoneNumber": "555-0199",
            "income": 48000.00,
            "creditScore": 640
        }"#,
    )
    .unwrap();
    assert_eq!(created, expected);
}

#[tokio::test]
async fn test_amounts_round_trip_exactly() {
    let app = TestApp::new();
    let body = r#"{"applicantName": "Zed", "loanAmount": 12345678901234567.89, "income": 98765432109876543.21}"#;

    let created = json_body(app.post_raw("/api/loans", body).await, StatusCode::CREATED).await;
    assert_eq!(created["loanAmount"].to_string(), "12345678901234567.89");
    assert_eq!(created["income"].to_string(), "98765432109876543.21");

    // Sending the record back unchanged leaves the amounts untouched
    let updated = json_body(app.put_json("/api/loans/1", &created).await, StatusCode::OK).await;
    assert_eq!(updated, created);

    let fetched = json_body(app.get("/api/loans/1").await, StatusCode::OK).await;
    assert_eq!(fetched["loanAmount"].to_string(), "12345678901234567.89");
}

#[tokio::test]
async fn test_string_amount_is_accepted_exactly() {
    let app = TestApp::new();

    let created = json_body(
        app.post_json(
            "/api/loans",
            &json!({"applicantName": "Zed", "loanAmount": "12345678901234567.89"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(created["loanAmount"].to_string(), "12345678901234567.89");
}

#[tokio::test]
async fn test_amount_wider_than_column_is_storage_failure() {
    let app = TestApp::new();

    let response = app
        .post_raw(
            "/api/loans",
            r#"{"applicantName": "Zed", "loanAmount": 100000000000000000}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_create_with_empty_status_defaults_to_pending() {
    let app = TestApp::new();

    let created = json_body(
        app.post_json(
            "/api/loans",
            &json!({"applicantName": "Eve", "loanAmount": 500, "status": ""}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(created["status"], "PENDING");
}

#[tokio::test]
async fn test_create_without_required_field_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/loans", &json!({"applicantName": "Frank"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_update_clears_omitted_optional_fields() {
    let app = TestApp::new();
    app.post_json(
        "/api/loans",
        &json!({
            "applicantName": "Grace",
            "loanAmount": 9000,
            "email": "grace@example.com",
            "income": 61000,
            "creditScore": 720
        }),
    )
    .await;

    let updated = json_body(
        app.put_json(
            "/api/loans/1",
            &json!({
                "applicantName": "Grace",
                "loanAmount": 9000,
                "applicationDate": "2024-03-03",
                "status": "PENDING"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(updated["email"], json!(null));
    assert_eq!(updated["income"], json!(null));
    assert_eq!(updated["creditScore"], json!(null));
}

#[tokio::test]
async fn test_update_missing_record_is_not_found() {
    let app = TestApp::new();
    app.post_json("/api/loans", &json!({"applicantName": "Heidi", "loanAmount": 100}))
        .await;

    let response = app
        .put_json(
            "/api/loans/42",
            &json!({
                "applicantName": "Mallory",
                "loanAmount": 1,
                "applicationDate": "2024-01-01",
                "status": "APPROVED"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let untouched = json_body(app.get("/api/loans/1").await, StatusCode::OK).await;
    assert_eq!(untouched["applicantName"], "Heidi");
    assert_eq!(app.repository.len(), 1);
}

#[tokio::test]
async fn test_delete_missing_record_is_not_found() {
    let app = TestApp::new();
    app.post_json("/api/loans", &json!({"applicantName": "Ivan", "loanAmount": 100}))
        .await;

    let response = app.delete("/api/loans/2").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.repository.len(), 1);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = TestApp::new();
    app.post_json("/api/loans", &json!({"applicantName": "Judy", "loanAmount": 100}))
        .await;
    app.delete("/api/loans/1").await;

    let created = json_body(
        app.post_json("/api/loans", &json!({"applicantName": "Ken", "loanAmount": 200}))
            .await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(created["id"], 2);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/loans/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preflight_allows_put_from_any_origin() {
    let app = TestApp::new();

    let response = app.preflight("/api/loans/1", "PUT", "http://frontend.test").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
