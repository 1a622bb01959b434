//! End-to-end tests of the demo routes.

use http::StatusCode;
use http::header::CONTENT_TYPE;
use serde_json::json;

use libapi_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_success_route() {
    let app = TestApp::new();

    let response = app.get("/api/success", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[CONTENT_TYPE], "application/json");
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["trace_id"], "trace-123");
    assert_eq!(response.body["data"]["user"]["name"], "John Doe");
    assert!(response.body.get("error").is_none());
    assert!(response.body.get("meta").is_none());
}

#[tokio::test]
async fn test_success_route_prefers_request_trace_id() {
    let app = TestApp::new();

    let response = app
        .get("/api/success", &[("x-trace-id", "upstream-42")])
        .await;

    assert_eq!(response.body["trace_id"], "upstream-42");
}

#[tokio::test]
async fn test_error_route_without_failure() {
    let app = TestApp::new();

    let response = app.get("/api/error", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"status": "success", "data": {"status": "ok"}})
    );
}

#[tokio::test]
async fn test_error_route_with_failure() {
    let app = TestApp::new();

    let response = app
        .get("/api/error?fail=true", &[("X-Trace-ID", "err-trace-1")])
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({
            "status": "error",
            "trace_id": "err-trace-1",
            "error": {
                "code": "INTERNAL_ERROR",
                "message": "Database connection failed",
            },
        })
    );
}

#[tokio::test]
async fn test_error_route_without_trace_header() {
    let app = TestApp::new();

    let response = app.get("/api/error?fail=true", &[]).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.get("trace_id").is_none());
    assert!(response.body["error"].get("http_status").is_none());
}

#[tokio::test]
async fn test_validation_route() {
    let app = TestApp::new();

    let response = app.get("/api/validation", &[]).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["status"], "error");
    assert_eq!(response.body["trace_id"], "validation-trace-456");
    assert_eq!(response.body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(
        response.body["error"]["details"],
        json!([
            {"field": "email", "message": "Must be a valid email address"},
            {"field": "password", "message": "Must be at least 8 characters long"},
            {"field": "age", "message": "Must be a positive number"},
        ])
    );
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_paginated_route() {
    let app = TestApp::new();

    let response = app.get("/api/paginated", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["trace_id"], "pagination-trace-789");
    assert_eq!(response.body["data"].as_array().unwrap().len(), 3);
    assert_eq!(
        response.body["meta"],
        json!({"page": 1, "per_page": 10, "total_items": 25})
    );
}

#[tokio::test]
async fn test_health_route() {
    let app = TestApp::new();

    let response = app.get("/api/health", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[CONTENT_TYPE], "application/json");
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body.get("trace_id").is_none());
}

#[tokio::test]
async fn test_custom_trace_header() {
    let mut config = AppConfig::default();
    config.server.trace_header = "x-request-id".to_string();
    let app = TestApp::with_config(config);

    let response = app
        .get("/api/health", &[("x-request-id", "req-77"), ("x-trace-id", "other")])
        .await;

    assert_eq!(response.body["trace_id"], "req-77");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.get("/api/missing", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.is_empty());
}

#[test]
fn test_invalid_trace_header_is_rejected() {
    let mut config = AppConfig::default();
    config.server.trace_header = "bad header".to_string();

    let err = libapi_demo::build_router(&config).unwrap_err();
    assert_eq!(err.kind, libapi_core::error::ErrorKind::Configuration);
}
