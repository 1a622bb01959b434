//! Demonstration handlers, one per envelope shape.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use libapi::response::{
    ApiResponse, Metadata, RequestContext, ResponseRecorder, Status, ValidationError,
    new_api_response, new_error_response, new_success_response, new_validation_error_response,
    respond_json,
};
use libapi_core::error::AppError;

/// Write `payload` as JSON, falling back to a plain-text 500 when it
/// cannot be encoded. `respond_json` has already logged the failure.
fn send<P: Serialize>(status: StatusCode, payload: &P) -> Response {
    let mut recorder = ResponseRecorder::new();
    match respond_json(&mut recorder, status, payload) {
        Ok(()) => recorder.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response(),
    }
}

/// Trace id from the request, or `fallback` when the caller sent none.
fn traced(ctx: &RequestContext, fallback: &str) -> RequestContext {
    match ctx.trace_id() {
        Some(_) => ctx.clone(),
        None => ctx.with_trace_id(fallback),
    }
}

/// GET /api/success
pub async fn success(ctx: RequestContext) -> Response {
    let ctx = traced(&ctx, "trace-123");

    let data = json!({
        "message": "Operation successful",
        "user": {
            "id": "123",
            "name": "John Doe",
        },
    });

    let mut resp: ApiResponse = new_api_response(&ctx);
    resp.status = Status::Success;
    resp.data = Some(data);

    send(StatusCode::OK, &resp)
}

/// Query parameters for [`error`].
#[derive(Debug, Default, Deserialize)]
pub struct ErrorParams {
    /// Make the simulated operation fail.
    #[serde(default)]
    pub fail: bool,
}

/// GET /api/error
pub async fn error(ctx: RequestContext, Query(params): Query<ErrorParams>) -> Response {
    if let Err(e) = simulate_operation(params.fail) {
        tracing::warn!(error = %e, "Simulated operation failed");

        let mut resp: ApiResponse = new_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Database connection failed",
        );
        resp.trace_id = new_api_response::<Value>(&ctx).trace_id;

        return send(resp.http_status(), &resp);
    }

    let mut resp = new_success_response(json!({"status": "ok"}), None);
    resp.trace_id = ctx.trace_id().map(str::to_string);
    send(StatusCode::OK, &resp)
}

/// GET /api/validation
pub async fn validation(ctx: RequestContext) -> Response {
    let details = vec![
        ValidationError::new("email", "Must be a valid email address"),
        ValidationError::new("password", "Must be at least 8 characters long"),
        ValidationError::new("age", "Must be a positive number"),
    ];

    let ctx = traced(&ctx, "validation-trace-456");
    let mut resp: ApiResponse = new_validation_error_response(details);
    resp.trace_id = new_api_response::<Value>(&ctx).trace_id;

    send(StatusCode::UNPROCESSABLE_ENTITY, &resp)
}

/// GET /api/paginated
pub async fn paginated(ctx: RequestContext) -> Response {
    let items = json!([
        {"id": 1, "name": "Item 1", "description": "First item"},
        {"id": 2, "name": "Item 2", "description": "Second item"},
        {"id": 3, "name": "Item 3", "description": "Third item"},
    ]);

    let ctx = traced(&ctx, "pagination-trace-789");
    let mut resp = new_success_response(items, Some(Metadata::new(1, 10, 25)));
    resp.trace_id = new_api_response::<Value>(&ctx).trace_id;

    send(StatusCode::OK, &resp)
}

/// GET /api/health
pub async fn health(ctx: RequestContext) -> ApiResponse {
    new_success_response(
        json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }),
        None,
    )
    .with_trace_id(ctx.trace_id().map(str::to_string))
}

fn simulate_operation(fail: bool) -> Result<(), AppError> {
    if fail {
        return Err(AppError::internal("database connection refused"));
    }
    Ok(())
}
