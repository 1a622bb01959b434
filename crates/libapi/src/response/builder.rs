//! Constructors for the standard envelopes.

use axum::http::StatusCode;

use super::envelope::{ApiError, ApiResponse, Metadata, Status, ValidationError};

/// Error code used by validation error envelopes.
pub const VALIDATION_FAILED_CODE: &str = "VALIDATION_FAILED";

/// Message used by validation error envelopes.
pub const VALIDATION_FAILED_MESSAGE: &str = "The submitted data is invalid";

/// HTTP status of every validation error envelope.
pub const VALIDATION_FAILED_STATUS: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// Create a success envelope carrying `data` and optional pagination `meta`.
pub fn new_success_response<T>(data: T, meta: Option<Metadata>) -> ApiResponse<T> {
    ApiResponse {
        status: Status::Success,
        trace_id: None,
        data: Some(data),
        error: None,
        meta,
    }
}

/// Create an error envelope with no validation details.
///
/// `http_status` is not serialized; pass it on to [`respond_json`].
///
/// [`respond_json`]: super::respond_json
pub fn new_error_response<T>(
    http_status: StatusCode,
    code: impl Into<String>,
    message: impl Into<String>,
) -> ApiResponse<T> {
    error_envelope(ApiError {
        http_status,
        code: code.into(),
        message: message.into(),
        details: Vec::new(),
    })
}

/// Create a `422 Unprocessable Entity` envelope with code
/// [`VALIDATION_FAILED_CODE`] and message [`VALIDATION_FAILED_MESSAGE`].
pub fn new_validation_error_response<T>(details: Vec<ValidationError>) -> ApiResponse<T> {
    new_validation_error_response_with_code_and_message(
        VALIDATION_FAILED_CODE,
        VALIDATION_FAILED_MESSAGE,
        details,
    )
}

/// Like [`new_validation_error_response`] with a caller-chosen code and
/// message. The HTTP status is always `422`.
pub fn new_validation_error_response_with_code_and_message<T>(
    code: impl Into<String>,
    message: impl Into<String>,
    details: Vec<ValidationError>,
) -> ApiResponse<T> {
    error_envelope(ApiError {
        http_status: VALIDATION_FAILED_STATUS,
        code: code.into(),
        message: message.into(),
        details,
    })
}

fn error_envelope<T>(error: ApiError) -> ApiResponse<T> {
    ApiResponse {
        status: Status::Error,
        trace_id: None,
        data: None,
        error: Some(error),
        meta: None,
    }
}
