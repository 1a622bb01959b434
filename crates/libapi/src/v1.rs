//! Version 1 of the response helpers.
//!
//! A stable import path over [`crate::response`]; it adds no behavior.

pub use crate::response::{
    ApiError, ApiResponse, JSON_CONTENT_TYPE, Metadata, RequestContext, ResponseRecorder,
    ResponseWriter, Status, VALIDATION_FAILED_CODE, VALIDATION_FAILED_MESSAGE,
    VALIDATION_FAILED_STATUS, ValidationError, new_api_response, new_error_response,
    new_success_response, new_validation_error_response,
    new_validation_error_response_with_code_and_message, respond_json, with_trace_id,
};
