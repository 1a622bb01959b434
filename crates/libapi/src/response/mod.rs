//! Standard response envelopes and the JSON transport helper.
//!
//! Every handler answers with the same shape:
//!
//! ```json
//! {
//!   "status": "success",
//!   "trace_id": "trace-123",
//!   "data": { "id": 1 },
//!   "meta": { "page": 1, "per_page": 10, "total_items": 25 }
//! }
//! ```
//!
//! Build an [`ApiResponse`] with one of the builders, then hand it to
//! [`respond_json`] together with the status to send.

pub mod builder;
pub mod context;
pub mod envelope;
pub mod writer;

pub use builder::{
    VALIDATION_FAILED_CODE, VALIDATION_FAILED_MESSAGE, VALIDATION_FAILED_STATUS,
    new_error_response, new_success_response, new_validation_error_response,
    new_validation_error_response_with_code_and_message,
};
pub use context::{RequestContext, new_api_response, with_trace_id};
pub use envelope::{ApiError, ApiResponse, Metadata, Status, ValidationError};
pub use writer::{JSON_CONTENT_TYPE, ResponseRecorder, ResponseWriter, respond_json};
