//! # libapi
//!
//! Uniform JSON response envelopes for axum services: status, trace id,
//! payload, error detail and pagination metadata, plus a helper that
//! writes any serializable payload as a JSON response.
//!
//! Import from [`v1`] for a versioned path, or from [`response`] directly.

pub mod extractors;
pub mod response;
pub mod v1;

pub use response::{ApiResponse, RequestContext, respond_json};
