//! Axum extractors.

pub mod trace;

pub use trace::{DEFAULT_TRACE_HEADER, TraceHeaderName};
