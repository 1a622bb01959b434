//! Per-request context carrying the trace identifier.

use super::envelope::ApiResponse;

/// Values scoped to a single request, passed explicitly through handlers.
///
/// A context is never mutated after construction: [`with_trace_id`]
/// returns a derived copy, so requests that share a parent context cannot
/// observe each other's trace identifiers.
///
/// [`with_trace_id`]: RequestContext::with_trace_id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: Option<String>,
}

impl RequestContext {
    /// An empty context with no trace identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context carrying `trace_id`.
    #[must_use]
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        let mut derived = self.clone();
        derived.trace_id = Some(trace_id.into());
        derived
    }

    /// The trace identifier, if one was attached.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

/// Attach `trace_id` to `ctx`, returning the derived context.
pub fn with_trace_id(ctx: &RequestContext, trace_id: impl Into<String>) -> RequestContext {
    ctx.with_trace_id(trace_id)
}

/// Build an envelope whose `trace_id` comes from `ctx`.
///
/// Only the trace identifier is populated. Callers either fill in the rest
/// of the envelope or copy `trace_id` into the result of a builder:
///
/// ```
/// use libapi::response::{ApiResponse, RequestContext, new_api_response, new_error_response};
/// use axum::http::StatusCode;
///
/// let ctx = RequestContext::new().with_trace_id("trace-123");
/// let mut resp: ApiResponse =
///     new_error_response(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "boom");
/// resp.trace_id = new_api_response::<()>(&ctx).trace_id;
/// assert_eq!(resp.trace_id.as_deref(), Some("trace-123"));
/// ```
pub fn new_api_response<T>(ctx: &RequestContext) -> ApiResponse<T> {
    ApiResponse {
        trace_id: ctx.trace_id.clone(),
        ..ApiResponse::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_context_without_trace_id() {
        let resp: ApiResponse<Value> = new_api_response(&RequestContext::new());
        assert_eq!(resp.trace_id, None);
        assert!(resp.data.is_none());
        assert!(resp.error.is_none());
        assert!(resp.meta.is_none());
    }

    #[test]
    fn test_context_with_trace_id() {
        let ctx = with_trace_id(&RequestContext::new(), "test-trace-id");
        let resp: ApiResponse<Value> = new_api_response(&ctx);
        assert_eq!(resp.trace_id.as_deref(), Some("test-trace-id"));
    }

    #[test]
    fn test_with_trace_id_leaves_parent_untouched() {
        let parent = RequestContext::new();
        let child = parent.with_trace_id("test-trace-123");

        assert_ne!(parent, child);
        assert_eq!(parent.trace_id(), None);
        assert_eq!(child.trace_id(), Some("test-trace-123"));
    }

    #[test]
    fn test_derived_contexts_are_independent() {
        let parent = RequestContext::new().with_trace_id("parent");
        let a = parent.with_trace_id("a");
        let b = parent.with_trace_id("b");

        assert_eq!(parent.trace_id(), Some("parent"));
        assert_eq!(a.trace_id(), Some("a"));
        assert_eq!(b.trace_id(), Some("b"));
    }
}
