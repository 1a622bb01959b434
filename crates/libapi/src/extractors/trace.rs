//! Extracts a [`RequestContext`] from the incoming request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap, HeaderName};

use crate::response::RequestContext;

/// Header read when no [`TraceHeaderName`] extension is installed.
pub const DEFAULT_TRACE_HEADER: &str = "x-trace-id";

/// Request extension overriding the header the trace id is read from.
///
/// Install with `Router::layer(Extension(TraceHeaderName(name)))`.
#[derive(Debug, Clone)]
pub struct TraceHeaderName(pub HeaderName);

impl TraceHeaderName {
    /// Header to read for a request carrying `extensions`.
    pub fn resolve(extensions: &Extensions) -> HeaderName {
        extensions.get::<Self>().map_or_else(
            || HeaderName::from_static(DEFAULT_TRACE_HEADER),
            |custom| custom.0.clone(),
        )
    }
}

impl RequestContext {
    /// Build a context from `headers`, taking the trace id from `name`.
    ///
    /// Missing, blank, or non-UTF-8 header values yield an empty context.
    /// Any other value is kept verbatim.
    pub fn from_headers(headers: &HeaderMap, name: &HeaderName) -> Self {
        match headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
        {
            Some(trace_id) => Self::new().with_trace_id(trace_id),
            None => Self::new(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = TraceHeaderName::resolve(&parts.extensions);
        Ok(Self::from_headers(&parts.headers, &name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    #[test]
    fn test_from_headers_reads_trace_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", HeaderValue::from_static("abc-123"));
        let name = HeaderName::from_static(DEFAULT_TRACE_HEADER);
        let ctx = RequestContext::from_headers(&headers, &name);
        assert_eq!(ctx.trace_id(), Some("abc-123"));
    }

    #[test]
    fn test_from_headers_ignores_blank_value() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", HeaderValue::from_static("   "));
        let name = HeaderName::from_static(DEFAULT_TRACE_HEADER);
        let ctx = RequestContext::from_headers(&headers, &name);
        assert_eq!(ctx.trace_id(), None);
    }

    #[test]
    fn test_from_headers_keeps_value_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", HeaderValue::from_static(" abc "));
        let name = HeaderName::from_static(DEFAULT_TRACE_HEADER);
        let ctx = RequestContext::from_headers(&headers, &name);
        assert_eq!(ctx.trace_id(), Some(" abc "));
    }

    #[test]
    fn test_resolve_header_name() {
        let mut extensions = Extensions::new();
        assert_eq!(TraceHeaderName::resolve(&extensions), DEFAULT_TRACE_HEADER);

        extensions.insert(TraceHeaderName(HeaderName::from_static("x-request-id")));
        assert_eq!(TraceHeaderName::resolve(&extensions), "x-request-id");
    }

    #[tokio::test]
    async fn test_extractor_without_header() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx, RequestContext::new());
    }

    #[tokio::test]
    async fn test_extractor_uses_custom_header() {
        let (mut parts, ()) = Request::builder()
            .header("x-request-id", "req-9")
            .header("x-trace-id", "ignored")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(TraceHeaderName(HeaderName::from_static("x-request-id")));

        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.trace_id(), Some("req-9"));
    }
}
