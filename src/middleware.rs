//! Access log for the demo API.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use libapi::RequestContext;
use libapi::extractors::TraceHeaderName;

/// Logged in place of a trace id when the caller sent none.
const NO_TRACE_ID: &str = "-";

/// Logs one `access` event per request, keyed by the caller's trace id.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let trace_id = access_trace_id(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        target: "libapi_demo::access",
        trace_id = %trace_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request served"
    );

    response
}

/// Trace id read from the header the router is configured with.
fn access_trace_id(request: &Request) -> String {
    let header = TraceHeaderName::resolve(request.extensions());
    RequestContext::from_headers(request.headers(), &header)
        .trace_id()
        .unwrap_or(NO_TRACE_ID)
        .to_owned()
}
