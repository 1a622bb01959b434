//! JSON transport helper and the response sinks it writes into.

use std::io;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use libapi_core::error::AppError;
use libapi_core::result::AppResult;

use super::envelope::ApiResponse;

/// Media type written by [`respond_json`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A response stream: headers, then a status line, then the body.
///
/// Headers must be set through [`headers_mut`] before [`write_header`]
/// commits them. Changes made after the commit are not sent. Writing body
/// bytes before an explicit commit implies `200 OK`.
///
/// [`headers_mut`]: ResponseWriter::headers_mut
/// [`write_header`]: ResponseWriter::write_header
pub trait ResponseWriter: io::Write {
    /// Headers that will be sent when the status line is committed.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Commit the status line and the current headers.
    fn write_header(&mut self, status: StatusCode);
}

/// Serialize `payload` as JSON and write it to `w` with `status`.
///
/// The content type is set and the status committed *before* encoding, so
/// an `Err` means a partial response has already been sent: log it, do not
/// retry with another status.
pub fn respond_json<W, P>(w: &mut W, status: StatusCode, payload: &P) -> AppResult<()>
where
    W: ResponseWriter + ?Sized,
    P: Serialize + ?Sized,
{
    w.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    w.write_header(status);

    serde_json::to_writer(&mut *w, payload).map_err(|err| {
        error!(
            status = status.as_u16(),
            error = %err,
            "Failed to encode JSON response body"
        );
        AppError::from(err)
    })
}

/// In-memory [`ResponseWriter`] that records what was committed.
///
/// Used to drive [`respond_json`] inside axum handlers (convert with
/// [`IntoResponse`]) and to inspect responses in tests.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    pending_headers: HeaderMap,
    committed_headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl ResponseRecorder {
    /// An empty, uncommitted recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, or `None` if nothing has been written.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Headers as they were when the status line was committed.
    pub fn headers(&self) -> &HeaderMap {
        &self.committed_headers
    }

    /// Body bytes written so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the status line has been committed.
    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}

impl ResponseWriter for ResponseRecorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.pending_headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if let Some(committed) = self.status {
            warn!(
                committed = committed.as_u16(),
                ignored = status.as_u16(),
                "Superfluous write_header call"
            );
            return;
        }
        self.status = Some(status);
        self.committed_headers = self.pending_headers.clone();
    }
}

impl io::Write for ResponseRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.is_committed() {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl IntoResponse for ResponseRecorder {
    fn into_response(self) -> Response {
        let headers = if self.is_committed() {
            self.committed_headers
        } else {
            self.pending_headers
        };
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = headers;
        response
    }
}

/// Envelopes respond with their own [`ApiResponse::http_status`].
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut recorder = ResponseRecorder::new();
        match respond_json(&mut recorder, self.http_status(), &self) {
            Ok(()) => recorder.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response(),
        }
    }
}
