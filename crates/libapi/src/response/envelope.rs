//! Envelope types shared by every JSON response.

use std::fmt;

use axum::http::StatusCode;
use serde::ser::{self, Impossible};
use serde::{Deserialize, Serialize, Serializer};

/// Outcome carried in the `status` field of every envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation succeeded.
    #[default]
    Success,
    /// The operation failed; see the envelope's `error` field.
    Error,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the offending input field.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured error information carried by error envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status the caller should respond with. Never serialized.
    #[serde(skip)]
    pub http_status: StatusCode,
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level validation errors, in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationError>,
}

/// Pagination metadata for list responses.
///
/// Each field is independently optional; `Some(0)` is a real value and is
/// serialized as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Current page number (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Number of items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    /// Total number of items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

impl Metadata {
    /// Metadata with all three values set.
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total_items: Some(total_items),
        }
    }
}

/// The standard response envelope.
///
/// `T` is the payload type; it defaults to [`serde_json::Value`] for
/// handlers that build payloads dynamically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// `"success"` or `"error"`.
    pub status: Status,
    /// Request trace identifier. Omitted when absent or empty.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub trace_id: Option<String>,
    /// Payload of a success response. Omitted when absent or when the
    /// payload itself encodes as JSON `null`.
    #[serde(skip_serializing_if = "is_null_payload")]
    pub data: Option<T>,
    /// Error detail of an error response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Pagination metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status: Status::default(),
            trace_id: None,
            data: None,
            error: None,
            meta: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Replace the trace identifier, consuming the envelope.
    pub fn with_trace_id(mut self, trace_id: Option<String>) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// HTTP status implied by the envelope: the error's `http_status`, or
    /// `200 OK` for anything without an error.
    pub fn http_status(&self) -> StatusCode {
        self.error
            .as_ref()
            .map_or(StatusCode::OK, |error| error.http_status)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_null_payload<T: Serialize>(value: &Option<T>) -> bool {
    value
        .as_ref()
        .is_none_or(|payload| payload.serialize(NullCheck).unwrap_or(false))
}

/// Serializer answering whether a value encodes as JSON `null`.
///
/// Stops at the first token, so sequences, maps and structs are rejected
/// without being walked.
struct NullCheck;

#[derive(Debug)]
struct NotNull;

impl fmt::Display for NotNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not null")
    }
}

impl std::error::Error for NotNull {}

impl ser::Error for NotNull {
    fn custom<M: fmt::Display>(_msg: M) -> Self {
        NotNull
    }
}

impl Serializer for NullCheck {
    type Ok = bool;
    type Error = NotNull;
    type SerializeSeq = Impossible<bool, NotNull>;
    type SerializeTuple = Impossible<bool, NotNull>;
    type SerializeTupleStruct = Impossible<bool, NotNull>;
    type SerializeTupleVariant = Impossible<bool, NotNull>;
    type SerializeMap = Impossible<bool, NotNull>;
    type SerializeStruct = Impossible<bool, NotNull>;
    type SerializeStructVariant = Impossible<bool, NotNull>;

    fn serialize_none(self) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_unit(self) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, NotNull> {
        Ok(true)
    }

    fn serialize_some<V: ?Sized + Serialize>(self, value: &V) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_newtype_struct<V: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &V,
    ) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_i8(self, _v: i8) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_i16(self, _v: i16) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_i32(self, _v: i32) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_i64(self, _v: i64) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_u8(self, _v: u8) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_u16(self, _v: u16) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_u32(self, _v: u32) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_u64(self, _v: u64) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_f32(self, _v: f32) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_f64(self, _v: f64) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_char(self, _v: char) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_str(self, _v: &str) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_newtype_variant<V: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &V,
    ) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotNull> {
        Err(NotNull)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotNull> {
        Err(NotNull)
    }
}
