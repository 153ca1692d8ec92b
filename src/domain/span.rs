//! Span records following the OTel trace data model.
//!
//! See: https://opentelemetry.io/docs/specs/otel/trace/api/#span

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A finished span as handed to a span exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpanRecord {
    /// Trace ID (32-char hex string)
    pub trace_id: String,

    /// Span ID (16-char hex string)
    pub span_id: String,

    /// Parent span ID (empty if root span)
    pub parent_span_id: String,

    /// Span name/operation name
    pub name: String,

    /// Span kind (SERVER, CLIENT, etc.)
    pub kind: SpanKind,

    /// Start timestamp (nanoseconds since Unix epoch)
    pub start_time_unix_nano: u64,

    /// End timestamp (nanoseconds since Unix epoch)
    pub end_time_unix_nano: u64,

    /// Status code
    pub status_code: StatusCode,

    /// Status message (for error status)
    pub status_message: String,

    /// Span attributes
    pub attributes: HashMap<String, String>,
}

/// OpenTelemetry Span Kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum SpanKind {
    #[default]
    Unspecified,
    Internal,
    Server,
    Client,
    Producer,
    Consumer,
}

/// OpenTelemetry Status Code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum StatusCode {
    #[default]
    Unset,
    Ok,
    Error,
}
