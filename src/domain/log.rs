//! Log records following the OTel log data model.
//!
//! See: https://opentelemetry.io/docs/specs/otel/logs/data-model/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single log record as handed to a log record exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogRecord {
    /// Timestamp when the event occurred (nanoseconds since Unix epoch)
    pub time_unix_nano: u64,

    /// Timestamp when the event was observed (nanoseconds since Unix epoch)
    pub observed_time_unix_nano: u64,

    /// Trace ID (32-char hex string, empty if uncorrelated)
    pub trace_id: String,

    /// Span ID (16-char hex string, empty if uncorrelated)
    pub span_id: String,

    /// Severity text (e.g., "INFO", "ERROR")
    pub severity_text: String,

    /// Severity number (1-24, see OTel spec)
    pub severity_number: u8,

    /// Log body (message)
    pub body: String,

    /// Log attributes (event-specific key-value pairs)
    pub attributes: HashMap<String, String>,
}
