//! LogRecordExporter trait for log record export.

use crate::domain::LogRecord;
use crate::signal::CompletionSignal;

/// Exporter for log records.
pub trait LogRecordExporter: Send + Sync {
    /// Export a batch of log records. The batch may be empty.
    fn export(&self, batch: Vec<LogRecord>) -> CompletionSignal;

    /// Begin shutting the exporter down.
    fn shutdown(&self) -> CompletionSignal;
}
