//! MetricExporter trait for metric record export.

use crate::domain::MetricRecord;
use crate::signal::CompletionSignal;

/// Exporter for metric data points.
///
/// Same lifecycle contract as [`SpanExporter`](crate::port::SpanExporter):
/// fire-and-return operations, completion observed through the signal.
pub trait MetricExporter: Send + Sync {
    /// Export a batch of metric data points. The batch may be empty.
    fn export(&self, batch: Vec<MetricRecord>) -> CompletionSignal;

    /// Begin shutting the exporter down.
    fn shutdown(&self) -> CompletionSignal;
}
