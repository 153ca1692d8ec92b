//! ProfileExporter trait for profiling sample export.

use crate::domain::ProfileRecord;
use crate::signal::CompletionSignal;

/// Exporter for profiling samples.
pub trait ProfileExporter: Send + Sync {
    /// Export a batch of profiling samples. The batch may be empty.
    fn export(&self, batch: Vec<ProfileRecord>) -> CompletionSignal;

    /// Begin shutting the exporter down.
    fn shutdown(&self) -> CompletionSignal;
}
