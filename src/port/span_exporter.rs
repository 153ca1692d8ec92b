//! SpanExporter trait for span record export.
//!
//! This trait enables dependency injection for testability,
//! allowing harnesses to use mock implementations.

use crate::domain::SpanRecord;
use crate::signal::CompletionSignal;

/// Exporter for finished spans.
///
/// Both operations are fire-and-return: they start the work and hand back a
/// [`CompletionSignal`] the caller may wait on. Whether `export` is accepted
/// after `shutdown`, and whether `shutdown` is idempotent, is the
/// implementation's contract, not this trait's.
pub trait SpanExporter: Send + Sync {
    /// Export a batch of spans. The batch may be empty.
    fn export(&self, batch: Vec<SpanRecord>) -> CompletionSignal;

    /// Begin shutting the exporter down.
    fn shutdown(&self) -> CompletionSignal;
}
