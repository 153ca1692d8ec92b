#![warn(rust_2018_idioms)]

//! Uniform test-facing adapter over the four telemetry exporter kinds.
//!
//! A test harness drives span, metric, log record, and profile exporters
//! through one generic handle, [`TelemetryExporter`]: push a batch of
//! records, shut down, and tear down deterministically with a bounded wait.
//! Wire formats, retries, and batching stay with the wrapped exporter; this
//! crate only unifies the shape and the completion contract.

pub mod adapter;
pub mod domain;
pub mod error;
pub mod port;
pub mod signal;
pub mod test_support;

pub use adapter::{CLOSE_TIMEOUT, TelemetryExporter};
pub use error::ExportError;
pub use signal::{CompletionSignal, SignalState};
