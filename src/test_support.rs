//! Shared test support utilities
//!
//! Provides a `MockExporter<T>` implementing the exporter port for every
//! record kind, plus a `SlowExporter` with a delayed or never-resolving
//! shutdown, for use in unit and integration tests.

use crate::domain::{LogRecord, MetricRecord, ProfileRecord, SpanRecord};
use crate::error::ExportError;
use crate::port::{LogRecordExporter, MetricExporter, ProfileExporter, SpanExporter};
use crate::signal::CompletionSignal;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Mock exporter that captures exported records for testing.
///
/// Implements the exporter port matching its record kind, so the same type
/// serves all four. Records are appended in export order; `shutdown` only
/// counts calls and succeeds. Keeps accepting batches after shutdown;
/// guarding that is the wrapped exporter's contract, not the mock's.
pub struct MockExporter<T> {
    exported: Mutex<Vec<T>>,
    shutdown_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl<T: Clone> MockExporter<T> {
    pub fn new() -> Self {
        Self {
            exported: Mutex::new(Vec::new()),
            shutdown_calls: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    /// When set, `export` returns a failed signal and records nothing.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Everything exported so far, in order.
    pub fn exported(&self) -> Vec<T> {
        self.exported.lock().unwrap().clone()
    }

    pub fn shutdown_calls(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }

    fn record(&self, batch: Vec<T>) -> CompletionSignal {
        if self.should_fail.load(Ordering::SeqCst) {
            return CompletionSignal::failed(ExportError::Backend(
                "mock export failure".to_string(),
            ));
        }
        self.exported.lock().unwrap().extend(batch);
        CompletionSignal::succeeded()
    }

    fn note_shutdown(&self) -> CompletionSignal {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        CompletionSignal::succeeded()
    }
}

impl<T: Clone> Default for MockExporter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanExporter for MockExporter<SpanRecord> {
    fn export(&self, batch: Vec<SpanRecord>) -> CompletionSignal {
        self.record(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.note_shutdown()
    }
}

impl MetricExporter for MockExporter<MetricRecord> {
    fn export(&self, batch: Vec<MetricRecord>) -> CompletionSignal {
        self.record(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.note_shutdown()
    }
}

impl LogRecordExporter for MockExporter<LogRecord> {
    fn export(&self, batch: Vec<LogRecord>) -> CompletionSignal {
        self.record(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.note_shutdown()
    }
}

impl ProfileExporter for MockExporter<ProfileRecord> {
    fn export(&self, batch: Vec<ProfileRecord>) -> CompletionSignal {
        self.record(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.note_shutdown()
    }
}

/// Exporter whose shutdown resolves after a configured delay, or never.
///
/// `export` succeeds immediately. The delayed resolution is spawned onto
/// the ambient tokio runtime, so `shutdown` must be called from within one.
pub struct SlowExporter {
    shutdown_delay: Option<Duration>,
}

impl SlowExporter {
    /// Shutdown resolves after `delay`.
    pub fn resolving_after(delay: Duration) -> Self {
        Self {
            shutdown_delay: Some(delay),
        }
    }

    /// Shutdown never resolves.
    pub fn never_resolving() -> Self {
        Self {
            shutdown_delay: None,
        }
    }

    fn begin_shutdown(&self) -> CompletionSignal {
        let signal = CompletionSignal::pending();
        if let Some(delay) = self.shutdown_delay {
            let done = signal.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                done.succeed();
            });
        }
        signal
    }
}

impl SpanExporter for SlowExporter {
    fn export(&self, _batch: Vec<SpanRecord>) -> CompletionSignal {
        CompletionSignal::succeeded()
    }

    fn shutdown(&self) -> CompletionSignal {
        self.begin_shutdown()
    }
}

impl MetricExporter for SlowExporter {
    fn export(&self, _batch: Vec<MetricRecord>) -> CompletionSignal {
        CompletionSignal::succeeded()
    }

    fn shutdown(&self) -> CompletionSignal {
        self.begin_shutdown()
    }
}
