//! Uniform handle over the four exporter kinds.
//!
//! A harness that needs to drive span, metric, log record, and profile
//! exporters the same way wraps each in a [`TelemetryExporter`] and works
//! against one surface: `export`, `shutdown`, `close`, plus [`unwrap`]
//! to get the concrete exporter back for assertions.
//!
//! [`unwrap`]: TelemetryExporter::unwrap

use crate::domain::{LogRecord, MetricRecord, ProfileRecord, SpanRecord};
use crate::port::{LogRecordExporter, MetricExporter, ProfileExporter, SpanExporter};
use crate::signal::CompletionSignal;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Bound on the wait inside [`TelemetryExporter::close`].
///
/// Fixed by contract. A shutdown that outlasts it keeps running; `close`
/// just stops waiting.
pub const CLOSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Object-safe bridge between one concrete exporter kind and the generic
/// handle. One impl per exporter port; the binding is fixed at construction.
trait ErasedExporter<T>: Send + Sync {
    fn exporter(&self) -> Arc<dyn Any + Send + Sync>;
    fn export(&self, batch: Vec<T>) -> CompletionSignal;
    fn shutdown(&self) -> CompletionSignal;
}

/// Uniform test-facing handle over a span, metric, log record, or profile
/// exporter.
///
/// The handle holds nothing but the wrapped exporter and adds no buffering,
/// batching, retry, or filtering: every signal it returns comes verbatim
/// from the wrapped exporter. Construct with the `wrap_*` constructor
/// matching the exporter kind; the record kind `T` is fixed for the
/// handle's lifetime.
pub struct TelemetryExporter<T> {
    inner: Arc<dyn ErasedExporter<T>>,
}

impl<T> Clone for TelemetryExporter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for TelemetryExporter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelemetryExporter").finish_non_exhaustive()
    }
}

impl<T> TelemetryExporter<T> {
    /// The originally wrapped exporter, untyped.
    ///
    /// Downcast to the concrete type to assert on exporter-specific state
    /// the generic contract does not expose (captured records, call
    /// counts). The returned `Arc` is the same allocation that was passed
    /// at construction, so `Arc::ptr_eq` holds after downcasting.
    pub fn unwrap(&self) -> Arc<dyn Any + Send + Sync> {
        self.inner.exporter()
    }

    /// Forwards `batch` to the wrapped exporter's export.
    ///
    /// Exporting after `shutdown` is not guarded here; what happens is the
    /// wrapped exporter's contract.
    pub fn export(&self, batch: Vec<T>) -> CompletionSignal {
        self.inner.export(batch)
    }

    /// Forwards to the wrapped exporter's shutdown.
    ///
    /// Idempotency is the wrapped exporter's responsibility.
    pub fn shutdown(&self) -> CompletionSignal {
        self.inner.shutdown()
    }

    /// Shuts down and waits for completion, at most [`CLOSE_TIMEOUT`].
    ///
    /// Teardown must not fail: when the bound expires this logs a warning
    /// and returns normally, leaving the shutdown running in the
    /// background. There is no way to abort it.
    pub async fn close(&self) {
        let done = self.shutdown();
        if !done.wait(CLOSE_TIMEOUT).await {
            warn!(
                timeout = ?CLOSE_TIMEOUT,
                "exporter shutdown still pending after close timeout"
            );
        }
    }
}

struct SpanBridge<E>(Arc<E>);

impl<E: SpanExporter + 'static> ErasedExporter<SpanRecord> for SpanBridge<E> {
    fn exporter(&self) -> Arc<dyn Any + Send + Sync> {
        self.0.clone()
    }

    fn export(&self, batch: Vec<SpanRecord>) -> CompletionSignal {
        self.0.export(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.0.shutdown()
    }
}

impl TelemetryExporter<SpanRecord> {
    /// Wraps a [`SpanExporter`].
    pub fn wrap_span<E>(exporter: Arc<E>) -> Self
    where
        E: SpanExporter + 'static,
    {
        Self {
            inner: Arc::new(SpanBridge(exporter)),
        }
    }
}

struct MetricBridge<E>(Arc<E>);

impl<E: MetricExporter + 'static> ErasedExporter<MetricRecord> for MetricBridge<E> {
    fn exporter(&self) -> Arc<dyn Any + Send + Sync> {
        self.0.clone()
    }

    fn export(&self, batch: Vec<MetricRecord>) -> CompletionSignal {
        self.0.export(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.0.shutdown()
    }
}

impl TelemetryExporter<MetricRecord> {
    /// Wraps a [`MetricExporter`].
    pub fn wrap_metric<E>(exporter: Arc<E>) -> Self
    where
        E: MetricExporter + 'static,
    {
        Self {
            inner: Arc::new(MetricBridge(exporter)),
        }
    }
}

struct LogBridge<E>(Arc<E>);

impl<E: LogRecordExporter + 'static> ErasedExporter<LogRecord> for LogBridge<E> {
    fn exporter(&self) -> Arc<dyn Any + Send + Sync> {
        self.0.clone()
    }

    fn export(&self, batch: Vec<LogRecord>) -> CompletionSignal {
        self.0.export(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.0.shutdown()
    }
}

impl TelemetryExporter<LogRecord> {
    /// Wraps a [`LogRecordExporter`].
    pub fn wrap_log<E>(exporter: Arc<E>) -> Self
    where
        E: LogRecordExporter + 'static,
    {
        Self {
            inner: Arc::new(LogBridge(exporter)),
        }
    }
}

struct ProfileBridge<E>(Arc<E>);

impl<E: ProfileExporter + 'static> ErasedExporter<ProfileRecord> for ProfileBridge<E> {
    fn exporter(&self) -> Arc<dyn Any + Send + Sync> {
        self.0.clone()
    }

    fn export(&self, batch: Vec<ProfileRecord>) -> CompletionSignal {
        self.0.export(batch)
    }

    fn shutdown(&self) -> CompletionSignal {
        self.0.shutdown()
    }
}

impl TelemetryExporter<ProfileRecord> {
    /// Wraps a [`ProfileExporter`].
    pub fn wrap_profile<E>(exporter: Arc<E>) -> Self
    where
        E: ProfileExporter + 'static,
    {
        Self {
            inner: Arc::new(ProfileBridge(exporter)),
        }
    }
}
