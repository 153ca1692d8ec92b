//! Completion signals for asynchronous exporter operations.

use crate::error::ExportError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Observable state of a [`CompletionSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    /// The operation has not finished yet.
    Pending,
    /// The operation finished successfully.
    Succeeded,
    /// The operation finished with an error.
    Failed,
}

type Outcome = Option<Result<(), Arc<ExportError>>>;

/// Handle to the outcome of one asynchronous exporter operation.
///
/// Producers resolve the signal exactly once with [`succeed`](Self::succeed)
/// or [`fail`](Self::fail); every clone observes the same outcome. Consumers
/// poll [`state`](Self::state) or suspend on [`wait`](Self::wait) with a
/// bound.
#[derive(Debug, Clone)]
pub struct CompletionSignal {
    cell: Arc<watch::Sender<Outcome>>,
}

impl CompletionSignal {
    /// Creates an unresolved signal.
    pub fn pending() -> Self {
        Self {
            cell: Arc::new(watch::Sender::new(None)),
        }
    }

    /// Creates a signal that already resolved successfully.
    pub fn succeeded() -> Self {
        Self {
            cell: Arc::new(watch::Sender::new(Some(Ok(())))),
        }
    }

    /// Creates a signal that already resolved with `cause`.
    pub fn failed(cause: ExportError) -> Self {
        Self {
            cell: Arc::new(watch::Sender::new(Some(Err(Arc::new(cause))))),
        }
    }

    /// Resolves the signal as succeeded.
    ///
    /// The first resolution wins; returns `false` if the signal was already
    /// resolved, leaving the earlier outcome in place.
    pub fn succeed(&self) -> bool {
        self.resolve(Ok(()))
    }

    /// Resolves the signal as failed with `cause`.
    ///
    /// The first resolution wins; returns `false` if the signal was already
    /// resolved.
    pub fn fail(&self, cause: ExportError) -> bool {
        self.resolve(Err(Arc::new(cause)))
    }

    fn resolve(&self, outcome: Result<(), Arc<ExportError>>) -> bool {
        let mut first = false;
        self.cell.send_if_modified(|cell| {
            if cell.is_none() {
                *cell = Some(outcome);
                first = true;
                true
            } else {
                false
            }
        });
        first
    }

    /// Current state.
    pub fn state(&self) -> SignalState {
        match &*self.cell.borrow() {
            None => SignalState::Pending,
            Some(Ok(())) => SignalState::Succeeded,
            Some(Err(_)) => SignalState::Failed,
        }
    }

    /// Whether the signal has resolved, successfully or not.
    pub fn is_resolved(&self) -> bool {
        self.cell.borrow().is_some()
    }

    /// Whether the signal resolved successfully.
    pub fn is_success(&self) -> bool {
        matches!(&*self.cell.borrow(), Some(Ok(())))
    }

    /// The failure cause, if the signal resolved as failed.
    pub fn failure(&self) -> Option<Arc<ExportError>> {
        match &*self.cell.borrow() {
            Some(Err(cause)) => Some(cause.clone()),
            _ => None,
        }
    }

    /// Waits until the signal resolves or `timeout` elapses.
    ///
    /// Returns `true` if the signal resolved within the bound. A `false`
    /// return says nothing about whether the operation is still running.
    pub async fn wait(&self, timeout: Duration) -> bool {
        let mut rx = self.cell.subscribe();
        match tokio::time::timeout(timeout, rx.wait_for(|cell| cell.is_some())).await {
            Ok(resolved) => resolved.is_ok(),
            Err(_) => false,
        }
    }
}
