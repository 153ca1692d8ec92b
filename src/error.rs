use thiserror::Error;

/// Failure cause carried by a failed completion signal.
///
/// The adapter never produces these itself; they originate in the wrapped
/// exporter and are forwarded unchanged.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("exporter backend rejected the batch: {0}")]
    Backend(String),

    #[error("exporter I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("exporter is already shut down")]
    AlreadyShutdown,
}
