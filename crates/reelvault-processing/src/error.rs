use thiserror::Error;

/// Errors from the external probe/remux collaborators.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Probe failed: {0}")]
    ProbeFailed(String),

    #[error("Remux failed: {0}")]
    RemuxFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
