use thiserror::Error;

/// Unified error type for release-check operations
#[derive(Error, Debug)]
pub enum ReleaseCheckError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-check
pub type Result<T> = std::result::Result<T, ReleaseCheckError>;

impl ReleaseCheckError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Config(msg.into())
    }

    /// Create a snapshot error with context
    pub fn snapshot(msg: impl Into<String>) -> Self {
        ReleaseCheckError::Snapshot(msg.into())
    }
}
