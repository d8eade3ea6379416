//! Error types for the scenario runner.

use thiserror::Error;

use fastscroller::ScrollerError;

/// Errors raised while loading configuration or playing a scenario.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error reading a config or scenario file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scroller rejected its configuration or attachment
    #[error("Scroller error: {0}")]
    Scroller(#[from] ScrollerError),

    /// Configuration file version is newer than supported
    #[error("Configuration file version {file_version} is newer than supported version {supported_version}")]
    VersionMismatch {
        file_version: u32,
        supported_version: u32,
    },

    /// A scenario step cannot be played
    #[error("Invalid scenario step {index}: {reason}")]
    InvalidStep {
        /// Zero-based position of the step
        index: usize,
        reason: String,
    },
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;
