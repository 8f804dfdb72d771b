//! Error type for the driver's file and configuration handling.

/// Everything that can go wrong outside the simulation itself.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a config or high-score file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Config(String),
}
