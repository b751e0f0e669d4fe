//! Common error types for the AMR surveillance services

use thiserror::Error;

/// Common result type for AMR operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the AMR crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Guideline name not recognized by the engine.
    /// Silently defaulting would hide a configuration mistake upstream,
    /// so this always fails fast.
    #[error("Unsupported guideline: {0}")]
    UnsupportedGuideline(String),

    /// Invalid user input or caller contract violation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
