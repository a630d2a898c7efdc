//! Error types for ritmo.

use thiserror::Error;

/// Errors that can occur in ritmo.
#[derive(Debug, Error)]
pub enum RitmoError {
    /// I/O failure reading or writing habit data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or terminal setup failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// SQLite storage failure.
    #[error("database error: {0}")]
    Database(String),

    /// A habit (or other named item) does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A date argument could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Rejected input at construction or update time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Stored data violates an invariant and must be fixed upstream.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}
