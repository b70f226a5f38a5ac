//! Error types for the tracker_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No user with the given id
    #[error("No user found with id {0}")]
    UserNotFound(Uuid),

    /// No log document for the given user id
    #[error("No exercise log found for user {0}")]
    LogNotFound(Uuid),

    /// A `from`/`to` query value or an exercise date failed to parse
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A `limit` query value failed to parse
    #[error("Invalid limit: {0:?}")]
    InvalidLimit(String),
}
