//! Crate error type.

use thiserror::Error;

/// Errors produced while loading models or writing artifacts.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("model error: {message}")]
    Model { message: String },
}

impl TimetableError {
    /// Creates a model error.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;
