//! Error types for the kindwall core
//!
//! All errors use thiserror for structured error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Note content is empty")]
    EmptyContent,

    #[error("Note content is too long: {0} characters")]
    ContentTooLong(usize),

    #[error("Note content failed moderation")]
    ContentRejected,
}

pub type Result<T> = std::result::Result<T, AppError>;
