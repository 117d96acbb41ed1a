//! Error types for the marquee ecosystem.

use thiserror::Error;

/// Errors that can occur in marquee operations.
#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No event with id {0}")]
    EventNotFound(i64),

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for marquee operations.
pub type MarqueeResult<T> = Result<T, MarqueeError>;
