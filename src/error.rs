//! Error types for graph-store-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A string failed to parse as an Index
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// A graph update document matched no known variant
    #[error("Decode error: {0}")]
    Decode(String),

    /// JSON parsing error (serde_json)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid index error
    pub fn invalid_index(msg: impl Into<String>) -> Self {
        Error::InvalidIndex(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
