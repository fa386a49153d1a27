use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release-relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag parsing error: {0}")]
    Parse(String),

    #[error("Release query failed: {0}")]
    Query(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-relay
pub type Result<T> = std::result::Result<T, RelayError>;

impl RelayError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        RelayError::Usage(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelayError::Config(msg.into())
    }

    /// Create a tag parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        RelayError::Parse(msg.into())
    }

    /// Create a release query error with context
    pub fn query(msg: impl Into<String>) -> Self {
        RelayError::Query(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        RelayError::Remote(msg.into())
    }

    /// Wrap an HTTP error, dropping its URL (Bot API URLs embed the token)
    pub fn http(err: reqwest::Error) -> Self {
        RelayError::Http(err.without_url())
    }
}
