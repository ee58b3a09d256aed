//! Error types for the Little Lemon client
//!
//! Covers the remote menu fetch, the local SQLite cache and filesystem access.

use thiserror::Error;

/// Errors that can occur while fetching, persisting or querying the menu
#[derive(Debug, Error)]
pub enum MenuError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Menu request returned status {0}")]
    Status(u16),

    /// The response body was not the expected menu document
    #[error("Failed to decode menu: {0}")]
    Decode(#[from] serde_json::Error),

    /// The local database rejected an operation
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Filesystem error (creating the data directory, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache was never opened, or failed to open
    #[error("Menu storage is unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, MenuError>;
