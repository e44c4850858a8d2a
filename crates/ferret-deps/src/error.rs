//! Error types for ferret-deps

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ferret-deps Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a manifest
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest is valid JSON but not the expected shape
    #[error("Invalid file format for {0}: {1}")]
    InvalidFormat(PathBuf, String),
}
