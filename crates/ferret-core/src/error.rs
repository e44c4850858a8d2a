//! Error types for ferret core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ferret operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a scan or probe.
///
/// Anticipated failures inside a run (unreadable subtrees, build timeouts,
/// malformed manifests) are reported as data, not through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested project root or input file does not exist.
    #[error("Path not found: {}", path.display())]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but cannot be used as requested.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
