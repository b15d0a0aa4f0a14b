use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while scanning scene text
#[derive(Error, Debug)]
pub enum ScanError {
    /// Root scene file is missing from storage. Only the root is fatal;
    /// a missing nested reference is yielded and skipped, never an error.
    #[error("scene not found: {path}")]
    SceneNotFound { path: PathBuf },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
