use thiserror::Error;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors that can occur while auditing scene files
#[derive(Error, Debug)]
pub enum AuditError {
    /// Scanner failure on a root scene
    #[error(transparent)]
    Scan(#[from] scene_scan::ScanError),

    /// Directory walk failure
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
