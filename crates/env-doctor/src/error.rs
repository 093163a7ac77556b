//! Error types for the env-doctor library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for env-doctor operations.
///
/// Structural failures only: validation findings are [`Issue`](crate::Issue)
/// values, never errors.
#[derive(Debug, Error)]
pub enum EnvDoctorError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file the operation requires does not exist.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Neither a schema nor an example file exists to validate against.
    #[error("No schema or example file found in '{0}'")]
    NoReference(PathBuf),

    /// Refusing to overwrite an existing file.
    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for env-doctor operations.
pub type Result<T> = std::result::Result<T, EnvDoctorError>;
