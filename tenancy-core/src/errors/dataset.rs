//! Dataset loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the initial infra snapshot
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset file {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The dataset document is not a valid infra tree
    #[error("Invalid dataset '{source_name}': {source}")]
    Parse {
        /// File path or bundled dataset name
        source_name: String,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// No bundled dataset carries the requested name
    #[error("Unknown bundled dataset '{0}'")]
    UnknownBundled(String),
}

impl DatasetError {
    /// Get error code for API responses and startup diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            DatasetError::Io { .. } => "IO_ERROR",
            DatasetError::Parse { .. } => "VALIDATION_FAILED",
            DatasetError::UnknownBundled(_) => "NOT_FOUND",
        }
    }
}
