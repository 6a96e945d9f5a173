//! Export error types

use std::path::PathBuf;

/// Errors that can occur while serializing or writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Serialization to the target format failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the export file failed.
    #[error("Failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
