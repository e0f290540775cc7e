//! Error types for export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing cleaned output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write a file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to build or serialize the frame.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Failed to serialize the processing report.
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input path has no file name to derive an output name from.
    #[error("cannot derive an output name from {path}")]
    InvalidInputName { path: PathBuf },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
