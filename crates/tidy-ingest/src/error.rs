//! Error types for data ingestion.

use std::path::PathBuf;

use thiserror::Error;
use tidy_model::UnreadableInputError;

/// Errors that can occur while turning an input file into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// Extension is not one of the accepted input formats.
    #[error("unsupported file type '{extension}' for {path} (expected csv, xlsx or xls)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File starts with a byte-order mark of an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}, only UTF-8 is accepted")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File holds no data at all.
    #[error("file is empty: {path}")]
    EmptyInput { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for UnreadableInputError {
    fn from(err: IngestError) -> Self {
        UnreadableInputError::new(err.to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }

    #[test]
    fn test_into_unreadable_input() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("data.json"),
            extension: "json".to_string(),
        };
        let unreadable: UnreadableInputError = err.into();
        assert_eq!(
            unreadable.to_string(),
            "unreadable input: unsupported file type 'json' for data.json (expected csv, xlsx or xls)"
        );
    }
}
