//! Data ingestion for the cleaning pipeline.
//!
//! Turns an uploaded file into a [`tidy_model::Table`]. The pipeline itself
//! never reads files; it only receives the table produced here, or an
//! [`tidy_model::UnreadableInputError`] built from an [`IngestError`].
//!
//! # Features
//!
//! - **CSV Loading**: comma-separated files read through Polars
//! - **Spreadsheet Loading**: first worksheet of `xlsx`/`xls` workbooks read through calamine
//! - **Input Checks**: extension, size limit and encoding validation
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tidy_ingest::read_table;
//!
//! let table = read_table(Path::new("uploads/sales.csv"))?;
//! println!("{}", table.shape());
//! ```

mod csv;
mod error;
mod source;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv::{NULL_MARKERS, read_csv_frame, read_csv_table, validate_encoding};
pub use spreadsheet::read_spreadsheet_table;

// === Format Dispatch ===
pub use source::{
    InputFormat, MAX_INPUT_FILE_SIZE, check_file_size_with_limit, read_table,
    read_table_with_limit,
};
