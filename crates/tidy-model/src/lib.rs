//! Core data model for the tabular cleaning workspace.
//!
//! Holds the [`Table`] every operation acts on, the [`CleaningConfig`] that
//! drives a pipeline run, the [`ProcessingLog`] it produces, the profile
//! report types and the error taxonomy.

pub mod cell;
pub mod config;
pub mod error;
pub mod log;
pub mod profile;
pub mod table;

pub use cell::{CellKey, CellValue, ColumnType, TIMESTAMP_DISPLAY_FORMAT, format_numeric};
pub use config::{CleaningConfig, MissingStrategy, TargetType};
pub use error::{
    CleaningError, ColumnConversionError, Result, TableError, UnknownColumnError,
    UnreadableInputError,
};
pub use log::{LogEntry, ProcessingLog};
pub use profile::{ColumnProfile, NumericSummary, SAMPLE_LIMIT, TableProfile};
pub use table::{Column, Shape, Table};
