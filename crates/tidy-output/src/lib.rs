//! Export of cleaned tables.
//!
//! The cleaned table is written as CSV through Polars; an optional JSON
//! report carries the configuration, shapes and processing log of the run.

pub mod csv;
pub mod error;
pub mod naming;
pub mod report;

pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use naming::{
    CLEANED_SUFFIX, cleaned_file_name, cleaned_output_path, ensure_parent_dir, report_file_name,
    report_output_path,
};
pub use report::{CleaningReport, write_report};
