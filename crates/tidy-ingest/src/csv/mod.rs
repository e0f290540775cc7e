//! CSV reading utilities.

mod reader;

pub use reader::{NULL_MARKERS, read_csv_frame, read_csv_table, validate_encoding};
