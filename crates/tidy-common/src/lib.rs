//! Shared utilities for the cleaning workspace crates.

pub mod polars;

pub use crate::polars::{table_from_dataframe, table_to_dataframe, timestamp_from_millis};
