//! Profiling, cleaning transforms and the pipeline executor.
//!
//! # Overview
//!
//! This crate provides:
//! - **Profiling**: per-column type, missing counts, cardinality and samples, plus numeric summaries
//! - **Transforms**: missing-value strategies, duplicate removal, column removal and type coercion
//! - **Pipeline**: the fixed-order composition of the transforms driven by a [`tidy_model::CleaningConfig`]
//! - **Normalization functions**: numeric and timestamp parsing of text cells
//!
//! # Design Principles
//!
//! - **Owned tables in, owned tables out**: every transform consumes a table and returns a new one
//! - **Errors only for unknown columns**: everything else degrades to a log entry

mod coerce;
mod columns;
mod dedupe;
mod missing;
mod pipeline;
mod profile;

pub mod normalization;

// Profiling
pub use profile::{
    describe, mean, median, missing_percent, numeric_values, profile, quantile, sample_std,
};

// Transforms
pub use coerce::{apply_conversions, convert_column};
pub use columns::remove_columns;
pub use dedupe::{count_duplicates, duplicate_mask, remove_duplicates};
pub use missing::{apply_missing_strategy, mode};

// Execution
pub use pipeline::{PipelineRun, Step, run, run_from};
