//! Pipeline executor with a fixed step order.
//!
//! # Step Order
//!
//! 1. **MissingValues** - Apply the configured missing-value strategy
//! 2. **Duplicates** - Remove exact duplicate rows
//! 3. **ColumnRemoval** - Drop the requested columns (all or nothing)
//! 4. **TypeCoercion** - Convert columns to their requested types
//!
//! Each step consumes the table produced by the previous one. The caller's
//! table is never modified, so a failed run leaves nothing to roll back.
//!
//! # Example
//!
//! ```ignore
//! use tidy_model::{CleaningConfig, MissingStrategy};
//! use tidy_transform::run;
//!
//! let config = CleaningConfig::new()
//!     .with_missing_action(MissingStrategy::FillMode)
//!     .with_remove_duplicates(true);
//! let outcome = run(&table, &config)?;
//! for line in outcome.log.lines() {
//!     println!("{line}");
//! }
//! ```

use std::fmt;

use tidy_model::{
    CleaningConfig, CleaningError, LogEntry, MissingStrategy, ProcessingLog, Result, Shape, Table,
    UnreadableInputError,
};

use crate::coerce::apply_conversions;
use crate::columns::remove_columns;
use crate::dedupe::remove_duplicates;
use crate::missing::apply_missing_strategy;

/// One stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    MissingValues,
    Duplicates,
    ColumnRemoval,
    TypeCoercion,
}

impl Step {
    /// Every step, in execution order.
    pub const ORDER: [Step; 4] = [
        Step::MissingValues,
        Step::Duplicates,
        Step::ColumnRemoval,
        Step::TypeCoercion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::MissingValues => "missing_values",
            Step::Duplicates => "duplicates",
            Step::ColumnRemoval => "column_removal",
            Step::TypeCoercion => "type_coercion",
        }
    }

    /// Whether `config` asks for this step at all.
    pub fn is_requested(self, config: &CleaningConfig) -> bool {
        match self {
            Step::MissingValues => config.missing_action != MissingStrategy::None,
            Step::Duplicates => config.remove_duplicates,
            Step::ColumnRemoval => !config.columns_to_remove.is_empty(),
            Step::TypeCoercion => config.effective_conversions().next().is_some(),
        }
    }

    /// Runs this step on `table`.
    ///
    /// # Errors
    ///
    /// Only [`Step::ColumnRemoval`] can fail, with an unknown column.
    pub fn apply(self, table: Table, config: &CleaningConfig) -> Result<(Table, Vec<LogEntry>)> {
        match self {
            Step::MissingValues => Ok(apply_missing_strategy(table, config.missing_action)),
            Step::Duplicates if config.remove_duplicates => Ok(remove_duplicates(table)),
            Step::Duplicates => Ok((table, Vec::new())),
            Step::ColumnRemoval => Ok(remove_columns(table, &config.columns_to_remove)?),
            Step::TypeCoercion => Ok(apply_conversions(table, config)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub table: Table,
    pub log: ProcessingLog,
    pub original_shape: Shape,
    pub final_shape: Shape,
}

/// Runs every step in [`Step::ORDER`] on a copy of `table`.
///
/// # Errors
///
/// Returns [`CleaningError::UnknownColumn`] when a column to remove does not
/// exist. No partial result is returned.
pub fn run(table: &Table, config: &CleaningConfig) -> Result<PipelineRun> {
    let original_shape = table.shape();
    let span = tracing::info_span!(
        "pipeline",
        rows = original_shape.rows,
        columns = original_shape.columns
    );
    let _guard = span.enter();

    let mut log = ProcessingLog::new();
    let mut current = table.clone();
    for step in Step::ORDER {
        let (next, entries) = step.apply(current, config).inspect_err(|err| {
            tracing::warn!(%step, error = %err, "pipeline aborted");
        })?;
        tracing::debug!(%step, entries = entries.len(), shape = %next.shape(), "step finished");
        log.extend(entries);
        current = next;
    }

    let final_shape = current.shape();
    tracing::info!(
        original_shape = %original_shape,
        final_shape = %final_shape,
        entries = log.len(),
        failures = log.failures().count(),
        "pipeline finished"
    );
    Ok(PipelineRun {
        table: current,
        log,
        original_shape,
        final_shape,
    })
}

/// Runs the pipeline on the outcome of ingestion.
///
/// # Errors
///
/// An ingestion failure is surfaced as [`CleaningError::UnreadableInput`]
/// without running any step; otherwise as [`run`].
pub fn run_from<E>(input: std::result::Result<Table, E>, config: &CleaningConfig) -> Result<PipelineRun>
where
    E: Into<UnreadableInputError>,
{
    let table = input.map_err(|err| CleaningError::UnreadableInput(err.into()))?;
    run(&table, config)
}
