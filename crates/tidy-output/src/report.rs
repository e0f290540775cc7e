//! JSON processing report written next to the cleaned table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tidy_model::{
    CleaningConfig, ColumnConversionError, NumericSummary, ProcessingLog, Shape,
};
use tidy_transform::PipelineRun;

use crate::error::{OutputError, Result};
use crate::naming::ensure_parent_dir;

/// Everything a user needs to audit one cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub source: String,
    pub output: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub config: CleaningConfig,
    pub original_shape: Shape,
    pub final_shape: Shape,
    pub log: ProcessingLog,
    pub failures: Vec<ColumnConversionError>,
    /// Numeric summary of the cleaned table.
    pub summary: Vec<NumericSummary>,
}

impl CleaningReport {
    pub fn new(source: &Path, config: &CleaningConfig, outcome: &PipelineRun) -> Self {
        Self {
            source: source.display().to_string(),
            output: None,
            generated_at: Utc::now(),
            config: config.clone(),
            original_shape: outcome.original_shape,
            final_shape: outcome.final_shape,
            log: outcome.log.clone(),
            failures: outcome.log.failures().cloned().collect(),
            summary: tidy_transform::describe(&outcome.table),
        }
    }

    pub fn with_output(mut self, output: &Path) -> Self {
        self.output = Some(output.display().to_string());
        self
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn rows_removed(&self) -> usize {
        self.original_shape.rows.saturating_sub(self.final_shape.rows)
    }

    pub fn columns_removed(&self) -> usize {
        self.original_shape
            .columns
            .saturating_sub(self.final_shape.columns)
    }
}

/// Writes `report` to `path` as pretty-printed JSON.
pub fn write_report(report: &CleaningReport, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let write_error = |source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| OutputError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), entries = report.log.len(), "wrote report");
    Ok(())
}
