use std::path::PathBuf;

use tidy_model::{CleaningConfig, Table};
use tidy_transform::{PipelineRun, Step};

/// Outcome of `tidy clean`.
pub struct CleanResult {
    pub input: PathBuf,
    pub config: CleaningConfig,
    pub steps: Vec<Step>,
    pub outcome: PipelineRun,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

impl CleanResult {
    pub fn table(&self) -> &Table {
        &self.outcome.table
    }

    pub fn has_failures(&self) -> bool {
        self.outcome.log.failures().next().is_some()
    }
}
