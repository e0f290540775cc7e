//! Processing log of a pipeline run.

use std::fmt;

use serde::Serialize;

use crate::config::{MissingStrategy, TargetType};
use crate::error::ColumnConversionError;

/// One applied transformation, or a recovered failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    /// A missing-value strategy ran. `affected` counts removed rows, removed
    /// columns or filled cells depending on the strategy.
    MissingValues {
        strategy: MissingStrategy,
        affected: usize,
    },
    DuplicatesRemoved(usize),
    ColumnsRemoved(Vec<String>),
    Converted { column: String, target: TargetType },
    ConversionFailed(ColumnConversionError),
}

impl LogEntry {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ConversionFailed(_))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValues { strategy, affected } => match strategy {
                MissingStrategy::None => f.write_str("Left missing values unchanged"),
                MissingStrategy::DropRows => write!(
                    f,
                    "Dropped rows with missing values ({affected} rows removed)"
                ),
                MissingStrategy::DropColumns => write!(
                    f,
                    "Dropped columns with missing values ({affected} columns removed)"
                ),
                MissingStrategy::FillMean => write!(
                    f,
                    "Filled missing values with mean for numeric columns ({affected} cells filled)"
                ),
                MissingStrategy::FillMedian => write!(
                    f,
                    "Filled missing values with median for numeric columns ({affected} cells filled)"
                ),
                MissingStrategy::FillMode => write!(
                    f,
                    "Filled missing values with mode for all columns ({affected} cells filled)"
                ),
            },
            Self::DuplicatesRemoved(count) => write!(f, "Removed {count} duplicate rows"),
            Self::ColumnsRemoved(names) => write!(f, "Removed columns: {}", names.join(", ")),
            Self::Converted { column, target } => write!(f, "Converted {column} to {target}"),
            Self::ConversionFailed(err) => write!(
                f,
                "Failed to convert {} to {}: {err}",
                err.column(),
                err.target()
            ),
        }
    }
}

/// Ordered, append-only list of [`LogEntry`] values.
///
/// Serializes as the list of rendered lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct ProcessingLog {
    entries: Vec<LogEntry>,
}

impl ProcessingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Recovered conversion failures, in order.
    pub fn failures(&self) -> impl Iterator<Item = &ColumnConversionError> {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::ConversionFailed(err) => Some(err),
            _ => None,
        })
    }
}

impl From<ProcessingLog> for Vec<String> {
    fn from(log: ProcessingLog) -> Self {
        log.lines()
    }
}

impl fmt::Display for ProcessingLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProcessingLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
