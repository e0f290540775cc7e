//! Error taxonomy of the cleaning pipeline.
//!
//! Only [`UnreadableInputError`] and [`UnknownColumnError`] are hard failures
//! surfaced to callers (wrapped in [`CleaningError`]). A
//! [`ColumnConversionError`] is always recovered and recorded in the
//! processing log.

use serde::Serialize;
use thiserror::Error;

use crate::cell::ColumnType;
use crate::config::TargetType;

/// Violations of the table invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two columns share a name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// A column length differs from the table row count.
    #[error("column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Replacement target does not exist.
    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumnError),
}

/// One or more requested columns are absent from the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column(s): {}", .columns.join(", "))]
pub struct UnknownColumnError {
    /// The absent names, in request order.
    pub columns: Vec<String>,
}

impl UnknownColumnError {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

/// No table could be produced from the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unreadable input: {reason}")]
pub struct UnreadableInputError {
    pub reason: String,
}

impl UnreadableInputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A recovered per-column type coercion failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum ColumnConversionError {
    /// The source type cannot be interpreted as the target type.
    #[error("{from} values cannot be converted to {to}")]
    Unsupported {
        column: String,
        from: ColumnType,
        to: TargetType,
    },
}

impl ColumnConversionError {
    /// Name of the column the conversion was attempted on.
    pub fn column(&self) -> &str {
        match self {
            Self::Unsupported { column, .. } => column,
        }
    }

    /// Requested target type.
    pub fn target(&self) -> TargetType {
        match self {
            Self::Unsupported { to, .. } => *to,
        }
    }
}

/// Hard failures of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleaningError {
    #[error(transparent)]
    UnreadableInput(#[from] UnreadableInputError),

    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumnError),
}

/// Result type for pipeline runs.
pub type Result<T> = std::result::Result<T, CleaningError>;
