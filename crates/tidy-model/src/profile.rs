//! Read-only profile report types.

use serde::Serialize;

use crate::cell::{CellValue, ColumnType};
use crate::table::Shape;

/// Maximum number of sample values kept per column.
pub const SAMPLE_LIMIT: usize = 5;

/// Summary of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: ColumnType,
    pub missing_count: usize,
    /// Percentage of missing cells, rounded to two decimals.
    pub missing_percent: f64,
    pub unique_count: usize,
    /// First non-missing values in row order, at most [`SAMPLE_LIMIT`].
    pub sample_values: Vec<CellValue>,
}

/// Summary of a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProfile {
    pub shape: Shape,
    /// Rows equal to some earlier row.
    pub duplicate_rows: usize,
    /// Column profiles in table order.
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|profile| profile.name == name)
    }

    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|profile| profile.missing_count).sum()
    }
}

/// Descriptive statistics of one numeric column.
///
/// Every statistic is `None` when the column has no non-missing values;
/// `std` is also `None` for a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}
