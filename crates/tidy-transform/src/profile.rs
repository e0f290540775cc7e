//! Column profiling and numeric summaries.
//!
//! Everything here is read-only over a [`Table`] snapshot and never fails.

use polars::prelude::{ChunkAgg, ChunkQuantile, ChunkVar, Float64Chunked, QuantileMethod};
use tidy_model::{CellValue, Column, ColumnProfile, NumericSummary, SAMPLE_LIMIT, Table, TableProfile};

use crate::dedupe::count_duplicates;

/// Computes the profile of a table.
///
/// A table without rows yields zero counts and 0% missing for every column.
pub fn profile(table: &Table) -> TableProfile {
    let rows = table.row_count();
    TableProfile {
        shape: table.shape(),
        duplicate_rows: count_duplicates(table),
        columns: table
            .columns()
            .iter()
            .map(|column| profile_column(column, rows))
            .collect(),
    }
}

fn profile_column(column: &Column, rows: usize) -> ColumnProfile {
    let missing_count = column.missing_count();
    ColumnProfile {
        name: column.name().to_string(),
        dtype: column.kind(),
        missing_count,
        missing_percent: missing_percent(missing_count, rows),
        unique_count: column.distinct_count(),
        sample_values: column.present().take(SAMPLE_LIMIT).cloned().collect(),
    }
}

/// `round(missing / rows * 100, 2)`, 0 for an empty table.
pub fn missing_percent(missing: usize, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    round2(missing as f64 / rows as f64 * 100.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Summary statistics of every numeric column, in table order.
pub fn describe(table: &Table) -> Vec<NumericSummary> {
    table
        .columns()
        .iter()
        .filter(|column| column.is_numeric())
        .map(|column| {
            let values = numeric_values(column);
            NumericSummary {
                column: column.name().to_string(),
                count: values.len(),
                mean: mean(&values),
                std: sample_std(&values),
                min: values.min(),
                q25: quantile(&values, 0.25),
                median: median(&values),
                q75: quantile(&values, 0.75),
                max: values.max(),
            }
        })
        .collect()
}

/// Non-missing values of a column as `f64`, in row order.
///
/// Non-numeric cells are skipped.
pub fn numeric_values(column: &Column) -> Float64Chunked {
    let values: Vec<f64> = column.present().filter_map(CellValue::as_f64).collect();
    Float64Chunked::from_vec(column.name().into(), values)
}

pub fn mean(values: &Float64Chunked) -> Option<f64> {
    values.mean()
}

/// Median, averaging the two middle values for an even count.
pub fn median(values: &Float64Chunked) -> Option<f64> {
    values.median()
}

/// Sample standard deviation (n - 1 denominator), `None` below two values.
pub fn sample_std(values: &Float64Chunked) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    values.std(1)
}

/// Quantile with linear interpolation between neighbours.
pub fn quantile(values: &Float64Chunked, q: f64) -> Option<f64> {
    values
        .quantile(q.clamp(0.0, 1.0), QuantileMethod::Linear)
        .ok()
        .flatten()
}
