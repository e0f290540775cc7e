//! Missing-value strategies.

use std::collections::BTreeMap;

use polars::prelude::Float64Chunked;

use tidy_model::{CellKey, CellValue, Column, ColumnType, LogEntry, MissingStrategy, Table};

use crate::profile::{mean, median, numeric_values};

/// Applies one missing-value strategy.
///
/// Every strategy other than [`MissingStrategy::None`] produces exactly one
/// log entry, even when nothing changed.
pub fn apply_missing_strategy(table: Table, strategy: MissingStrategy) -> (Table, Vec<LogEntry>) {
    let (table, affected) = match strategy {
        MissingStrategy::None => return (table, Vec::new()),
        MissingStrategy::DropRows => drop_rows(table),
        MissingStrategy::DropColumns => drop_columns(table),
        MissingStrategy::FillMean => fill_numeric(table, mean),
        MissingStrategy::FillMedian => fill_numeric(table, median),
        MissingStrategy::FillMode => fill_mode(table),
    };
    tracing::debug!(%strategy, affected, "applied missing-value strategy");
    (table, vec![LogEntry::MissingValues { strategy, affected }])
}

/// Removes every row holding a missing cell. Returns the removed row count.
fn drop_rows(table: Table) -> (Table, usize) {
    let keep: Vec<bool> = (0..table.row_count())
        .map(|idx| !table.row_has_missing(idx))
        .collect();
    let removed = keep.iter().filter(|keep| !**keep).count();
    (table.filter_rows(&keep), removed)
}

/// Removes every column holding a missing cell. Returns the removed column count.
fn drop_columns(table: Table) -> (Table, usize) {
    let before = table.column_count();
    let table = table.retain_columns(|column| !column.has_missing());
    let removed = before - table.column_count();
    (table, removed)
}

/// Fills numeric columns with a statistic of their own non-missing values.
///
/// Columns whose statistic is missing or not finite are left unchanged.
/// Returns the number of cells filled.
fn fill_numeric(table: Table, statistic: fn(&Float64Chunked) -> Option<f64>) -> (Table, usize) {
    let mut filled = 0;
    let table = table.map_columns(|column| {
        if !column.is_numeric() || !column.has_missing() {
            return column;
        }
        let Some(fill) = statistic(&numeric_values(&column)).filter(|v| v.is_finite()) else {
            return column;
        };
        filled += column.missing_count();
        fill_numeric_column(column, fill)
    });
    (table, filled)
}

fn fill_numeric_column(column: Column, fill: f64) -> Column {
    let keep_integer = column.kind() == ColumnType::Integer && is_integral(fill);
    let name = column.name().to_string();
    let cells: Vec<CellValue> = column
        .into_cells()
        .into_iter()
        .map(|cell| match cell {
            cell if cell.is_missing() => {
                if keep_integer {
                    CellValue::Integer(fill as i64)
                } else {
                    CellValue::Float(fill)
                }
            }
            CellValue::Integer(v) if !keep_integer => CellValue::Float(v as f64),
            other => other,
        })
        .collect();
    let kind = if keep_integer {
        ColumnType::Integer
    } else {
        ColumnType::Float
    };
    Column::with_kind(name, kind, cells)
}

fn is_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64
}

/// Fills every column with its most frequent non-missing value.
///
/// Returns the number of cells filled.
fn fill_mode(table: Table) -> (Table, usize) {
    let mut filled = 0;
    let table = table.map_columns(|column| {
        if !column.has_missing() {
            return column;
        }
        let Some(mode) = mode(&column) else {
            return column;
        };
        filled += column.missing_count();
        let cells = column
            .cells()
            .iter()
            .map(|cell| {
                if cell.is_missing() {
                    mode.clone()
                } else {
                    cell.clone()
                }
            })
            .collect();
        column.with_cells(cells)
    });
    (table, filled)
}

/// Most frequent non-missing value; ties go to the value seen first.
pub fn mode(column: &Column) -> Option<CellValue> {
    // key -> (first row, count)
    let mut counts: BTreeMap<CellKey, (usize, usize)> = BTreeMap::new();
    for (idx, cell) in column.cells().iter().enumerate() {
        if cell.is_missing() {
            continue;
        }
        counts.entry(cell.key()).or_insert((idx, 0)).1 += 1;
    }
    counts
        .into_values()
        .max_by(|(first_a, count_a), (first_b, count_b)| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .and_then(|(first, _)| column.get(first).cloned())
}
