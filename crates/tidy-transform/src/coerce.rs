//! Per-column type coercion.
//!
//! Cells that cannot be interpreted as the target type become missing. A
//! whole-column failure only happens for source/target pairs that have no
//! meaningful interpretation, and the caller records it instead of aborting.

use tidy_model::{
    CellValue, CleaningConfig, Column, ColumnConversionError, ColumnType, LogEntry, Table,
    TargetType,
};

use crate::normalization::{
    ParsedNumber, from_epoch_seconds, parse_datetime, parse_number, to_epoch_seconds,
};

/// Converts one column to `target`.
///
/// # Errors
///
/// Returns [`ColumnConversionError::Unsupported`] when a boolean column is
/// asked to become a datetime.
pub fn convert_column(column: &Column, target: TargetType) -> Result<Column, ColumnConversionError> {
    match target {
        TargetType::Keep => Ok(column.clone()),
        TargetType::Numeric => Ok(to_numeric(column)),
        TargetType::Datetime => to_datetime(column),
        TargetType::Text => Ok(to_text(column)),
        TargetType::Categorical => Ok(to_categorical(column)),
    }
}

/// Applies every requested conversion, visiting columns in table order.
///
/// A failed column is left unchanged and logged; the others still convert.
/// Requests for columns that are not in the table are ignored.
pub fn apply_conversions(table: Table, config: &CleaningConfig) -> (Table, Vec<LogEntry>) {
    for (name, target) in config.effective_conversions() {
        if !table.contains_column(name) {
            tracing::debug!(column = name, %target, "conversion requested for absent column");
        }
    }

    let mut entries = Vec::new();
    let table = table.map_columns(|column| {
        let target = config.target_for(column.name());
        if target == TargetType::Keep {
            return column;
        }
        match convert_column(&column, target) {
            Ok(converted) => {
                tracing::debug!(column = column.name(), %target, "converted column");
                entries.push(LogEntry::Converted {
                    column: column.name().to_string(),
                    target,
                });
                converted
            }
            Err(err) => {
                tracing::warn!(column = column.name(), %target, error = %err, "conversion failed");
                entries.push(LogEntry::ConversionFailed(err));
                column
            }
        }
    });
    (table, entries)
}

fn to_numeric(column: &Column) -> Column {
    let parsed: Vec<Option<ParsedNumber>> = column.cells().iter().map(numeric_cell).collect();
    // a column with nothing parseable stays integer only if it already was
    let all_integer = if parsed.iter().any(Option::is_some) {
        parsed
            .iter()
            .flatten()
            .all(|n| matches!(n, ParsedNumber::Integer(_)))
    } else {
        column.kind() == ColumnType::Integer
    };

    let cells = parsed
        .into_iter()
        .map(|n| match n {
            None => CellValue::Missing,
            Some(ParsedNumber::Integer(v)) if all_integer => CellValue::Integer(v),
            Some(ParsedNumber::Integer(v)) => CellValue::Float(v as f64),
            Some(ParsedNumber::Float(v)) => CellValue::Float(v),
        })
        .collect();
    let kind = if all_integer {
        ColumnType::Integer
    } else {
        ColumnType::Float
    };
    Column::with_kind(column.name(), kind, cells)
}

fn numeric_cell(cell: &CellValue) -> Option<ParsedNumber> {
    match cell {
        CellValue::Missing => None,
        CellValue::Integer(v) => Some(ParsedNumber::Integer(*v)),
        CellValue::Float(v) if v.is_nan() => None,
        CellValue::Float(v) => Some(ParsedNumber::Float(*v)),
        CellValue::Boolean(v) => Some(ParsedNumber::Integer(i64::from(*v))),
        CellValue::Timestamp(ts) => Some(ParsedNumber::Integer(to_epoch_seconds(ts))),
        CellValue::Text(s) | CellValue::Label(s) => parse_number(s),
    }
}

fn to_datetime(column: &Column) -> Result<Column, ColumnConversionError> {
    if column.kind() == ColumnType::Boolean {
        return Err(ColumnConversionError::Unsupported {
            column: column.name().to_string(),
            from: column.kind(),
            to: TargetType::Datetime,
        });
    }
    let cells = column
        .cells()
        .iter()
        .map(|cell| {
            let ts = match cell {
                CellValue::Timestamp(ts) => Some(*ts),
                CellValue::Integer(v) => from_epoch_seconds(*v as f64),
                CellValue::Float(v) => from_epoch_seconds(*v),
                CellValue::Text(s) | CellValue::Label(s) => parse_datetime(s),
                CellValue::Missing | CellValue::Boolean(_) => None,
            };
            ts.map_or(CellValue::Missing, CellValue::Timestamp)
        })
        .collect();
    Ok(Column::with_kind(column.name(), ColumnType::Timestamp, cells))
}

fn to_text(column: &Column) -> Column {
    let cells = column
        .cells()
        .iter()
        .map(|cell| {
            if cell.is_missing() {
                CellValue::Missing
            } else {
                CellValue::Text(cell.to_string())
            }
        })
        .collect();
    Column::with_kind(column.name(), ColumnType::Text, cells)
}

fn to_categorical(column: &Column) -> Column {
    let cells = column
        .cells()
        .iter()
        .map(|cell| {
            if cell.is_missing() {
                CellValue::Missing
            } else {
                CellValue::Label(cell.to_string())
            }
        })
        .collect();
    Column::with_kind(column.name(), ColumnType::Categorical, cells)
}
