//! Spreadsheet reading through calamine.
//!
//! Only the first worksheet is read and its first row is the header.

use std::collections::BTreeSet;
use std::path::Path;

use calamine::{Data, DataType as _, Reader, open_workbook_auto};
use tidy_model::{CellValue, Column, ColumnType, Table};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of an `xlsx`/`xls` workbook into a [`Table`].
///
/// Blank header cells are named `column_N` (1-based) and repeated names get
/// a `.1`, `.2`, ... suffix. Float columns holding only whole numbers are
/// read as integers.
pub fn read_spreadsheet_table(path: &Path) -> Result<Table> {
    let spreadsheet_err = |message: String| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_err(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| spreadsheet_err("workbook has no worksheets".to_string()))?
        .map_err(|e| spreadsheet_err(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    };
    let names = header_names(header);
    let body: Vec<&[Data]> = rows.collect();

    let columns = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells = body
                .iter()
                .map(|row| row.get(idx).map_or(CellValue::Missing, cell_value))
                .collect();
            narrow_whole_floats(Column::new(name, cells))
        })
        .collect();

    Table::with_row_count(columns, body.len()).map_err(|e| spreadsheet_err(e.to_string()))
}

fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let raw = cell.as_string().unwrap_or_else(|| cell.to_string());
            let base = match raw.trim() {
                "" => format!("column_{}", idx + 1),
                trimmed => trimmed.to_string(),
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::Int(v) => CellValue::Integer(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(v) => CellValue::Boolean(*v),
        Data::String(s) if s.trim().is_empty() => CellValue::Missing,
        Data::String(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map_or(CellValue::Missing, CellValue::Timestamp),
    }
}

/// Workbooks store every number as a float; keep integral columns integral.
fn narrow_whole_floats(column: Column) -> Column {
    if column.kind() != ColumnType::Float {
        return column;
    }
    let all_whole = column.present().all(|cell| match cell {
        CellValue::Float(v) => v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15,
        _ => true,
    });
    if !all_whole {
        return column;
    }
    let cells = column
        .cells()
        .iter()
        .map(|cell| match cell {
            CellValue::Float(v) if !v.is_nan() => CellValue::Integer(*v as i64),
            other => other.clone(),
        })
        .collect();
    Column::with_kind(column.name(), ColumnType::Integer, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_fill_blanks_and_dedupe() {
        let header = vec![
            Data::String("id".to_string()),
            Data::Empty,
            Data::String("id".to_string()),
            Data::String("id".to_string()),
        ];
        assert_eq!(header_names(&header), vec!["id", "column_2", "id.1", "id.2"]);
    }

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Missing);
        assert_eq!(cell_value(&Data::Int(3)), CellValue::Integer(3));
        assert_eq!(
            cell_value(&Data::String("x".to_string())),
            CellValue::Text("x".to_string())
        );
        assert_eq!(cell_value(&Data::String("  ".to_string())), CellValue::Missing);
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Boolean(true));
    }

    #[test]
    fn test_narrow_whole_floats() {
        let column = Column::new(
            "n",
            vec![CellValue::Float(1.0), CellValue::Missing, CellValue::Float(3.0)],
        );
        let narrowed = narrow_whole_floats(column);
        assert_eq!(narrowed.kind(), ColumnType::Integer);
        assert_eq!(narrowed.cells()[2], CellValue::Integer(3));

        let column = Column::new("f", vec![CellValue::Float(1.5)]);
        assert_eq!(narrow_whole_floats(column).kind(), ColumnType::Float);
    }
}
