//! Table builders shared by the integration tests.

#![allow(dead_code)]

use tidy_model::{CellValue, Column, Table};

pub fn int(v: i64) -> CellValue {
    CellValue::Integer(v)
}

pub fn float(v: f64) -> CellValue {
    CellValue::Float(v)
}

pub fn text(v: &str) -> CellValue {
    CellValue::Text(v.to_string())
}

pub fn missing() -> CellValue {
    CellValue::Missing
}

pub fn table(columns: Vec<(&str, Vec<CellValue>)>) -> Table {
    Table::new(
        columns
            .into_iter()
            .map(|(name, cells)| Column::new(name, cells))
            .collect(),
    )
    .expect("valid test table")
}

/// `id: 1, 2, 2, None` / `name: a, b, b, c`
pub fn scenario_table() -> Table {
    table(vec![
        ("id", vec![int(1), int(2), int(2), missing()]),
        ("name", vec![text("a"), text("b"), text("b"), text("c")]),
    ])
}

pub fn cells<'a>(table: &'a Table, name: &str) -> &'a [CellValue] {
    table.column(name).expect("column exists").cells()
}
