//! Tests for the table invariants.

use tidy_model::{CellValue, Column, ColumnType, Shape, Table, TableError, UnknownColumnError};

fn int(v: i64) -> CellValue {
    CellValue::Integer(v)
}

fn text(v: &str) -> CellValue {
    CellValue::Text(v.to_string())
}

fn sample_table() -> Table {
    Table::new(vec![
        Column::new("id", vec![int(1), int(2), int(3)]),
        Column::new("name", vec![text("a"), CellValue::Missing, text("c")]),
        Column::new("score", vec![int(1), CellValue::Float(2.5), CellValue::Missing]),
    ])
    .expect("valid table")
}

#[test]
fn shape_reports_rows_and_columns() {
    let table = sample_table();
    assert_eq!(table.shape(), Shape::new(3, 3));
    assert_eq!(table.shape().to_string(), "(3, 3)");
}

#[test]
fn rejects_duplicate_names() {
    let err = Table::new(vec![
        Column::new("a", vec![int(1)]),
        Column::new("a", vec![int(2)]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateColumn {
            name: "a".to_string()
        }
    );
}

#[test]
fn rejects_ragged_columns() {
    let err = Table::new(vec![
        Column::new("a", vec![int(1), int(2)]),
        Column::new("b", vec![int(1)]),
    ])
    .unwrap_err();
    assert!(matches!(err, TableError::LengthMismatch { found: 1, expected: 2, .. }));
}

#[test]
fn mixed_numeric_column_is_promoted_to_float() {
    let table = sample_table();
    let score = table.column("score").expect("score column");
    assert_eq!(score.kind(), ColumnType::Float);
    assert_eq!(score.cells()[0], CellValue::Float(1.0));
    assert_eq!(score.missing_count(), 1);
}

#[test]
fn filter_rows_keeps_order() {
    let table = sample_table().filter_rows(&[true, false, true]);
    assert_eq!(table.shape(), Shape::new(2, 3));
    let ids: Vec<_> = table.column("id").expect("id").cells().to_vec();
    assert_eq!(ids, vec![int(1), int(3)]);
}

#[test]
fn dropping_every_column_keeps_row_count() {
    let table = sample_table().retain_columns(|_| false);
    assert_eq!(table.shape(), Shape::new(3, 0));
}

#[test]
fn drop_columns_is_all_or_nothing() {
    let table = sample_table();
    let err = table
        .clone()
        .drop_columns(&["id".to_string(), "ZZZ".to_string()])
        .unwrap_err();
    assert_eq!(err, UnknownColumnError::new(vec!["ZZZ".to_string()]));

    let dropped = table
        .drop_columns(&["name".to_string(), "id".to_string()])
        .expect("known columns");
    assert_eq!(dropped.column_names(), vec!["score"]);
}

#[test]
fn row_key_treats_missing_as_equal() {
    let table = Table::new(vec![
        Column::new("a", vec![CellValue::Missing, CellValue::Float(f64::NAN)]),
        Column::new("b", vec![text("x"), text("x")]),
    ])
    .expect("valid table");
    assert_eq!(table.row_key(0), table.row_key(1));
    assert!(table.row_has_missing(0));
}

#[test]
fn head_truncates_rows() {
    let table = sample_table();
    assert_eq!(table.head(2).shape(), Shape::new(2, 3));
    assert_eq!(table.head(10).shape(), Shape::new(3, 3));
}

#[test]
fn categories_follow_first_appearance() {
    let column = Column::new(
        "c",
        vec![text("b"), text("a"), CellValue::Missing, text("b"), text("c")],
    );
    assert_eq!(column.categories(), vec!["b", "a", "c"]);
    assert_eq!(column.distinct_count(), 3);
}
