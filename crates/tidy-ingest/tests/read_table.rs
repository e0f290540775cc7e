//! Tests for input acceptance and format dispatch.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use tempfile::TempDir;
use tidy_ingest::{IngestError, read_table, read_table_with_limit};
use tidy_model::{CellValue, ColumnType, UnreadableInputError};

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input");
    path
}

#[test]
fn reads_csv_by_extension() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "people.CSV",
        b"id,name,joined\n1,ann,2024-01-05\n2,bob,\n2,bob,\n",
    );

    let table = read_table(&path).expect("read csv");
    assert_eq!(table.shape().to_string(), "(3, 3)");
    assert_eq!(table.column("id").expect("id").kind(), ColumnType::Integer);
    assert_eq!(
        table.column("name").expect("name").cells()[0],
        CellValue::Text("ann".to_string())
    );
    assert_eq!(table.column("joined").expect("joined").missing_count(), 2);
}

#[test]
fn rejects_unsupported_extension() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "data.json", b"{}");
    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn rejects_files_over_limit() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "big.csv", b"a,b\n1,2\n3,4\n");
    let err = read_table_with_limit(&path, 4).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
}

#[test]
fn rejects_empty_and_missing_files() {
    let dir = TempDir::new().expect("tempdir");
    let empty = write_file(&dir, "empty.csv", b"");
    assert!(matches!(
        read_table(&empty).unwrap_err(),
        IngestError::EmptyInput { .. }
    ));

    let missing = dir.path().join("absent.csv");
    assert!(matches!(
        read_table(&missing).unwrap_err(),
        IngestError::FileNotFound { .. }
    ));
}

#[test]
fn corrupt_workbook_is_unreadable() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "broken.xlsx", b"this is not a zip archive");
    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::Spreadsheet { .. }));

    let unreadable: UnreadableInputError = err.into();
    assert!(unreadable.reason.contains("broken.xlsx"));
}

#[test]
fn reads_first_worksheet_of_a_workbook() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/people.xlsx");

    let table = read_table(&path).expect("read workbook");

    assert_eq!(table.column_names(), vec!["id", "column_2", "id.1", "joined"]);
    assert_eq!(table.row_count(), 2);

    let id = table.column("id").expect("id");
    assert_eq!(id.kind(), ColumnType::Integer);
    assert_eq!(id.cells(), &[CellValue::Integer(1), CellValue::Integer(2)]);

    assert_eq!(
        table.column("column_2").expect("column_2").cells(),
        &[
            CellValue::Text("ann".to_string()),
            CellValue::Text("bob".to_string())
        ]
    );

    let fractional = table.column("id.1").expect("id.1");
    assert_eq!(fractional.kind(), ColumnType::Float);
    assert_eq!(
        fractional.cells(),
        &[CellValue::Float(2.5), CellValue::Float(3.0)]
    );

    let joined = table.column("joined").expect("joined");
    assert_eq!(joined.kind(), ColumnType::Timestamp);
    let new_year = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    assert_eq!(joined.cells()[0], CellValue::Timestamp(new_year));
}
