//! Tests for CSV and report export.

use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;
use tidy_model::{CellValue, CleaningConfig, Column, MissingStrategy, Table, TargetType};
use tidy_output::{CleaningReport, cleaned_output_path, report_output_path, write_csv, write_report};

fn sample_table() -> Table {
    Table::new(vec![
        Column::new(
            "id",
            vec![
                CellValue::Integer(1),
                CellValue::Integer(2),
                CellValue::Integer(2),
                CellValue::Missing,
            ],
        ),
        Column::new(
            "name",
            vec![
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
                CellValue::Text("b".to_string()),
                CellValue::Text("c".to_string()),
            ],
        ),
    ])
    .expect("valid table")
}

#[test]
fn writes_header_and_empty_fields_for_missing_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out.csv");

    write_csv(&sample_table(), &path).expect("write csv");

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["id,name", "1,a", "2,b", "2,b", ",c"]);
}

#[test]
fn writes_timestamps_in_display_format() {
    let stamp = NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(13, 30, 0)
        .unwrap();
    let table = Table::new(vec![
        Column::new("when", vec![CellValue::Timestamp(stamp), CellValue::Missing]),
        Column::new("n", vec![CellValue::Integer(1), CellValue::Integer(2)]),
    ])
    .unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("when.csv");

    write_csv(&table, &path).expect("write csv");

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().collect::<Vec<_>>(), vec!["when,n", "2024-01-05 13:30:00,1", ",2"]);
}

#[test]
fn report_records_the_run() {
    let input = std::path::Path::new("data/people.xlsx");
    let config = CleaningConfig::new()
        .with_missing_action(MissingStrategy::FillMode)
        .with_remove_duplicates(true)
        .convert_column("name", TargetType::Numeric);
    let outcome = tidy_transform::run(&sample_table(), &config).expect("pipeline");

    let dir = TempDir::new().unwrap();
    let output = cleaned_output_path(input, Some(dir.path())).unwrap();
    let report_path = report_output_path(input, Some(dir.path())).unwrap();
    let report = CleaningReport::new(input, &config, &outcome)
        .with_output(&output)
        .with_generated_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

    assert_eq!(report.rows_removed(), 1);
    assert_eq!(report.columns_removed(), 0);

    write_report(&report, &report_path).expect("write report");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(json["source"], "data/people.xlsx");
    assert_eq!(json["generated_at"], "2024-01-01T00:00:00Z");
    assert_eq!(json["config"]["missing_action"], "fill_mode");
    assert_eq!(json["config"]["remove_duplicates"], true);
    assert_eq!(json["original_shape"]["rows"], 4);
    assert_eq!(json["final_shape"]["rows"], 3);
    assert_eq!(
        json["log"][0],
        "Filled missing values with mode for all columns (1 cells filled)"
    );
    assert_eq!(json["log"][1], "Removed 1 duplicate rows");
    assert_eq!(json["log"][2], "Converted name to numeric");
    assert!(json["failures"].as_array().unwrap().is_empty());
    assert!(output.ends_with("people_cleaned.csv"));
}
