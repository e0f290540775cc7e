//! Tests for the profiler and numeric summaries.

mod common;

use common::{float, int, missing, scenario_table, table, text};
use tidy_model::{Column, ColumnType, Shape, Table};
use tidy_transform::{describe, profile};

#[test]
fn profiles_scenario_table() {
    let report = profile(&scenario_table());

    assert_eq!(report.shape, Shape::new(4, 2));
    assert_eq!(report.duplicate_rows, 1);

    let id = report.column("id").expect("id profile");
    assert_eq!(id.dtype, ColumnType::Integer);
    assert_eq!(id.missing_count, 1);
    assert_eq!(id.missing_percent, 25.0);
    assert_eq!(id.unique_count, 2);
    assert_eq!(id.sample_values, vec![int(1), int(2), int(2)]);

    let name = report.column("name").expect("name profile");
    assert_eq!(name.unique_count, 3);
    assert_eq!(report.total_missing(), 1);
}

#[test]
fn samples_skip_missing_and_stop_at_five() {
    let report = profile(&table(vec![(
        "v",
        vec![
            missing(),
            int(1),
            int(2),
            missing(),
            int(3),
            int(4),
            int(5),
            int(6),
        ],
    )]));
    let v = report.column("v").expect("v profile");
    assert_eq!(v.sample_values, vec![int(1), int(2), int(3), int(4), int(5)]);
}

#[test]
fn empty_table_has_zero_statistics() {
    let empty = table(vec![("a", vec![]), ("b", vec![])]);
    let report = profile(&empty);
    assert_eq!(report.shape, Shape::new(0, 2));
    assert_eq!(report.duplicate_rows, 0);
    for column in &report.columns {
        assert_eq!(column.missing_count, 0);
        assert_eq!(column.missing_percent, 0.0);
        assert!(column.sample_values.is_empty());
    }

    let nothing = Table::default();
    assert_eq!(profile(&nothing).shape, Shape::new(0, 0));
}

#[test]
fn missing_cells_count_as_equal_for_duplicates() {
    let report = profile(&table(vec![
        ("a", vec![missing(), missing(), int(1)]),
        ("b", vec![text("x"), text("x"), text("x")]),
    ]));
    assert_eq!(report.duplicate_rows, 1);
}

#[test]
fn describe_covers_numeric_columns_only() {
    let summaries = describe(
        &Table::new(vec![
            Column::new("n", vec![int(1), int(2), int(3), int(4), missing()]),
            Column::new(
                "label",
                vec![text("a"), text("b"), text("c"), text("d"), text("e")],
            ),
            Column::with_kind("empty", ColumnType::Float, vec![float(f64::NAN); 5]),
        ])
        .expect("valid table"),
    );

    assert_eq!(summaries.len(), 2);
    let n = &summaries[0];
    assert_eq!(n.column, "n");
    assert_eq!(n.count, 4);
    assert_eq!(n.mean, Some(2.5));
    assert_eq!(n.min, Some(1.0));
    assert_eq!(n.q25, Some(1.75));
    assert_eq!(n.median, Some(2.5));
    assert_eq!(n.q75, Some(3.25));
    assert_eq!(n.max, Some(4.0));

    let empty = &summaries[1];
    assert_eq!(empty.count, 0);
    assert_eq!(empty.mean, None);
    assert_eq!(empty.std, None);
}
