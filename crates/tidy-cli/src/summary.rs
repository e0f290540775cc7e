use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidy_model::{
    CellValue, ColumnProfile, LogEntry, NumericSummary, Table as DataTable, TableProfile,
    format_numeric,
};

use crate::types::CleanResult;

pub fn print_profile(file: &Path, profile: &TableProfile, preview: &DataTable) {
    println!("File: {}", file.display());
    println!("Shape: {}", profile.shape);
    println!("Duplicate rows: {}", profile.duplicate_rows);
    println!("Missing cells: {}", profile.total_missing());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Unique"),
        header_cell("Sample values"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for column in &profile.columns {
        table.add_row(column_row(column));
    }
    println!("{table}");

    if preview.row_count() > 0 {
        println!();
        println!("Preview (first {} rows):", preview.row_count());
        println!("{}", preview_table(preview));
    }
}

pub fn print_clean_summary(result: &CleanResult) {
    let outcome = &result.outcome;
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let steps: Vec<&str> = result.steps.iter().map(|step| step.name()).collect();
    if steps.is_empty() {
        println!("Steps: none requested");
    } else {
        println!("Steps: {}", steps.join(" -> "));
    }
    println!(
        "Shape: {} -> {}",
        outcome.original_shape, outcome.final_shape
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Processing log")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    if outcome.log.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("No changes applied")]);
    }
    for (idx, entry) in outcome.log.entries().iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), log_cell(entry)]);
    }
    println!("{table}");

    let summaries = tidy_transform::describe(result.table());
    if !summaries.is_empty() {
        println!();
        println!("Numeric summary:");
        println!("{}", describe_table(&summaries));
    }
    let preview = result.table().head(5);
    if preview.row_count() > 0 {
        println!();
        println!("Preview:");
        println!("{}", preview_table(&preview));
    }
}

fn column_row(column: &ColumnProfile) -> Vec<Cell> {
    let samples: Vec<String> = column
        .sample_values
        .iter()
        .map(ToString::to_string)
        .collect();
    vec![
        Cell::new(&column.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(column.dtype.as_str()),
        count_cell(column.missing_count, Color::Yellow),
        Cell::new(format!("{:.2}", column.missing_percent)),
        Cell::new(column.unique_count),
        if samples.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(samples.join(", "))
        },
    ]
}

fn log_cell(entry: &LogEntry) -> Cell {
    if entry.is_failure() {
        Cell::new(entry).fg(Color::Red)
    } else {
        Cell::new(entry)
    }
}

fn describe_table(summaries: &[NumericSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"]
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 1..9 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.count),
            stat_cell(summary.mean),
            stat_cell(summary.std),
            stat_cell(summary.min),
            stat_cell(summary.q25),
            stat_cell(summary.median),
            stat_cell(summary.q75),
            stat_cell(summary.max),
        ]);
    }
    table
}

fn preview_table(preview: &DataTable) -> Table {
    let mut table = Table::new();
    table.set_header(
        preview
            .column_names()
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..preview.row_count() {
        let Some(row) = preview.row(idx) else {
            continue;
        };
        table.add_row(row.into_iter().map(value_cell).collect::<Vec<_>>());
    }
    table
}

fn value_cell(value: &CellValue) -> Cell {
    if value.is_missing() {
        dim_cell("NaN")
    } else {
        Cell::new(value)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric(round_to(v, 4))),
        None => dim_cell("-"),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
