//! CSV export of cleaned tables.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use polars::prelude::{CsvWriter, PolarsError, SerWriter};
use tidy_common::table_to_dataframe;
use tidy_model::{TIMESTAMP_DISPLAY_FORMAT, Table};

use crate::error::{OutputError, Result};
use crate::naming::ensure_parent_dir;

/// Writes `table` to `path` as comma-separated text with a header row.
///
/// Missing cells are written as empty fields. Timestamps use the same
/// `YYYY-MM-DD HH:MM:SS` rendering as the log and profile output.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let csv_error = |err: PolarsError| OutputError::Csv {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let mut df = table_to_dataframe(table).map_err(csv_error)?;
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_datetime_format(Some(TIMESTAMP_DISPLAY_FORMAT.to_string()))
        .finish(&mut df)
        .map_err(csv_error)?;

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "wrote cleaned table"
    );
    Ok(())
}
