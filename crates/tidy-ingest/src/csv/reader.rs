//! CSV file reading through Polars.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, PlSmallStr, SerReader};
use tidy_common::table_from_dataframe;
use tidy_model::Table;

use crate::error::{IngestError, Result};
use crate::source::open_error;

/// Cell contents read as missing in addition to empty fields.
pub const NULL_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is handled by the Polars reader
    Ok(())
}

/// Reads a comma-separated file with a single header row into a DataFrame.
///
/// Column dtypes are inferred from every row, so a late non-numeric value
/// turns its column into text instead of failing the read.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let null_values: Vec<PlSmallStr> = NULL_MARKERS.iter().map(|marker| (*marker).into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumns(null_values.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Reads a CSV file into a [`Table`].
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let df = read_csv_frame(path)?;
    Ok(table_from_dataframe(&df)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use tidy_model::{CellValue, ColumnType};

    use super::*;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'a', 0]);
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_table_types() {
        let file = create_temp_csv(b"id,name,score\n1,a,1.5\n2,,NA\n3,c,2\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.column_names(), vec!["id", "name", "score"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("id").unwrap().kind(), ColumnType::Integer);
        assert_eq!(table.column("score").unwrap().kind(), ColumnType::Float);
        assert_eq!(table.column("score").unwrap().cells()[1], CellValue::Missing);
        assert_eq!(table.column("name").unwrap().cells()[1], CellValue::Missing);
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.column_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_late_text_value_makes_a_text_column() {
        let mut content = String::from("id,val\n");
        for idx in 0..150 {
            content.push_str(&format!("{idx},{idx}\n"));
        }
        content.push_str("150,abc\n");
        let file = create_temp_csv(content.as_bytes());

        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.row_count(), 151);
        assert_eq!(table.column("id").unwrap().kind(), ColumnType::Integer);
        let val = table.column("val").unwrap();
        assert_eq!(val.kind(), ColumnType::Text);
        assert_eq!(val.cells()[150], CellValue::Text("abc".to_string()));
        assert_eq!(val.cells()[0], CellValue::Text("0".to_string()));
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv(b"A,B\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.shape().to_string(), "(0, 2)");
    }
}
