//! Input acceptance and format dispatch.

use std::fmt;
use std::path::Path;

use tidy_model::Table;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::spreadsheet::read_spreadsheet_table;

/// Maximum accepted input size (16 MiB).
pub const MAX_INPUT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Accepted input container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Comma-separated text.
    Csv,
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
}

impl InputFormat {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    pub fn is_spreadsheet(self) -> bool {
        matches!(self, Self::Xlsx | Self::Xls)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub(crate) fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a custom limit. Empty files are rejected too.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads an input file into a [`Table`], dispatching on its extension.
///
/// The extension is checked first, then the size limit, then the content.
pub fn read_table(path: &Path) -> Result<Table> {
    read_table_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// [`read_table`] with a custom size limit.
pub fn read_table_with_limit(path: &Path, max_size: u64) -> Result<Table> {
    let format = InputFormat::from_path(path)?;
    check_file_size_with_limit(path, max_size)?;

    let table = match format {
        InputFormat::Csv => read_csv_table(path)?,
        InputFormat::Xlsx | InputFormat::Xls => read_spreadsheet_table(path)?,
    };

    tracing::info!(
        path = %path.display(),
        %format,
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded input"
    );
    Ok(table)
}
