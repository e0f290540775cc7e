//! Output file naming.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Suffix appended to the input stem.
pub const CLEANED_SUFFIX: &str = "_cleaned";

/// `<stem>_cleaned.<ext>` for CSV inputs, `<stem>_cleaned.csv` otherwise.
///
/// Only CSV is written, so spreadsheet inputs change extension.
pub fn cleaned_file_name(input: &Path) -> Result<String> {
    let stem = file_stem(input)?;
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or("csv");
    Ok(format!("{stem}{CLEANED_SUFFIX}.{extension}"))
}

/// `<stem>_cleaned.report.json`.
pub fn report_file_name(input: &Path) -> Result<String> {
    let stem = file_stem(input)?;
    Ok(format!("{stem}{CLEANED_SUFFIX}.report.json"))
}

/// Where the cleaned table goes: `output_dir` if given, else next to the input.
pub fn cleaned_output_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    Ok(dir.join(cleaned_file_name(input)?))
}

/// Where the processing report goes, alongside the cleaned table.
pub fn report_output_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    Ok(dir.join(report_file_name(input)?))
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn file_stem(input: &Path) -> Result<&str> {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| OutputError::InvalidInputName {
            path: input.to_path_buf(),
        })
}
