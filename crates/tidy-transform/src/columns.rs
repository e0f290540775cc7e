//! Column removal.

use tidy_model::{LogEntry, Table, UnknownColumnError};

/// Removes the named columns, all or nothing.
///
/// An empty list is a no-op without a log entry. Repeated names are removed
/// once and listed once.
///
/// # Errors
///
/// Returns [`UnknownColumnError`] naming every absent column; no column is
/// removed in that case.
pub fn remove_columns(
    table: Table,
    names: &[String],
) -> Result<(Table, Vec<LogEntry>), UnknownColumnError> {
    if names.is_empty() {
        return Ok((table, Vec::new()));
    }

    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(name) {
            unique.push(name.clone());
        }
    }

    let table = table.drop_columns(&unique)?;
    tracing::debug!(columns = ?unique, "removed columns");
    Ok((table, vec![LogEntry::ColumnsRemoved(unique)]))
}
