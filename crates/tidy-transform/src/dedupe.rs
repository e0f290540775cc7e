//! Exact duplicate row detection and removal.

use std::collections::BTreeSet;

use tidy_model::{LogEntry, Table};

/// Marks every row that equals, across all columns, some earlier row.
///
/// Missing cells compare equal to each other.
pub fn duplicate_mask(table: &Table) -> Vec<bool> {
    let mut seen = BTreeSet::new();
    (0..table.row_count())
        .map(|idx| !seen.insert(table.row_key(idx)))
        .collect()
}

/// Number of rows that duplicate an earlier row.
pub fn count_duplicates(table: &Table) -> usize {
    duplicate_mask(table).into_iter().filter(|dup| *dup).count()
}

/// Removes duplicate rows, keeping the first occurrence of each.
///
/// Logs the number removed, or nothing when there were none.
pub fn remove_duplicates(table: Table) -> (Table, Vec<LogEntry>) {
    let keep: Vec<bool> = duplicate_mask(&table).into_iter().map(|dup| !dup).collect();
    let removed = keep.iter().filter(|keep| !**keep).count();
    if removed == 0 {
        tracing::debug!("no duplicate rows found");
        return (table, Vec::new());
    }
    tracing::debug!(removed, "removed duplicate rows");
    (
        table.filter_rows(&keep),
        vec![LogEntry::DuplicatesRemoved(removed)],
    )
}
