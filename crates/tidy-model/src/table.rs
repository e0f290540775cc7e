//! In-memory columnar table.
//!
//! A [`Table`] is an ordered sequence of uniquely named [`Column`]s of equal
//! length. Every operation that derives a new table goes through the methods
//! here, which keep the row-count and unique-name invariants.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::{CellKey, CellValue, ColumnType};
use crate::error::{TableError, UnknownColumnError};

/// `(row_count, column_count)` of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

/// A named sequence of cells with a declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnType,
    cells: Vec<CellValue>,
}

impl Column {
    /// Create a column, inferring its type from the cells.
    ///
    /// When integers and floats are mixed the integer cells are promoted so
    /// the column holds a single numeric variant.
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let kind = ColumnType::infer(&cells);
        let cells = if kind == ColumnType::Float {
            cells
                .into_iter()
                .map(|cell| match cell {
                    CellValue::Integer(v) => CellValue::Float(v as f64),
                    other => other,
                })
                .collect()
        } else {
            cells
        };
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Create a column with an explicitly declared type.
    pub fn with_kind(name: impl Into<String>, kind: ColumnType, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnType {
        self.kind
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<CellValue> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&CellValue> {
        self.cells.get(idx)
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }

    pub fn has_missing(&self) -> bool {
        self.cells.iter().any(CellValue::is_missing)
    }

    /// Non-missing cells in row order.
    pub fn present(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().filter(|cell| !cell.is_missing())
    }

    /// Number of distinct non-missing values.
    pub fn distinct_count(&self) -> usize {
        self.present().map(CellValue::key).collect::<BTreeSet<_>>().len()
    }

    /// Distinct labels in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut categories = Vec::new();
        for cell in self.present() {
            if seen.insert(cell.key()) {
                categories.push(cell.to_string());
            }
        }
        categories
    }

    /// Same name and type, different cells.
    pub fn with_cells(&self, cells: Vec<CellValue>) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            cells,
        }
    }

    fn filtered(self, mask: &[bool]) -> Self {
        let cells = self
            .cells
            .into_iter()
            .zip(mask)
            .filter_map(|(cell, keep)| keep.then_some(cell))
            .collect();
        Self {
            name: self.name,
            kind: self.kind,
            cells,
        }
    }
}

/// Ordered collection of equal-length, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table, checking the unique-name and equal-length invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] when two columns share a name or have
    /// different lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let rows = columns.first().map_or(0, Column::len);
        Self::with_row_count(columns, rows)
    }

    /// Build a table with an explicit row count, allowing `(n, 0)` shapes.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] when two columns share a name or a column
    /// length differs from `rows`.
    pub fn with_row_count(columns: Vec<Column>, rows: usize) -> Result<Self, TableError> {
        let mut names = BTreeSet::new();
        for column in &columns {
            if !names.insert(column.name()) {
                return Err(TableError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
            if column.len() != rows {
                return Err(TableError::LengthMismatch {
                    column: column.name().to_string(),
                    expected: rows,
                    found: column.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.columns.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cells of one row, in column order.
    pub fn row(&self, idx: usize) -> Option<Vec<&CellValue>> {
        if idx >= self.rows {
            return None;
        }
        self.columns.iter().map(|column| column.get(idx)).collect()
    }

    /// Full-row identity used for duplicate detection.
    pub fn row_key(&self, idx: usize) -> Vec<CellKey> {
        self.columns
            .iter()
            .map(|column| column.get(idx).map_or(CellKey::Missing, CellValue::key))
            .collect()
    }

    /// True if the row holds at least one missing cell.
    pub fn row_has_missing(&self, idx: usize) -> bool {
        self.columns
            .iter()
            .any(|column| column.get(idx).is_some_and(CellValue::is_missing))
    }

    /// Keep the rows whose mask entry is `true`, preserving order.
    ///
    /// Rows beyond the mask length are dropped.
    pub fn filter_rows(self, mask: &[bool]) -> Self {
        let rows = mask.iter().take(self.rows).filter(|keep| **keep).count();
        let columns = self
            .columns
            .into_iter()
            .map(|column| column.filtered(mask))
            .collect();
        Self { columns, rows }
    }

    /// Keep the columns matching `predicate`; the row count is unchanged.
    pub fn retain_columns(self, mut predicate: impl FnMut(&Column) -> bool) -> Self {
        let columns = self
            .columns
            .into_iter()
            .filter(|column| predicate(column))
            .collect();
        Self {
            columns,
            rows: self.rows,
        }
    }

    /// Remove the named columns, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownColumnError`] listing every absent name. Nothing is
    /// removed in that case.
    pub fn drop_columns(self, names: &[String]) -> Result<Self, UnknownColumnError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.contains_column(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(UnknownColumnError::new(missing));
        }
        Ok(self.retain_columns(|column| !names.iter().any(|name| name == column.name())))
    }

    /// Apply `f` to every column, keeping order and row count.
    ///
    /// `f` must return a column of the same length.
    pub fn map_columns(self, mut f: impl FnMut(Column) -> Column) -> Self {
        let rows = self.rows;
        let columns = self
            .columns
            .into_iter()
            .map(|column| {
                let mapped = f(column);
                debug_assert_eq!(mapped.len(), rows, "column length changed");
                mapped
            })
            .collect();
        Self { columns, rows }
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let rows = n.min(self.rows);
        let columns = self
            .columns
            .iter()
            .map(|column| column.with_cells(column.cells()[..rows].to_vec()))
            .collect();
        Self { columns, rows }
    }
}
