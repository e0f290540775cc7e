//! Cell values and the column type classification.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format used for timestamps in text conversions and previews.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single typed cell of a [`Column`](crate::Column).
///
/// Equality treats every missing cell (including `NaN`) as equal.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value.
    Missing,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    /// A categorical label.
    Label(String),
}

impl CellValue {
    /// Returns true for `Missing` and for `NaN` floats.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the cell, `None` for non-numeric or missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// The column type this cell would classify as on its own.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Missing => None,
            Self::Float(v) if v.is_nan() => None,
            Self::Integer(_) => Some(ColumnType::Integer),
            Self::Float(_) => Some(ColumnType::Float),
            Self::Text(_) => Some(ColumnType::Text),
            Self::Boolean(_) => Some(ColumnType::Boolean),
            Self::Timestamp(_) => Some(ColumnType::Timestamp),
            Self::Label(_) => Some(ColumnType::Categorical),
        }
    }

    /// Key used for equality in duplicate detection and distinct counts.
    ///
    /// Two missing cells produce the same key.
    pub fn key(&self) -> CellKey {
        match self {
            Self::Missing => CellKey::Missing,
            Self::Float(v) if v.is_nan() => CellKey::Missing,
            Self::Integer(v) => CellKey::Integer(*v),
            // -0.0 and 0.0 must share a key
            Self::Float(v) => CellKey::Float((v + 0.0).to_bits()),
            Self::Text(v) => CellKey::Text(v.clone()),
            Self::Boolean(v) => CellKey::Boolean(*v),
            Self::Timestamp(v) => CellKey::Timestamp(*v),
            Self::Label(v) => CellKey::Label(v.clone()),
        }
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_missing() || b.is_missing() => a.is_missing() && b.is_missing(),
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) | (Self::Label(a), Self::Label(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => Ok(()),
            Self::Float(v) => f.write_str(&format_numeric(*v)),
            Self::Text(v) | Self::Label(v) => f.write_str(v),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{}", v.format(TIMESTAMP_DISPLAY_FORMAT)),
        }
    }
}

/// Hashable, totally ordered identity of a cell value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKey {
    Missing,
    Integer(i64),
    Float(u64),
    Text(String),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    Label(String),
}

/// Declared or inferred primitive type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
    Categorical,
    /// Cells of more than one primitive type.
    Mixed,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Categorical => "categorical",
            Self::Mixed => "mixed",
        }
    }

    /// Infers the type of a column from its cells.
    ///
    /// Integers mixed with floats classify as `Float`; columns without any
    /// non-missing cell classify as `Text`.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut inferred: Option<Self> = None;
        for cell in cells {
            let Some(kind) = cell.column_type() else {
                continue;
            };
            inferred = Some(match inferred {
                None => kind,
                Some(current) if current == kind => current,
                Some(current) if current.is_numeric() && kind.is_numeric() => Self::Float,
                Some(_) => return Self::Mixed,
            });
        }
        inferred.unwrap_or(Self::Text)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// Integer-valued floats like `40.0` are formatted as `"40"`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}
