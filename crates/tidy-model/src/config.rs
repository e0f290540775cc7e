//! User choices driving a pipeline run.
//!
//! Strategy and target names coming from outside (JSON config, CLI flags) are
//! parsed permissively: an unrecognized name maps to the no-op variant.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

/// How missing cells are handled before any other step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MissingStrategy {
    #[default]
    None,
    DropRows,
    DropColumns,
    FillMean,
    FillMedian,
    FillMode,
}

impl MissingStrategy {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::DropRows,
        Self::DropColumns,
        Self::FillMean,
        Self::FillMedian,
        Self::FillMode,
    ];

    /// Parse a strategy name, returning `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "" | "none" => Some(Self::None),
            "drop_rows" => Some(Self::DropRows),
            "drop_columns" | "drop_cols" => Some(Self::DropColumns),
            "fill_mean" | "mean" => Some(Self::FillMean),
            "fill_median" | "median" => Some(Self::FillMedian),
            "fill_mode" | "mode" => Some(Self::FillMode),
            _ => None,
        }
    }

    /// Parse a strategy name, treating anything unrecognized as [`Self::None`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(name, "unrecognized missing-value strategy, ignoring");
            Self::None
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DropRows => "drop_rows",
            Self::DropColumns => "drop_columns",
            Self::FillMean => "fill_mean",
            Self::FillMedian => "fill_median",
            Self::FillMode => "fill_mode",
        }
    }
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MissingStrategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<MissingStrategy> for String {
    fn from(strategy: MissingStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

/// Requested primitive type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetType {
    #[default]
    Keep,
    Numeric,
    Datetime,
    Text,
    Categorical,
}

impl TargetType {
    pub const ALL: [Self; 5] = [
        Self::Keep,
        Self::Numeric,
        Self::Datetime,
        Self::Text,
        Self::Categorical,
    ];

    /// Parse a target name, returning `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "" | "keep" => Some(Self::Keep),
            "numeric" | "number" => Some(Self::Numeric),
            "datetime" | "date" | "timestamp" => Some(Self::Datetime),
            "text" | "string" | "str" => Some(Self::Text),
            "categorical" | "category" => Some(Self::Categorical),
            _ => None,
        }
    }

    /// Parse a target name, treating anything unrecognized as [`Self::Keep`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(name, "unrecognized target type, keeping column unchanged");
            Self::Keep
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Numeric => "numeric",
            Self::Datetime => "datetime",
            Self::Text => "text",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TargetType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<TargetType> for String {
    fn from(target: TargetType) -> Self {
        target.as_str().to_string()
    }
}

/// The user's cleaning choices for one run.
///
/// Built through the `with_*` / `drop_column` / `convert_column` methods a
/// config never asks to both drop and retype a column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub missing_action: MissingStrategy,
    pub remove_duplicates: bool,
    /// Columns to remove, in request order.
    pub columns_to_remove: Vec<String>,
    /// Requested target type per column.
    pub conversions: BTreeMap<String, TargetType>,
}

impl CleaningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_action(mut self, strategy: MissingStrategy) -> Self {
        self.missing_action = strategy;
        self
    }

    #[must_use]
    pub fn with_remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    /// Schedule a column for removal, discarding any pending conversion of it.
    #[must_use]
    pub fn drop_column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.conversions.remove(&name);
        if !self.columns_to_remove.contains(&name) {
            self.columns_to_remove.push(name);
        }
        self
    }

    /// Request a conversion. Ignored when the column is scheduled for removal.
    #[must_use]
    pub fn convert_column(mut self, name: impl Into<String>, target: TargetType) -> Self {
        let name = name.into();
        if !self.columns_to_remove.contains(&name) {
            self.conversions.insert(name, target);
        }
        self
    }

    /// Conversions that actually change something, skipping dropped columns.
    pub fn effective_conversions(&self) -> impl Iterator<Item = (&str, TargetType)> {
        self.conversions
            .iter()
            .filter(|(name, target)| {
                **target != TargetType::Keep && !self.columns_to_remove.contains(name)
            })
            .map(|(name, target)| (name.as_str(), *target))
    }

    /// Target requested for `column`, [`TargetType::Keep`] when none.
    pub fn target_for(&self, column: &str) -> TargetType {
        if self.columns_to_remove.iter().any(|name| name == column) {
            return TargetType::Keep;
        }
        self.conversions
            .get(column)
            .copied()
            .unwrap_or(TargetType::Keep)
    }

    /// True when running this config would change nothing.
    pub fn is_noop(&self) -> bool {
        self.missing_action == MissingStrategy::None
            && !self.remove_duplicates
            && self.columns_to_remove.is_empty()
            && self.effective_conversions().next().is_none()
    }
}
