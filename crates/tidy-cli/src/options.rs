//! Building a [`CleaningConfig`] from a config file and command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tidy_model::{CleaningConfig, MissingStrategy, TargetType};

/// Cleaning choices given as flags. They override the config file.
#[derive(Debug, Clone, Default)]
pub struct CleanOverrides {
    pub missing: Option<MissingStrategy>,
    pub remove_duplicates: bool,
    pub drop: Vec<String>,
    pub convert: Vec<(String, TargetType)>,
}

/// Parses a `COLUMN=TYPE` conversion request.
///
/// The split happens at the last `=`, so column names may contain one. An
/// unrecognized type name becomes `keep`.
pub fn parse_conversion(value: &str) -> Result<(String, TargetType), String> {
    let (column, target) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected COLUMN=TYPE, got `{value}`"))?;
    if column.is_empty() {
        return Err(format!("missing column name in `{value}`"));
    }
    Ok((column.to_string(), TargetType::from_name(target)))
}

/// Parses a missing-value strategy flag; unrecognized names become `none`.
pub fn parse_missing(value: &str) -> Result<MissingStrategy, String> {
    Ok(MissingStrategy::from_name(value))
}

/// Reads a JSON [`CleaningConfig`].
pub fn load_config(path: &Path) -> Result<CleaningConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: CleaningConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    // replay through the builders so a file cannot both drop and convert a column
    let mut normalized = CleaningConfig::new()
        .with_missing_action(config.missing_action)
        .with_remove_duplicates(config.remove_duplicates);
    for name in config.columns_to_remove {
        normalized = normalized.drop_column(name);
    }
    for (name, target) in config.conversions {
        normalized = normalized.convert_column(name, target);
    }
    Ok(normalized)
}

/// Layers `overrides` on top of `base`.
///
/// Drops and conversions add to the base; the strategy replaces it.
pub fn apply_overrides(base: CleaningConfig, overrides: &CleanOverrides) -> CleaningConfig {
    let mut config = base;
    if let Some(strategy) = overrides.missing {
        config = config.with_missing_action(strategy);
    }
    if overrides.remove_duplicates {
        config = config.with_remove_duplicates(true);
    }
    for name in &overrides.drop {
        config = config.drop_column(name.clone());
    }
    for (name, target) in &overrides.convert {
        config = config.convert_column(name.clone(), *target);
    }
    config
}
