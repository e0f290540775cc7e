//! Tests for building a cleaning configuration from files and flags.

use std::fs;

use tempfile::TempDir;
use tidy_cli::options::{
    CleanOverrides, apply_overrides, load_config, parse_conversion, parse_missing,
};
use tidy_model::{CleaningConfig, MissingStrategy, TargetType};

#[test]
fn parses_conversion_requests() {
    assert_eq!(
        parse_conversion("age=numeric").unwrap(),
        ("age".to_string(), TargetType::Numeric)
    );
    assert_eq!(
        parse_conversion("a=b=category").unwrap(),
        ("a=b".to_string(), TargetType::Categorical)
    );
    assert_eq!(
        parse_conversion("age=float128").unwrap(),
        ("age".to_string(), TargetType::Keep)
    );
    assert!(parse_conversion("age").is_err());
    assert!(parse_conversion("=numeric").is_err());
}

#[test]
fn unknown_strategy_flag_is_none() {
    assert_eq!(parse_missing("fill-mode").unwrap(), MissingStrategy::FillMode);
    assert_eq!(parse_missing("interpolate").unwrap(), MissingStrategy::None);
}

#[test]
fn flags_layer_over_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean.json");
    fs::write(
        &path,
        r#"{
            "missing_action": "fill_mean",
            "columns_to_remove": ["notes"],
            "conversions": {"age": "numeric", "notes": "text"}
        }"#,
    )
    .unwrap();

    let base = load_config(&path).expect("config loads");
    assert_eq!(base.missing_action, MissingStrategy::FillMean);
    assert!(!base.conversions.contains_key("notes"));

    let overrides = CleanOverrides {
        missing: Some(MissingStrategy::DropRows),
        remove_duplicates: true,
        drop: vec!["age".to_string()],
        convert: vec![("joined".to_string(), TargetType::Datetime)],
    };
    let config = apply_overrides(base, &overrides);

    assert_eq!(config.missing_action, MissingStrategy::DropRows);
    assert!(config.remove_duplicates);
    assert_eq!(config.columns_to_remove, vec!["notes", "age"]);
    assert_eq!(config.target_for("age"), TargetType::Keep);
    assert_eq!(config.target_for("joined"), TargetType::Datetime);
}

#[test]
fn empty_overrides_keep_the_base() {
    let base = CleaningConfig::new().with_remove_duplicates(true);
    let config = apply_overrides(base.clone(), &CleanOverrides::default());
    assert_eq!(config, base);
}

#[test]
fn malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse config"));
}
