//! Config files.

use cami::{Config, ConfigError, DuplicatePolicy, MatcherConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_object_is_all_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_full_config_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cami.json");
    fs::write(
        &path,
        r#"{"maxDistance": 2, "maxSuggestions": 5, "duplicates": "reject"}"#,
    )
    .unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(
        config.matcher,
        MatcherConfig::default().with_max_distance(2).with_max_suggestions(5)
    );
    assert_eq!(config.duplicates, DuplicatePolicy::Reject);
}

#[test]
fn test_zero_suggestions_is_invalid() {
    let err = Config::from_json(r#"{"maxSuggestions": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_policy_is_json_error() {
    let err = Config::from_json(r#"{"duplicates": "newest"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
