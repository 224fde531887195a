//! Data files on disk, valid and broken.

use super::common::{papaya, to_json};
use cami::{DuplicatePolicy, Health, MalformedDataError, Matcher, Store};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write data file");
    path
}

#[test]
fn test_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ingredients.json", &to_json(&[papaya()]));

    let store = Store::from_path(&path, DuplicatePolicy::default()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(Matcher::new(&store).query("PAPAYA").is_found());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Store::from_path(dir.path().join("nope.json"), DuplicatePolicy::default())
        .unwrap_err();
    assert!(matches!(err, MalformedDataError::Io(_)));
}

#[test]
fn test_truncated_json_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", r#"[{"name": "papaya","#);
    let err = Store::from_path(&path, DuplicatePolicy::default()).unwrap_err();
    assert!(matches!(err, MalformedDataError::Json(_)));
}

#[test]
fn test_object_instead_of_array_is_rejected() {
    let err = Store::load(r#"{"papaya": {"comment": "Great!"}}"#).unwrap_err();
    assert!(matches!(err, MalformedDataError::Json(_)));
}

#[test]
fn test_missing_field_names_record_and_field() {
    let source = r#"[
        {"name": "kale", "comment": "Yes", "health": "good", "sustainability": "low impact"},
        {"name": "beef", "comment": "Hmm", "health": "neutral"}
    ]"#;
    let err = Store::load(source).unwrap_err();
    assert!(matches!(
        err,
        MalformedDataError::MissingField { index: 1, field: "sustainability" }
    ));
    assert_eq!(err.to_string(), "record 1: missing required field `sustainability`");
}

#[test]
fn test_unknown_rating_is_rejected() {
    let source = r#"[{"name": "kale", "comment": "Yes", "health": "great", "sustainability": "low impact"}]"#;
    let err = Store::load(source).unwrap_err();
    assert_eq!(err.to_string(), "record 0: unknown health rating 'great'");
}

#[test]
fn test_ratings_accept_hyphens_and_casing() {
    let source = r#"[{"name": "kale", "comment": "Yes", "health": "Good", "sustainability": "low-impact"}]"#;
    let store = Store::load(source).unwrap();
    assert_eq!(store.get("kale").unwrap().health, Health::Good);
}

#[test]
fn test_empty_array_loads_and_everything_misses() {
    let store = Store::load("[]").unwrap();
    assert!(store.is_empty());
    let result = Matcher::new(&store).query("papaya");
    assert!(!result.is_found());
    assert!(result.suggestions().is_empty());
}

#[test]
fn test_bundled_file_matches_embedded_store() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/ingredients.json");
    let from_disk = Store::from_path(path, DuplicatePolicy::Reject).unwrap();
    let embedded = Store::embedded().unwrap();
    assert_eq!(from_disk.as_slice(), embedded.as_slice());
}
