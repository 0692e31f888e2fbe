use std::fs;

use gasdts_typegen::Overrides;

use super::overrides::load;
use crate::error::Error;

#[test]
fn no_file_means_built_in_tables() {
    assert_eq!(load(None).unwrap(), Overrides::default());
}

#[test]
fn file_replaces_named_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    fs::write(&path, r#"{ "any_types": ["Variant"] }"#).unwrap();

    let overrides = load(Some(&path)).unwrap();
    assert!(overrides.is_any_type("Variant"));
    assert!(!overrides.is_any_type("Object"));
    assert_eq!(overrides.extends, Overrides::default().extends);
}

#[test]
fn malformed_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    fs::write(&path, r#"{ "any_type": [] }"#).unwrap();

    let err = load(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Overrides { .. }));
    assert!(err.to_string().contains("overrides.json"), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
