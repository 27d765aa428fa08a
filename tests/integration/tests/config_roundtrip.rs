//! Config save/load roundtrip integration tests.
//!
//! These tests verify that configuration can be serialized, written to disk,
//! and loaded back with identical field values.

use std::path::{Path, PathBuf};

use strongbox_core::config::{Config, LogLevel};
use strongbox_core::TokenFormat;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strongbox.json5");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.vault.root, config.vault.root);
    assert_eq!(loaded.vault.format, config.vault.format);
    assert_eq!(loaded.logging.level, config.logging.level);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strongbox.json5");

    let mut config = Config::default();
    config.vault.root = Some(PathBuf::from("/srv/strongbox"));
    config.vault.format = TokenFormat::Legacy;
    config.logging.level = LogLevel::Debug;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.vault.root, Some(PathBuf::from("/srv/strongbox")));
    assert_eq!(loaded.vault.format, TokenFormat::Legacy);
    assert_eq!(loaded.logging.level, LogLevel::Debug);
}

#[test]
fn test_saved_config_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strongbox.json5");
    Config::default().save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["vault"]["format"], "sealed");
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/strongbox.json5"));
    assert!(result.is_err());
}

#[test]
fn test_load_or_default_tolerates_missing_file() {
    let config = Config::load_or_default(Some(Path::new("/nonexistent/strongbox.json5"))).unwrap();
    assert_eq!(config.vault.format, TokenFormat::Sealed);
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}
