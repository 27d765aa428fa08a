//! Config-driven vault lifecycle across the core and vault crates.

use strongbox_core::TokenFormat;
use strongbox_integration_tests::{config_at, open_vault};
use strongbox_vault::{Category, VaultError};
use tempfile::TempDir;

const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

#[test]
fn test_every_category_round_trips() {
    let tmp = TempDir::new().unwrap();
    let vault = open_vault(&config_at(tmp.path(), TokenFormat::Sealed), "master");

    let seed = vec!["legal"; 24].join(" ");
    vault
        .add_entry(Category::Accounts, "github", "Username: me\nPassword: pw")
        .unwrap();
    vault.add_entry(Category::Seeds, "cold", &seed).unwrap();
    vault.add_entry(Category::PrivateKeys, "hot", KEY).unwrap();
    vault.add_entry(Category::Others, "wifi", "ssid: home").unwrap();

    for category in Category::ALL {
        assert!(tmp.path().join(category.dir_name()).is_dir());
        assert_eq!(vault.list_entries(category).unwrap().len(), 1);
    }
    assert_eq!(vault.select_entry(Category::Seeds, 1).unwrap().expose(), seed);
    assert_eq!(vault.select_entry(Category::PrivateKeys, 1).unwrap().expose(), KEY);
}

#[test]
fn test_reopening_sees_previous_entries() {
    let tmp = TempDir::new().unwrap();
    let config = config_at(tmp.path(), TokenFormat::Sealed);
    open_vault(&config, "master")
        .add_entry(Category::Others, "note", "k: v")
        .unwrap();

    let reopened = open_vault(&config, "master");
    let entries = reopened.list_entries(Category::Others).unwrap();
    assert_eq!(entries[0].0, "note");
}

#[test]
fn test_legacy_vault_reads_back_with_right_password() {
    let tmp = TempDir::new().unwrap();
    let config = config_at(tmp.path(), TokenFormat::Legacy);
    let vault = open_vault(&config, "master");
    vault.add_entry(Category::Others, "old", "k: v").unwrap();

    assert_eq!(vault.select_entry(Category::Others, 1).unwrap().expose(), "k: v");
}

#[test]
fn test_sealed_reader_ignores_legacy_entries() {
    let tmp = TempDir::new().unwrap();
    open_vault(&config_at(tmp.path(), TokenFormat::Legacy), "master")
        .add_entry(Category::Others, "old", "k: v")
        .unwrap();

    let sealed = open_vault(&config_at(tmp.path(), TokenFormat::Sealed), "master");
    assert!(matches!(
        sealed.catalog(Category::Others),
        Err(VaultError::NoData)
    ));
}

#[test]
fn test_delete_by_index_removes_file() {
    let tmp = TempDir::new().unwrap();
    let vault = open_vault(&config_at(tmp.path(), TokenFormat::Sealed), "master");
    vault.add_entry(Category::Others, "a", "k: 1").unwrap();
    vault.add_entry(Category::Others, "b", "k: 2").unwrap();

    let catalog = vault.catalog(Category::Others).unwrap();
    let target = catalog.resolve(2).unwrap().label.clone();
    assert_eq!(vault.delete_entry(Category::Others, 2).unwrap(), target);

    let remaining = vault.catalog(Category::Others).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining.resolve(1).unwrap().label, target);
}
