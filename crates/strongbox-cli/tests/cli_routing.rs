//! CLI binary integration tests.
//!
//! These tests run the compiled `strongbox` binary against a temporary home
//! directory to check command routing, exit codes, and the non-interactive
//! add/list/show/delete path.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn strongbox_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_strongbox"));
    cmd.env("STRONGBOX_HOME", home)
        .env("STRONGBOX_PASSWORD", "correct horse")
        .env_remove("STRONGBOX_CONFIG")
        .env_remove("STRONGBOX_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    strongbox_cmd(home)
        .args(args)
        .output()
        .expect("failed to run strongbox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["version"]);
    assert!(output.status.success(), "version command should succeed");
    assert!(
        stdout(&output).contains("strongbox"),
        "version output should contain 'strongbox', got: {}",
        stdout(&output)
    );
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--help"]);
    assert!(output.status.success(), "--help should succeed");
    let text = stdout(&output);
    for command in ["add", "list", "show", "delete", "menu", "config"] {
        assert!(text.contains(command), "help should mention '{}'", command);
    }
}

#[test]
fn test_cli_unknown_command() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["nonexistent-command"]);
    assert!(
        !output.status.success(),
        "unknown command should return non-zero exit code"
    );
}

#[test]
fn test_cli_unknown_category() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["list", "photos"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_list_empty_vault_fails() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["list", "accounts"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No data available"), "got: {}", stderr);
}

#[test]
fn test_cli_config_init_and_path() {
    let home = TempDir::new().unwrap();

    let output = run(home.path(), &["config", "path"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        home.path().join("strongbox.json5").display().to_string()
    );

    assert!(run(home.path(), &["config", "init"]).status.success());
    assert!(home.path().join("strongbox.json5").exists());
    assert!(!run(home.path(), &["config", "init"]).status.success());
    assert!(run(home.path(), &["config", "init", "--force"]).status.success());
}

#[test]
fn test_cli_add_list_show_delete() {
    let home = TempDir::new().unwrap();
    let home = home.path();

    let added = run(home, &["add", "others", "wifi", "--data", "ssid: home"]);
    assert!(added.status.success(), "add failed: {:?}", added);

    let listed = run(home, &["list", "others"]);
    assert!(listed.status.success());
    assert_eq!(stdout(&listed).trim(), "1. wifi");

    let shown = run(home, &["show", "others", "1"]);
    assert!(shown.status.success());
    assert!(stdout(&shown).contains("ssid: home"));

    let duplicate = run(home, &["add", "others", "wifi", "--data", "ssid: office"]);
    assert!(!duplicate.status.success());

    let wrong = strongbox_cmd(home)
        .env("STRONGBOX_PASSWORD", "battery staple")
        .args(["list", "others"])
        .output()
        .unwrap();
    assert!(!wrong.status.success(), "wrong password must see no data");

    let deleted = run(home, &["delete", "others", "1", "--yes"]);
    assert!(deleted.status.success());
    assert!(!run(home, &["list", "others"]).status.success());
}
