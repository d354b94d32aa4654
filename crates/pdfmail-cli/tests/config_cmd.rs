//! Integration tests for the `config` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pdfmail").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn config_show_defaults() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order\": \"discovery\""))
        .stdout(predicate::str::contains("extracted_emails.csv"))
        .stderr(predicate::str::contains("No config file found"));
}

#[test]
fn config_init_refuses_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("pdfmail.json");

    cmd(&home)
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    cmd(&home)
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cmd(&home)
        .args(["config", "init", "--force", "-o"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["config", "set", "export.line_terminator", "crlf"])
        .assert()
        .success();

    let saved = home.path().join(".config").join("pdfmail").join("config.json");
    assert!(fs::read_to_string(&saved).unwrap().contains("\"crlf\""));

    cmd(&home)
        .args(["config", "get", "export.line_terminator"])
        .assert()
        .success()
        .stdout("\"crlf\"\n");
}

#[test]
fn config_set_rejects_bad_value() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["config", "set", "export.order", "random"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["config", "get", "pdf.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn config_get_reads_explicit_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("x.json");
    fs::write(&path, r#"{"export": {"order": "alphabetical"}}"#).unwrap();

    cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "export.order"])
        .assert()
        .success()
        .stdout("\"alphabetical\"\n");
}

#[test]
fn config_set_writes_explicit_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("x.json");

    cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "pdf.page_fallback", "false"])
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("\"page_fallback\": false"));
    assert!(!home.path().join(".config").join("pdfmail").join("config.json").exists());

    cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"page_fallback\": false"));
}
