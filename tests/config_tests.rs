//! Configuration file handling through the CLI and the library.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

use frontier::domain::Currency;
use frontier::error::{ConfigError, Error};
use frontier::infrastructure::config::settings::Config;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn cli_returns_nonzero_on_invalid_currency() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[plan]\ncurrency = \"GBP\"\n");

    cargo_bin_cmd!("frontier")
        .arg("--config")
        .arg(&path)
        .args(["tax", "1000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan.currency"));
}

#[test]
fn cli_returns_nonzero_on_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging\nlevel = ");

    cargo_bin_cmd!("frontier")
        .arg("--config")
        .arg(&path)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn configured_currency_skips_the_currency_prompt() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[logging]\nlevel = \"error\"\nformat = \"json\"\n\n[plan]\ncurrency = \"USD\"\n",
    );

    cargo_bin_cmd!("frontier")
        .arg("--config")
        .arg(&path)
        .arg("plan")
        .env("NO_COLOR", "1")
        .write_stdin("50000\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4125000.00"))
        .stderr(predicate::str::contains("Enter the currency").not());
}

#[test]
fn load_reads_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[plan]\ncurrency = \"JPY\"\n");

    let config = Config::load(&path).unwrap();

    assert_eq!(config.default_currency(), Some(Currency::Jpy));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn load_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();

    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn load_or_default_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn unknown_log_format_is_rejected() {
    let err = Config::parse_toml("[logging]\nformat = \"xml\"\n").unwrap_err();

    assert!(err.to_string().contains("logging.format"));
}
