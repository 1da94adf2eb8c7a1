//! Tests for error output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ignorer() -> Command {
    let mut cmd = Command::cargo_bin("ignorer").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("IGNORER_TEMPLATES_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn unknown_template_exits_not_found() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .arg("not-a-template")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not-a-template"))
        .stderr(predicate::str::contains("ignorer list"));

    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn close_typo_gets_a_suggestion() {
    ignorer()
        .current_dir(TempDir::new().unwrap().path())
        .arg("pyton")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("python"));
}

#[test]
fn one_bad_name_fails_the_whole_request() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["go", "not-a-template"])
        .assert()
        .failure()
        .code(3);

    // Nothing is written on failure.
    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    ignorer()
        .args(["--bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn invalid_list_format_is_a_usage_error() {
    ignorer()
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn missing_config_file_exits_with_config_error() {
    ignorer()
        .args(["--config", "/definitely/not/here.toml", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn missing_output_directory_is_an_error() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["go", "--output", "no-such-dir"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-such-dir"));
}
