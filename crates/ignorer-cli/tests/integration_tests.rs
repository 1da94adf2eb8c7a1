//! End-to-end tests for the `ignorer` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ignorer() -> Command {
    let mut cmd = Command::cargo_bin("ignorer").unwrap();
    // Isolate from the developer's environment.
    cmd.env_remove("RUST_LOG")
        .env_remove("IGNORER_TEMPLATES_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn version_flag_prints_semver() {
    ignorer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_mentions_templates() {
    ignorer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEMPLATE"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    ignorer()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn no_color_env_accepts_any_non_empty_value() {
    // Per https://no-color.org the value is irrelevant; "1", "true" and
    // arbitrary strings must all be accepted, not parsed as a flag value.
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .env("NO_COLOR", "definitely-not-a-bool")
        .arg("go")
        .assert()
        .success();

    assert!(temp.path().join(".gitignore").exists());
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_prints_grouped_catalog() {
    ignorer()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available .gitignore templates:"))
        .stdout(predicate::str::contains("Languages:"))
        .stdout(predicate::str::contains("Frameworks:"))
        .stdout(predicate::str::contains("Tools & Others:"))
        .stdout(predicate::str::contains("- go"))
        .stdout(predicate::str::contains("- docker"));
}

#[test]
fn list_format_list_is_one_name_per_line() {
    ignorer()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go\n"))
        .stdout(predicate::str::contains("rust\n"))
        .stdout(predicate::str::contains("Languages:").not());
}

#[test]
fn list_format_json_is_parseable() {
    let output = ignorer()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert!(entries.iter().any(|e| e["name"] == "go"));
    assert!(entries.iter().any(|e| e["category"] == "tool"));
}

#[test]
fn list_format_csv_has_header_row() {
    ignorer()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,category,description"));
}

#[test]
fn list_format_csv_doubles_quotes_in_descriptions() {
    let templates = TempDir::new().unwrap();
    fs::write(templates.path().join("unity.gitignore"), "Library/\n").unwrap();
    fs::write(
        templates.path().join("ignorer.toml"),
        "[templates.unity]\ncategory = \"tool\"\ndescription = 'Unity \"Personal\" projects'\n",
    )
    .unwrap();

    ignorer()
        .env("IGNORER_TEMPLATES_DIR", templates.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Unity \"\"Personal\"\" projects\"",
        ));
}

#[test]
fn closed_stdout_pipe_is_not_an_error() {
    // `ignorer list | head -1` must not surface EPIPE as a failure.
    use std::process::{Command as StdCommand, Stdio};

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("ignorer"))
        .args(["list", "--format", "list"])
        .env_remove("RUST_LOG")
        .env_remove("IGNORER_TEMPLATES_DIR")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Close the read end before the child finishes writing.
    drop(child.stdout.take());

    let status = child.wait().unwrap();
    assert!(status.success(), "expected success, got {status}");
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_creates_gitignore_in_cwd() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated .gitignore with templates: go",
        ));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.contains("# Generated by ignorer"));
    assert!(content.contains("### go ###"));
    assert!(content.contains("vendor/"));
}

#[test]
fn generate_combines_multiple_templates_in_order() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["python", "django", "docker"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "templates: python, django, docker",
        ));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    let python = content.find("### python ###").unwrap();
    let django = content.find("### django ###").unwrap();
    let docker = content.find("### docker ###").unwrap();
    assert!(python < django && django < docker);
}

#[test]
fn generate_resolves_aliases_to_canonical_names() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .arg("golang")
        .assert()
        .success()
        .stdout(predicate::str::contains("templates: go"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.contains("### go ###"));
}

#[test]
fn generate_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    ignorer().current_dir(temp.path()).arg("RUST").assert().success();

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.contains("### rust ###"));
}

#[test]
fn generate_overwrites_and_warns() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitignore"), "old content\n").unwrap();

    ignorer()
        .current_dir(temp.path())
        .arg("rust")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced existing"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(!content.contains("old content"));
    assert!(content.contains("### rust ###"));
}

#[test]
fn append_keeps_existing_content() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitignore"), "# mine\n*.log\n").unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["rust", "--append"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated .gitignore"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.starts_with("# mine\n*.log\n"));
    assert!(content.contains("### rust ###"));
}

#[test]
fn output_flag_writes_into_given_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("sub");
    fs::create_dir(&target).unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["go", "--output", "sub"])
        .assert()
        .success();

    assert!(target.join(".gitignore").exists());
    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn dry_run_prints_content_without_writing() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["go", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### go ###"));

    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn quiet_generate_writes_file_silently() {
    let temp = TempDir::new().unwrap();

    ignorer()
        .current_dir(temp.path())
        .args(["-q", "go"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join(".gitignore").exists());
}

// ── user templates ────────────────────────────────────────────────────────────

#[test]
fn templates_dir_env_adds_custom_templates() {
    let temp = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    fs::write(
        templates.path().join("terraform.gitignore"),
        "*.tfstate\n.terraform/\n",
    )
    .unwrap();

    ignorer()
        .current_dir(temp.path())
        .env("IGNORER_TEMPLATES_DIR", templates.path())
        .arg("terraform")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.contains("### terraform ###"));
    assert!(content.contains("*.tfstate"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn shell_completions_generate_bash() {
    ignorer()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignorer"));
}
