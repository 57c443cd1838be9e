//! CLI integration tests
//!
//! These tests run the compiled binary against temporary handler
//! directories and check exit codes, stdout and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_HANDLER: &str = r#"package handlers

func (h *HealthHandler) Ping(c *gin.Context) {
	c.JSON(http.StatusOK, gin.H{"status": "ok"})
}
"#;

const ADHOC_HANDLER: &str = r#"package handlers

func (h *VideoHandler) Get(c *gin.Context) {
	c.JSON(http.StatusNotFound, gin.H{"error": "video not found"})
}
"#;

const WARNING_HANDLER: &str = r#"package handlers

func (h *ChatHandler) Send(c *gin.Context) {
	h.log.Error("send failed", zap.Error(err))
	c.JSON(http.StatusBadRequest, models.ErrorResponse{Code: models.ErrInvalidInput})
}
"#;

fn lint() -> Command {
    let mut cmd = Command::cargo_bin("api-error-lint").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn handler_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

fn root_arg(dir: &Path) -> String {
    dir.display().to_string()
}

#[test]
fn test_check_clean_directory() {
    let dir = handler_dir(&[("health.go", CLEAN_HANDLER)]);

    lint()
        .args(["check", "--root", &root_arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed (1 files)."));
}

#[test]
fn test_check_error_finding_fails() {
    let dir = handler_dir(&[("video.go", ADHOC_HANDLER)]);

    lint()
        .args(["check", "--root", &root_arg(dir.path()), "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("## Errors (must fix)"))
        .stdout(predicate::str::contains("- video.go:4 - ad-hoc error map"))
        .stdout(predicate::str::contains("Total: 1 error(s), 0 warning(s)"));
}

#[test]
fn test_check_warnings_only_succeeds() {
    let dir = handler_dir(&[("chat.go", WARNING_HANDLER)]);

    lint()
        .args(["check", "--root", &root_arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Warnings (advisory)"))
        .stdout(predicate::str::contains("[log-missing-request-id]"))
        .stdout(predicate::str::contains("## Errors").not());
}

#[test]
fn test_check_missing_root() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("handlers");

    lint()
        .args(["check", "--root", &root_arg(&missing)])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Scan root does not exist"));
}

#[test]
fn test_check_empty_directory() {
    let dir = handler_dir(&[("README.md", "# handlers\n")]);

    lint()
        .args(["check", "--root", &root_arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching files found"));
}

#[test]
fn test_check_jsonl_output() {
    let dir = handler_dir(&[("video.go", ADHOC_HANDLER), ("chat.go", WARNING_HANDLER)]);

    let output = lint()
        .args(["check", "--root", &root_arg(dir.path()), "--format", "jsonl"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let findings: Vec<&serde_json::Value> =
        records.iter().filter(|r| r["type"] == "finding").collect();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["rule"], "log-missing-request-id");
    assert_eq!(findings[1]["rule"], "adhoc-error-map");

    let status = records.last().unwrap();
    assert_eq!(status["type"], "status");
    assert_eq!(status["verdict"], "fail");
    assert_eq!(status["files_checked"], 2);
    assert_eq!(status["errors"], 1);
    assert_eq!(status["warnings"], 1);
}

#[test]
fn test_default_command_uses_conventional_root() {
    let project = TempDir::new().unwrap();
    let handlers = project.path().join("backend").join("internal").join("handlers");
    fs::create_dir_all(&handlers).unwrap();
    fs::write(handlers.join("video.go"), ADHOC_HANDLER).unwrap();

    lint()
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[adhoc-error-map]"));
}

#[test]
fn test_default_command_without_handlers_directory() {
    let project = TempDir::new().unwrap();

    lint()
        .current_dir(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("backend/internal/handlers"));
}

#[test]
fn test_config_file_in_working_directory() {
    let project = TempDir::new().unwrap();
    let handlers = project.path().join("handlers");
    fs::create_dir(&handlers).unwrap();
    fs::write(handlers.join("video.go"), ADHOC_HANDLER).unwrap();
    fs::write(
        project.path().join("api-error-lint.toml"),
        "[audit]\nroot = \"handlers\"\n\n[rules]\nadhoc-error-map = { severity = \"warning\" }\n",
    )
    .unwrap();

    lint()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Warnings (advisory)"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = handler_dir(&[("health.go", CLEAN_HANDLER)]);

    lint()
        .args(["check", "--root", &root_arg(dir.path())])
        .args(["--config", &root_arg(&dir.path().join("missing.toml"))])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_list_rules() {
    let project = TempDir::new().unwrap();

    lint()
        .current_dir(project.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("adhoc-error-map"))
        .stdout(predicate::str::contains("error-response-missing-code"))
        .stdout(predicate::str::contains("unchecked-not-found"))
        .stdout(predicate::str::contains("log-missing-error-code"))
        .stdout(predicate::str::contains("log-missing-request-id"));
}

#[test]
fn test_list_rules_jsonl() {
    let project = TempDir::new().unwrap();

    let output = lint()
        .current_dir(project.path())
        .args(["list", "--format", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 5);
    for line in text.lines() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(record["id"].is_string());
        assert!(record["enabled"].as_bool().unwrap());
    }
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = handler_dir(&[("health.go", CLEAN_HANDLER)]);

    lint()
        .args(["check", "--root", &root_arg(dir.path()), "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stderr(predicate::str::contains("scanning"));
}
