//! End-to-end tests for auditing a handler directory
//!
//! These tests cover discovery, rule execution and aggregation against
//! real directories, both the checked-in fixtures and temporary trees.

#[macro_use]
mod common;

use api_error_lint::config::Config;
use api_error_lint::engine::executor::UNREADABLE_FILE_RULE;
use api_error_lint::{AuditError, AuditOutcome, RuleSet, Severity, Verdict, run_audit, run_audit_with};
use common::TestResult;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("handlers")
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::default();
    config.audit.root = root.to_path_buf();
    config
}

fn file_name(path: &Path) -> &str {
    assert_some!(path.file_name().and_then(|name| name.to_str()))
}

#[test]
fn test_missing_root_is_a_setup_failure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("backend").join("internal").join("handlers");

    let result = run_audit(&config_for(&root));
    match result {
        Err(AuditError::RootNotFound(path)) => assert_eq!(path, root),
        other => panic!("Expected RootNotFound, got {:?}", other),
    }
}

#[test]
fn test_root_that_is_a_file_is_a_setup_failure() -> TestResult {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("handlers.go");
    fs::write(&root, "package handlers\n")?;

    assert!(matches!(
        run_audit(&config_for(&root)),
        Err(AuditError::RootNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_root_without_matching_files() -> TestResult {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("README.md"), "# handlers\n")?;
    fs::create_dir(temp_dir.path().join("nested"))?;
    fs::write(temp_dir.path().join("nested").join("deep.go"), "package nested\n")?;

    let outcome = run_audit(&config_for(temp_dir.path()))?;
    assert_eq!(
        outcome,
        AuditOutcome::NoFiles {
            root: temp_dir.path().to_path_buf()
        }
    );
    Ok(())
}

#[test]
fn test_fixture_directory() -> TestResult {
    let outcome = run_audit(&config_for(&fixture_root()))?;
    let report = match outcome {
        AuditOutcome::Completed(report) => report,
        other => panic!("Expected a completed audit, got {:?}", other),
    };

    // notes.txt and nested/ are not scanned
    assert_eq!(report.files_checked(), 2);

    let findings: Vec<(&str, u32, &str)> = report
        .findings()
        .iter()
        .map(|f| (file_name(&f.file), f.line, f.rule_id.as_str()))
        .collect();
    assert_eq!(
        findings,
        vec![
            ("video.go", 24, "adhoc-error-map"),
            ("video.go", 18, "unchecked-not-found"),
        ]
    );

    let summary = report.summary();
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.warnings, 1);
    assert_eq!(report.verdict(), Verdict::Fail);
    Ok(())
}

#[test]
fn test_warnings_only_pass_with_warnings() -> TestResult {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("audit.go"),
        r#"package handlers

func (h *AuditHandler) List(c *gin.Context) {
	h.log.Error("list failed", zap.Error(err), zap.String("error_code", "AUDIT_LIST_FAILED"))
	c.JSON(http.StatusInternalServerError, models.ErrorResponse{Code: "AUDIT_LIST_FAILED"})
}
"#,
    )?;

    let outcome = run_audit(&config_for(temp_dir.path()))?;
    let AuditOutcome::Completed(report) = outcome else {
        panic!("Expected a completed audit");
    };

    assert_eq!(report.findings().len(), 1);
    assert_eq!(report.findings()[0].rule_id.as_str(), "log-missing-request-id");
    assert_eq!(report.verdict(), Verdict::PassWithWarnings);
    assert!(!report.verdict().is_failure());
    Ok(())
}

#[test]
fn test_unreadable_file_is_reported_and_scan_continues() -> TestResult {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("a_binary.go"), [0xff, 0xfe, 0x00, 0xc3])?;
    fs::write(
        temp_dir.path().join("b_chat.go"),
        "func F(c *gin.Context) {\n\tc.JSON(http.StatusBadRequest, gin.H{\"error\": \"bad\"})\n}\n",
    )?;

    let outcome = run_audit(&config_for(temp_dir.path()))?;
    let AuditOutcome::Completed(report) = outcome else {
        panic!("Expected a completed audit");
    };

    assert_eq!(report.files_checked(), 2);
    let findings = report.findings();
    assert_eq!(findings.len(), 2);

    assert_eq!(findings[0].rule_id.as_str(), UNREADABLE_FILE_RULE);
    assert_eq!(file_name(&findings[0].file), "a_binary.go");
    assert_eq!(findings[0].line, 0);
    assert_eq!(findings[0].severity, Severity::Error);
    assert!(findings[0].message.starts_with("cannot read file"));

    assert_eq!(findings[1].rule_id.as_str(), "adhoc-error-map");
    assert_eq!(file_name(&findings[1].file), "b_chat.go");
    assert_eq!(report.verdict(), Verdict::Fail);
    Ok(())
}

#[test]
fn test_files_are_scanned_in_name_order() -> TestResult {
    let temp_dir = TempDir::new()?;
    let adhoc = "func F(c *gin.Context) {\n\tc.JSON(http.StatusBadRequest, gin.H{\"error\": \"bad\"})\n}\n";
    for name in ["zeta.go", "alpha.go", "mid.go"] {
        fs::write(temp_dir.path().join(name), adhoc)?;
    }

    let AuditOutcome::Completed(report) = run_audit(&config_for(temp_dir.path()))? else {
        panic!("Expected a completed audit");
    };

    let names: Vec<&str> = report.findings().iter().map(|f| file_name(&f.file)).collect();
    assert_eq!(names, vec!["alpha.go", "mid.go", "zeta.go"]);
    Ok(())
}

#[test]
fn test_custom_include_patterns() -> TestResult {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("handler.go"), "package handlers\n")?;
    fs::write(
        temp_dir.path().join("handler.go.tmpl"),
        "c.JSON(http.StatusBadRequest, gin.H{\"error\": \"bad\"})\n",
    )?;

    let config = assert_ok!(Config::parse(&format!(
        "[audit]\nroot = {:?}\ninclude = [\"*.go.tmpl\"]\n",
        temp_dir.path().display().to_string()
    )));

    let AuditOutcome::Completed(report) = run_audit(&config)? else {
        panic!("Expected a completed audit");
    };
    assert_eq!(report.files_checked(), 1);
    assert_eq!(report.summary().errors, 1);
    Ok(())
}

#[test]
fn test_explicit_rule_set() -> TestResult {
    let config = config_for(&fixture_root());
    let AuditOutcome::Completed(report) = run_audit_with(&config, RuleSet::new())? else {
        panic!("Expected a completed audit");
    };

    assert_eq!(report.files_checked(), 2);
    assert!(report.findings().is_empty());
    assert_eq!(report.verdict(), Verdict::Pass);
    Ok(())
}

#[test]
fn test_unknown_rule_in_config_is_a_setup_failure() -> TestResult {
    let mut config = Config::parse("[rules]\nno-such-rule = false\n")?;
    config.audit.root = fixture_root();

    assert!(matches!(run_audit(&config), Err(AuditError::Rule(_))));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_handlers_are_scanned() -> TestResult {
    let temp_dir = TempDir::new()?;
    let shared = TempDir::new()?;
    let target = shared.path().join("video.go");
    fs::write(
        &target,
        "func F(c *gin.Context) {\n\tc.JSON(http.StatusBadRequest, gin.H{\"error\": \"bad\"})\n}\n",
    )?;
    std::os::unix::fs::symlink(&target, temp_dir.path().join("video.go"))?;
    std::os::unix::fs::symlink(
        temp_dir.path().join("deleted.go"),
        temp_dir.path().join("stale.go"),
    )?;

    let AuditOutcome::Completed(report) = run_audit(&config_for(temp_dir.path()))? else {
        panic!("Expected a completed audit");
    };

    assert_eq!(report.files_checked(), 2);
    let findings: Vec<(&str, &str)> = report
        .findings()
        .iter()
        .map(|f| (file_name(&f.file), f.rule_id.as_str()))
        .collect();
    assert_eq!(
        findings,
        vec![
            ("stale.go", UNREADABLE_FILE_RULE),
            ("video.go", "adhoc-error-map"),
        ]
    );
    assert_eq!(report.verdict(), Verdict::Fail);
    Ok(())
}
