#![forbid(unsafe_code)]

//! End-to-end audit of a scan root
//!
//! Ties the pieces together: check the root exists, discover files, run the
//! rule set and aggregate. Setup failures are returned as [`AuditError`];
//! policy failures are a [`Verdict::Fail`](crate::engine::Verdict::Fail)
//! inside a completed report. The caller decides how both map to exit codes.

use crate::config::Config;
use crate::engine::aggregator::AuditReport;
use crate::engine::executor::ExecutionEngine;
use crate::engine::file_walker::discover_files;
use crate::error::AuditError;
use crate::rules::RuleSet;
use std::path::PathBuf;

/// Outcome of an audit that got past setup
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    /// The root exists but holds no matching file
    NoFiles { root: PathBuf },
    /// Files were scanned
    Completed(AuditReport),
}

/// Audit the root described by `config` with its configured rule set
///
/// # Errors
///
/// Returns `AuditError::RootNotFound` if the scan root does not exist, or a
/// rule/walker error if the run cannot be set up.
pub fn run_audit(config: &Config) -> Result<AuditOutcome, AuditError> {
    let rules = RuleSet::from_config(&config.rules)?;
    run_audit_with(config, rules)
}

/// Audit the root described by `config` with an explicit rule set
pub fn run_audit_with(config: &Config, rules: RuleSet) -> Result<AuditOutcome, AuditError> {
    let root = &config.audit.root;
    if !root.is_dir() {
        return Err(AuditError::RootNotFound(root.clone()));
    }

    let files = discover_files(root, &config.audit.include)?;
    if files.is_empty() {
        tracing::info!(root = %root.display(), "no matching files");
        return Ok(AuditOutcome::NoFiles { root: root.clone() });
    }

    tracing::info!(
        files = files.len(),
        rules = rules.len(),
        root = %root.display(),
        "scanning"
    );

    let result = ExecutionEngine::new(rules).execute(&files);
    tracing::debug!(findings = result.findings.len(), "scan finished");

    Ok(AuditOutcome::Completed(AuditReport::new(
        result.findings,
        result.files_checked,
    )))
}
