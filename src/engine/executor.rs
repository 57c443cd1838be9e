#![forbid(unsafe_code)]

//! Sequential execution engine for running rules across files
//!
//! Files are scanned strictly one after another and rules run in rule-set
//! order within each file. A file that cannot be read yields a single
//! file-level error finding; a rule that panics contributes no findings for
//! that file. Neither stops the rest of the run.

use crate::engine::file_walker::FileEntry;
use crate::rules::{Finding, Rule, RuleSet};
use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use std::panic::{self, AssertUnwindSafe};

/// Rule id attached to findings for files that could not be read
pub const UNREADABLE_FILE_RULE: &str = "unreadable-file";

/// Result of executing all rules against all files
#[derive(Debug)]
pub struct ExecutionResult {
    /// All findings, in file discovery order then rule order
    pub findings: Vec<Finding>,
    /// Number of files checked
    pub files_checked: usize,
    /// Number of rules executed per file
    pub rules_executed: usize,
}

/// Execution engine that applies a rule set to files
#[derive(Debug)]
pub struct ExecutionEngine {
    rules: RuleSet,
}

impl ExecutionEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Execute all rules against the discovered files
    pub fn execute(&self, files: &[FileEntry]) -> ExecutionResult {
        let findings = files
            .iter()
            .flat_map(|file| self.execute_file(file))
            .collect();

        ExecutionResult {
            findings,
            files_checked: files.len(),
            rules_executed: self.rules.len(),
        }
    }

    /// Read one file and execute all rules against it
    pub fn execute_file(&self, file: &FileEntry) -> Vec<Finding> {
        match SourceFile::read(&file.path) {
            Ok(source) => self.execute_source(&source),
            Err(e) => {
                tracing::warn!(file = %file.path.display(), error = %e, "failed to read file");
                vec![Finding::file_level(
                    &RuleId::from_static(UNREADABLE_FILE_RULE),
                    &file.path,
                    Severity::Error,
                    format!("cannot read file: {}", e),
                )]
            }
        }
    }

    /// Execute all rules against in-memory source
    pub fn execute_source(&self, source: &SourceFile) -> Vec<Finding> {
        self.rules
            .iter_rules()
            .flat_map(|rule| run_isolated(rule, source))
            .collect()
    }
}

/// Runs one rule, turning a panic into an empty result
fn run_isolated(rule: &dyn Rule, source: &SourceFile) -> Vec<Finding> {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.execute(source))) {
        Ok(findings) => findings,
        Err(_) => {
            tracing::warn!(
                rule = rule.id().as_str(),
                file = %source.path().display(),
                "rule panicked; its findings for this file are dropped"
            );
            Vec::new()
        }
    }
}
