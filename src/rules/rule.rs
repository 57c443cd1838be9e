#![forbid(unsafe_code)]

//! Core Rule trait and the Finding record rules produce

use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single issue detected by a rule
///
/// Findings are created by rules during a scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// ID of the rule that produced this finding
    pub rule_id: RuleId,

    /// File the finding was detected in
    pub file: PathBuf,

    /// Line number (1-indexed); 0 means the finding applies to the whole file
    pub line: u32,

    /// Severity of the finding
    pub severity: Severity,

    /// Human-readable message describing the issue
    pub message: String,
}

impl Finding {
    /// Creates a finding anchored at a line of `source`
    pub fn at_line(
        rule_id: &RuleId,
        source: &SourceFile,
        line: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.clone(),
            file: source.path().to_path_buf(),
            line: u32::try_from(line).unwrap_or(u32::MAX),
            severity,
            message: message.into(),
        }
    }

    /// Creates a file-level finding (line 0)
    pub fn file_level(
        rule_id: &RuleId,
        file: &Path,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.clone(),
            file: file.to_path_buf(),
            line: 0,
            severity,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Trait that all rules must implement
///
/// A rule scans a [`SourceFile`] forward, line by line, and reports findings
/// in the order their triggering lines occur. Rules hold no mutable state, so
/// one instance can be reused across files.
pub trait Rule: Send + Sync {
    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Returns the severity level of findings from this rule
    fn severity(&self) -> Severity;

    /// Executes the rule against one file
    ///
    /// Returns an empty vector if nothing is found.
    fn execute(&self, source: &SourceFile) -> Vec<Finding>;
}
