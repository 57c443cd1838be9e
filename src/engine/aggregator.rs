#![forbid(unsafe_code)]

//! Aggregation of findings into a report and a verdict

use crate::rules::Finding;
use crate::types::Severity;
use serde::Serialize;

/// Overall result of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No findings at all
    Pass,
    /// Only warning findings
    PassWithWarnings,
    /// At least one error finding
    Fail,
}

impl Verdict {
    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

/// Severity bucket counts for summary printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub total: usize,
}

/// All findings of a scan, in discovery order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuditReport {
    findings: Vec<Finding>,
    files_checked: usize,
}

impl AuditReport {
    pub fn new(findings: Vec<Finding>, files_checked: usize) -> Self {
        Self {
            findings,
            files_checked,
        }
    }

    /// All findings in discovery order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Error findings, in discovery order
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    /// Warning findings, in discovery order
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn summary(&self) -> Summary {
        let errors = self.errors().count();
        Summary {
            errors,
            warnings: self.findings.len() - errors,
            total: self.findings.len(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        let summary = self.summary();
        if summary.errors > 0 {
            Verdict::Fail
        } else if summary.warnings > 0 {
            Verdict::PassWithWarnings
        } else {
            Verdict::Pass
        }
    }
}
