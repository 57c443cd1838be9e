#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. All finding records, in discovery order
//! 2. One status record

use crate::engine::{AuditReport, Verdict};
use crate::rules::Finding;
use crate::types::Severity;
use serde::Serialize;
use std::path::Path;

/// JSONL output formatter
#[derive(Debug, Default)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a completed scan as JSONL
    pub fn format(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        for finding in report.findings() {
            push_record(&mut output, &FindingRecord::from(finding));
        }

        let summary = report.summary();
        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                verdict: report.verdict(),
                files_checked: report.files_checked(),
                errors: summary.errors,
                warnings: summary.warnings,
                total: summary.total,
            },
        );

        output
    }

    /// Format the outcome of a root without matching files
    pub fn format_no_files(&self, root: &Path) -> String {
        let mut output = String::new();
        push_record(
            &mut output,
            &NoFilesRecord {
                record_type: "no_files",
                root: root.display().to_string(),
            },
        );
        output.push_str(&self.format(&AuditReport::default()));
        output
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: &'a str,
    file: String,
    line: u32,
    severity: Severity,
    message: &'a str,
}

impl<'a> From<&'a Finding> for FindingRecord<'a> {
    fn from(finding: &'a Finding) -> Self {
        Self {
            record_type: "finding",
            rule: finding.rule_id.as_str(),
            file: finding.file.display().to_string(),
            line: finding.line,
            severity: finding.severity,
            message: &finding.message,
        }
    }
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    verdict: Verdict,
    files_checked: usize,
    errors: usize,
    warnings: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
struct NoFilesRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    root: String,
}
