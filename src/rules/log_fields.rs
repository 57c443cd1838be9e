#![forbid(unsafe_code)]

//! Detects error logs at failing responses that lack structured fields
//!
//! Both rules share the same trigger, an error-level zap call
//! (`h.log.Error(`, `s.log.Error(` or `log.Error(`), and the same six-line
//! window. They differ in the field they require and in which response
//! statuses make that field mandatory, and run independently of each other.

use crate::error::RuleError;
use crate::rules::patterns::compile;
use crate::rules::{Finding, Rule};
use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use regex::Regex;

const WINDOW_SPAN: usize = 6;

const ERROR_LOG_PATTERN: &str = r"h\.log\.Error\(|s\.log\.Error\(|log\.Error\(";

/// A structured log field and the statuses that require it
#[derive(Debug)]
struct RequiredField {
    id: &'static str,
    description: &'static str,
    spellings: &'static [&'static str],
    statuses: &'static [&'static str],
    message: &'static str,
}

static ERROR_CODE_FIELD: RequiredField = RequiredField {
    id: LogFieldRule::ERROR_CODE_ID,
    description: "Error logs at 500/404 responses must carry an error_code field",
    spellings: &["error_code", "ErrorCode"],
    statuses: &["StatusInternalServerError", "StatusNotFound"],
    message: "error log should include an error_code field (zap.String(\"error_code\", ...))",
};

static REQUEST_ID_FIELD: RequiredField = RequiredField {
    id: LogFieldRule::REQUEST_ID_ID,
    description: "Error logs at 500/404/400 responses must carry a request_id field",
    spellings: &["request_id", "RequestID"],
    statuses: &[
        "StatusInternalServerError",
        "StatusNotFound",
        "StatusBadRequest",
    ],
    message: "error log should include a request_id field",
};

#[derive(Debug)]
pub struct LogFieldRule {
    id: RuleId,
    severity: Severity,
    trigger: Regex,
    field: &'static RequiredField,
}

impl LogFieldRule {
    pub const ERROR_CODE_ID: &'static str = "log-missing-error-code";
    pub const REQUEST_ID_ID: &'static str = "log-missing-request-id";

    /// Rule requiring `error_code` / `ErrorCode`
    pub fn error_code(severity: Severity) -> Result<Self, RuleError> {
        Self::with_field(&ERROR_CODE_FIELD, severity)
    }

    /// Rule requiring `request_id` / `RequestID`
    pub fn request_id(severity: Severity) -> Result<Self, RuleError> {
        Self::with_field(&REQUEST_ID_FIELD, severity)
    }

    fn with_field(field: &'static RequiredField, severity: Severity) -> Result<Self, RuleError> {
        Ok(Self {
            id: RuleId::from_static(field.id),
            severity,
            trigger: compile(ERROR_LOG_PATTERN)?,
            field,
        })
    }
}

impl Rule for LogFieldRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        self.field.description
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn execute(&self, source: &SourceFile) -> Vec<Finding> {
        source
            .lines()
            .filter(|line| self.trigger.is_match(line.text))
            .filter(|line| {
                let window = source.window(line.number, WINDOW_SPAN);
                !window.contains_any(self.field.spellings)
                    && window.contains_any(self.field.statuses)
            })
            .map(|line| {
                Finding::at_line(&self.id, source, line.number, self.severity, self.field.message)
            })
            .collect()
    }
}
