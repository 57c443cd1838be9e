#![forbid(unsafe_code)]

//! Detects `models.ErrorResponse` values sent without a `Code` field
//!
//! The trigger only matches a `c.JSON(http.Status..., models.ErrorResponse{`
//! call written on one line. A constructor whose arguments start on the
//! following lines is not recognized.

use crate::error::RuleError;
use crate::rules::patterns::{ERROR_STATUS, compile};
use crate::rules::{Finding, Rule};
use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use regex::Regex;

const WINDOW_SPAN: usize = 11;

const MESSAGE: &str =
    "standardized error response missing a machine-readable code field (Code)";

#[derive(Debug)]
pub struct MissingErrorCodeRule {
    id: RuleId,
    severity: Severity,
    trigger: Regex,
}

impl MissingErrorCodeRule {
    pub const ID: &'static str = "error-response-missing-code";

    pub fn new(severity: Severity) -> Result<Self, RuleError> {
        let pattern = format!(r"c\.JSON\({ERROR_STATUS},?\s*models\.ErrorResponse\s*\{{");
        Ok(Self {
            id: RuleId::from_static(Self::ID),
            severity,
            trigger: compile(&pattern)?,
        })
    }
}

impl Rule for MissingErrorCodeRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "models.ErrorResponse values must set a machine-readable Code"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn execute(&self, source: &SourceFile) -> Vec<Finding> {
        source
            .lines()
            .filter(|line| self.trigger.is_match(line.text))
            .filter(|line| {
                // "Code" also covers the "Code:" field form
                !source.window(line.number, WINDOW_SPAN).contains("Code")
            })
            .map(|line| Finding::at_line(&self.id, source, line.number, self.severity, MESSAGE))
            .collect()
    }
}
