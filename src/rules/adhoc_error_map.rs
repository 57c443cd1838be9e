#![forbid(unsafe_code)]

//! Detects error responses built from an ad-hoc `gin.H` map
//!
//! Any line mentioning one of the error statuses opens a six-line window. If
//! that window builds a `gin.H` map rather than a `models.ErrorResponse` and
//! mentions an error, the response bypasses the standardized envelope. A
//! `gin.H` without any error-ish token is treated as a legitimate payload.

use crate::error::RuleError;
use crate::rules::patterns::{ADHOC_MAP, ERROR_RESPONSE_TYPE, ERROR_STATUS, compile};
use crate::rules::{Finding, Rule};
use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use regex::Regex;

const WINDOW_SPAN: usize = 6;

const MESSAGE: &str = "ad-hoc error map (gin.H) used instead of the standardized error-response type (models.ErrorResponse)";

#[derive(Debug)]
pub struct AdhocErrorMapRule {
    id: RuleId,
    severity: Severity,
    trigger: Regex,
}

impl AdhocErrorMapRule {
    pub const ID: &'static str = "adhoc-error-map";

    pub fn new(severity: Severity) -> Result<Self, RuleError> {
        Ok(Self {
            id: RuleId::from_static(Self::ID),
            severity,
            trigger: compile(ERROR_STATUS)?,
        })
    }
}

impl Rule for AdhocErrorMapRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Error-status responses must use models.ErrorResponse instead of gin.H"
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
                let adhoc = window.contains(ADHOC_MAP) && !window.contains(ERROR_RESPONSE_TYPE);
                let mentions_error = window.contains_ignore_case("error")
                    || window.contains_any(&["\"error\"", "'error'"]);
                adhoc && mentions_error
            })
            .map(|line| Finding::at_line(&self.id, source, line.number, self.severity, MESSAGE))
            .collect()
    }
}
