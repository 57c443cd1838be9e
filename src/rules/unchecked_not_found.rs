#![forbid(unsafe_code)]

//! Detects database lookups whose not-found case is not mapped to a 404
//!
//! A lookup line (`.First(..)`, `.Find(..)`, `.GetByID(..)`, `.GetBy*(..)`)
//! is followed up to 20 lines for its `if err != nil` / `if err :=` guard.
//! The 15 lines starting at the guard form its body:
//!
//! - a body that recognizes the gorm sentinel and answers 404 must use a
//!   specific not-found error code;
//! - a missing guard, or a body that never recognizes the sentinel, is
//!   reported when the file uses gorm at all.

use crate::error::RuleError;
use crate::rules::patterns::compile;
use crate::rules::{Finding, Rule};
use crate::source::SourceFile;
use crate::types::{RuleId, Severity};
use regex::Regex;
use std::collections::BTreeSet;

/// Lines after the lookup searched for the guard
const GUARD_SEARCH_SPAN: usize = 20;

/// Lines, starting at the guard, treated as its body
const GUARD_BODY_SPAN: usize = 15;

const QUERY_PATTERN: &str =
    r"\.First\([^)]+\)|\.Find\([^)]+\)|\.GetByID\([^)]+\)|\.GetBy[^(]+\([^)]+\)";

const GUARDS: &[&str] = &["if err != nil", "if err :="];

const NOT_FOUND_IDIOMS: &[&str] = &["ErrRecordNotFound", "errors.Is"];

const NOT_FOUND_CODES: &[&str] = &["ANALYSIS_NOT_FOUND", "INSIGHT_NOT_FOUND", "NOT_FOUND"];

const GORM_MARKERS: &[&str] = &["gorm.io/gorm", "gorm.ErrRecordNotFound"];

const GENERIC_404_MESSAGE: &str =
    "404 response should use a specific not-found error code (e.g. ANALYSIS_NOT_FOUND, INSIGHT_NOT_FOUND)";

const UNCHECKED_MESSAGE: &str = "database query result should be checked against the record-not-found sentinel (gorm.ErrRecordNotFound) and mapped to a 404";

#[derive(Debug)]
pub struct UncheckedNotFoundRule {
    id: RuleId,
    severity: Severity,
    trigger: Regex,
}

impl UncheckedNotFoundRule {
    pub const ID: &'static str = "unchecked-not-found";

    pub fn new(severity: Severity) -> Result<Self, RuleError> {
        Ok(Self {
            id: RuleId::from_static(Self::ID),
            severity,
            trigger: compile(QUERY_PATTERN)?,
        })
    }

    /// Finds the first error guard in the lines following `query_line`
    fn find_guard(source: &SourceFile, query_line: usize) -> Option<usize> {
        source
            .lines_from(query_line + 1, GUARD_SEARCH_SPAN)
            .find(|line| GUARDS.iter().any(|guard| line.text.contains(guard)))
            .map(|line| line.number)
    }
}

impl Rule for UncheckedNotFoundRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Database lookups must map gorm.ErrRecordNotFound to a 404 with a specific error code"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn execute(&self, source: &SourceFile) -> Vec<Finding> {
        let uses_gorm = GORM_MARKERS.iter().any(|marker| source.contains(marker));
        let mut reported_guards = BTreeSet::new();
        let mut findings = Vec::new();

        for line in source.lines().filter(|line| self.trigger.is_match(line.text)) {
            let handled = match Self::find_guard(source, line.number) {
                Some(guard) => {
                    let body = source.window(guard, GUARD_BODY_SPAN);
                    let recognizes = body.contains_any(NOT_FOUND_IDIOMS);
                    if recognizes
                        && body.contains("StatusNotFound")
                        && !body.contains_any(NOT_FOUND_CODES)
                        && reported_guards.insert(guard)
                    {
                        findings.push(Finding::at_line(
                            &self.id,
                            source,
                            guard,
                            self.severity,
                            GENERIC_404_MESSAGE,
                        ));
                    }
                    recognizes
                }
                None => false,
            };

            if !handled && uses_gorm {
                findings.push(Finding::at_line(
                    &self.id,
                    source,
                    line.number,
                    self.severity,
                    UNCHECKED_MESSAGE,
                ));
            }
        }

        // Guard findings sit after their lookup; keep the output line-ordered.
        findings.sort_by_key(|finding| finding.line);
        findings
    }
}
