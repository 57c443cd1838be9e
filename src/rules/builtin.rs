#![forbid(unsafe_code)]

//! Built-in rules compiled into the binary
//!
//! The catalog order is the order rules run in, and therefore the order
//! their findings appear in for each file.

use crate::error::RuleError;
use crate::rules::{
    AdhocErrorMapRule, LogFieldRule, MissingErrorCodeRule, Rule, UncheckedNotFoundRule,
};
use crate::types::Severity;

type Builder = fn(Severity) -> Result<Box<dyn Rule>, RuleError>;

/// A builtin rule with its default severity
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub id: &'static str,
    pub default_severity: Severity,
    build: Builder,
}

impl BuiltinRule {
    /// Instantiates the rule, using `severity` when given
    pub fn build(&self, severity: Option<Severity>) -> Result<Box<dyn Rule>, RuleError> {
        (self.build)(severity.unwrap_or(self.default_severity))
    }
}

/// All builtin rules, in execution order
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        id: AdhocErrorMapRule::ID,
        default_severity: Severity::Error,
        build: build_adhoc_error_map,
    },
    BuiltinRule {
        id: MissingErrorCodeRule::ID,
        default_severity: Severity::Error,
        build: build_missing_error_code,
    },
    BuiltinRule {
        id: UncheckedNotFoundRule::ID,
        default_severity: Severity::Warning,
        build: build_unchecked_not_found,
    },
    BuiltinRule {
        id: LogFieldRule::ERROR_CODE_ID,
        default_severity: Severity::Warning,
        build: build_log_error_code,
    },
    BuiltinRule {
        id: LogFieldRule::REQUEST_ID_ID,
        default_severity: Severity::Warning,
        build: build_log_request_id,
    },
];

/// Looks up a builtin rule by id
pub fn find_builtin(id: &str) -> Option<&'static BuiltinRule> {
    BUILTIN_RULES.iter().find(|rule| rule.id == id)
}

fn build_adhoc_error_map(severity: Severity) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(AdhocErrorMapRule::new(severity)?))
}

fn build_missing_error_code(severity: Severity) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(MissingErrorCodeRule::new(severity)?))
}

fn build_unchecked_not_found(severity: Severity) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(UncheckedNotFoundRule::new(severity)?))
}

fn build_log_error_code(severity: Severity) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(LogFieldRule::error_code(severity)?))
}

fn build_log_request_id(severity: Severity) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(LogFieldRule::request_id(severity)?))
}
