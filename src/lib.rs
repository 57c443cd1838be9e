#![forbid(unsafe_code)]

//! api-error-lint: heuristic audit of HTTP handlers against API error conventions
//!
//! Scans the Go files of a handler directory line by line and reports
//! responses and logs that stray from the standardized error envelope. The
//! checks are textual: each rule matches a trigger line and inspects a small
//! window of the lines that follow it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod source;
pub mod types;

// Re-export error types for convenient access
pub use error::{AuditError, ConfigError, RuleError};

// Re-export core domain types for convenient access
pub use engine::{AuditOutcome, AuditReport, Summary, Verdict, run_audit, run_audit_with};
pub use rules::{Finding, Rule, RuleSet};
pub use source::SourceFile;
pub use types::{GlobPattern, RuleId, Severity};
