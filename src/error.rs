//! Error types for api-error-lint
//!
//! This module defines the error types used throughout the linter, following
//! a hierarchical structure with specific error variants for different
//! error categories. Read failures of individual source files are not errors
//! at this level: they are recovered as findings by the execution engine.

use crate::engine::file_walker::FileWalkerError;
use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),
}

/// Top-level error type for an audit run
///
/// Every variant is a setup failure: it aborts the run before any file is
/// scanned.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The scan root does not exist
    #[error("Scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// File discovery error
    #[error("File walker error: {0}")]
    FileWalker(#[from] FileWalkerError),
}
