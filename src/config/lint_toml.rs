//! Parsing and validation for api-error-lint.toml configuration files
//!
//! Every section is optional. An absent file, or an empty one, yields the
//! conventional setup: scan `backend/internal/handlers` for `*.go` files with
//! every builtin rule at its default severity.

use crate::error::ConfigError;
use crate::types::{GlobPattern, RuleId, Severity};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "api-error-lint.toml";

/// Conventional directory holding the HTTP handlers
pub const DEFAULT_ROOT: &str = "backend/internal/handlers";

/// Main configuration struct for api-error-lint.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub audit: AuditSettings,

    /// Rule configuration
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.audit.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.audit.version
            )));
        }

        if self.audit.include.is_empty() {
            return Err(ConfigError::Validation(
                "No include patterns configured. Nothing would be scanned.".to_string(),
            ));
        }

        // Validate glob patterns by attempting to compile them with globset
        for pattern in &self.audit.include {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid include glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

/// Scan settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory whose files are scanned (not recursive)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File name patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            root: default_root(),
            include: default_include(),
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("*.go")]
}

/// Rules configuration section, keyed by rule id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulesConfig {
    pub rules: HashMap<RuleId, RuleValue>,
}

impl RulesConfig {
    /// Whether the rule is enabled; rules are enabled unless set to `false`
    pub fn is_enabled(&self, id: &RuleId) -> bool {
        match self.rules.get(id) {
            Some(RuleValue::Enabled(enabled)) => *enabled,
            Some(RuleValue::Settings(_)) | None => true,
        }
    }

    /// Severity override for the rule, if one is configured
    pub fn severity(&self, id: &RuleId) -> Option<Severity> {
        match self.rules.get(id) {
            Some(RuleValue::Settings(settings)) => settings.severity,
            _ => None,
        }
    }
}

/// A rule can be enabled with a boolean or configured with settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Simple boolean enable/disable
    Enabled(bool),
    /// Settings table for the rule
    Settings(RuleSettings),
}

/// Settings for individual rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Severity level for this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Output configuration section
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
