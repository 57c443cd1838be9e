//! Configuration file parsing and validation

pub mod lint_toml;

pub use lint_toml::{
    AuditSettings, CONFIG_FILE_NAME, ColorOption, Config, DEFAULT_ROOT, OutputConfig,
    OutputFormat, RuleSettings, RuleValue, RulesConfig,
};
