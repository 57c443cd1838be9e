//! List command implementation
//!
//! Shows every builtin rule with its effective severity, whether the
//! configuration enables it, and what it checks.

use crate::cli::common::{EXIT_FAILURE, EXIT_SUCCESS, load_config};
use crate::config::{Config, OutputFormat};
use crate::error::{AuditError, RuleError};
use crate::rules::RuleSet;
use crate::rules::builtin::BUILTIN_RULES;
use crate::types::{RuleId, Severity};
use serde::Serialize;
use std::path::Path;

/// One row of the rule listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleListing {
    pub id: String,
    pub severity: Severity,
    pub enabled: bool,
    pub description: String,
}

/// Run the list command
///
/// Returns the process exit code.
pub fn run_list(config_path: Option<&Path>, format: Option<OutputFormat>) -> i32 {
    match run_list_inner(config_path, format) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn run_list_inner(
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<String, AuditError> {
    let config = load_config(config_path)?;
    let listings = list_rules(&config)?;
    Ok(format_listings(
        &listings,
        format.unwrap_or(config.output.format),
    ))
}

/// Collect the builtin rules as configured
///
/// # Errors
///
/// Returns `RuleError::NotFound` if the configuration names an unknown rule.
pub fn list_rules(config: &Config) -> Result<Vec<RuleListing>, RuleError> {
    // Surfaces unknown rule ids the same way `check` does
    RuleSet::from_config(&config.rules)?;

    BUILTIN_RULES
        .iter()
        .map(|builtin| -> Result<RuleListing, RuleError> {
            let id = RuleId::from_static(builtin.id);
            let rule = builtin.build(config.rules.severity(&id))?;
            Ok(RuleListing {
                id: builtin.id.to_string(),
                severity: rule.severity(),
                enabled: config.rules.is_enabled(&id),
                description: rule.description().to_string(),
            })
        })
        .collect()
}

/// Render listings in the requested format
pub fn format_listings(listings: &[RuleListing], format: OutputFormat) -> String {
    let mut output = String::new();
    match format {
        OutputFormat::Human => {
            let width = listings.iter().map(|l| l.id.len()).max().unwrap_or(0);
            for listing in listings {
                let state = if listing.enabled { "" } else { " (disabled)" };
                output.push_str(&format!(
                    "{:<width$}  {:<7}  {}{}\n",
                    listing.id,
                    listing.severity.as_str(),
                    listing.description,
                    state,
                    width = width
                ));
            }
        }
        OutputFormat::Jsonl => {
            for listing in listings {
                if let Ok(json) = serde_json::to_string(listing) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }
    }
    output
}
