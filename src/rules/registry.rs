#![forbid(unsafe_code)]

//! Ordered rule set applied to every file
//!
//! The RuleSet is responsible for:
//! - Instantiating the builtin rules in catalog order
//! - Dropping rules disabled in configuration and applying severity overrides
//! - Rejecting configuration entries that name no builtin rule

use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::rules::Rule;
use crate::rules::builtin::{BUILTIN_RULES, find_builtin};
use crate::types::RuleId;

/// Ordered collection of rules
///
/// Rules run in insertion order; the order is part of the report contract.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create a new empty RuleSet
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// All builtin rules at their default severities
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if a builtin pattern fails to compile.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_config(&RulesConfig::default())
    }

    /// Build the rule set described by configuration
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if the configuration names an unknown rule,
    /// or `RuleError::InvalidRegex` if a builtin pattern fails to compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleError> {
        let mut unknown: Vec<&str> = config
            .rules
            .keys()
            .map(RuleId::as_str)
            .filter(|id| find_builtin(id).is_none())
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(RuleError::NotFound(unknown.join(", ")));
        }

        let mut set = Self::new();
        for builtin in BUILTIN_RULES {
            let id = RuleId::from_static(builtin.id);
            if !config.is_enabled(&id) {
                tracing::debug!(rule = builtin.id, "rule disabled by configuration");
                continue;
            }
            set.push(builtin.build(config.severity(&id))?);
        }
        Ok(set)
    }

    /// Append a rule; it runs after all rules already present
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get a rule by its ID
    pub fn get_rule(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == id)
            .map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in execution order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.id().as_str()))
            .finish()
    }
}
