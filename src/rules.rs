#![forbid(unsafe_code)]

//! Rule definitions and the rule set

mod adhoc_error_map;
pub mod builtin;
mod log_fields;
mod missing_error_code;
mod patterns;
mod registry;
mod rule;
mod unchecked_not_found;

// Re-export core types
pub use adhoc_error_map::AdhocErrorMapRule;
pub use log_fields::LogFieldRule;
pub use missing_error_code::MissingErrorCodeRule;
pub use registry::RuleSet;
pub use rule::{Finding, Rule};
pub use unchecked_not_found::UncheckedNotFoundRule;
