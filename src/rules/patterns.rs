//! Shared pattern fragments for the builtin rules

use crate::error::RuleError;
use regex::Regex;

/// The five HTTP error statuses the handler conventions cover
pub(crate) const ERROR_STATUS: &str =
    r"http\.Status(?:BadRequest|NotFound|InternalServerError|Unauthorized|Forbidden)";

/// Ad-hoc response map construct
pub(crate) const ADHOC_MAP: &str = "gin.H";

/// The standardized error-response type
pub(crate) const ERROR_RESPONSE_TYPE: &str = "models.ErrorResponse";

/// Compiles a builtin pattern, mapping failures to [`RuleError::InvalidRegex`]
pub(crate) fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern)
        .map_err(|e| RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e)))
}
