//! Built-in catalogs embedded in the binary
//!
//! Both catalogs are embedded at compile time via `include_str!()` so the
//! classifiers work with zero configuration.

use crate::{ErrorRule, ErrorRuleFile, OutputSignature, OutputSignatureFile, Result};

/// Deployment log failure signatures (TypeScript, ESLint, missing modules...)
pub const DEPLOY_ERRORS: &str = include_str!("built_in/deploy_errors.toml");

/// Build output signatures used by the build probe
pub const BUILD_OUTPUT: &str = include_str!("built_in/build_output.toml");

/// Load the built-in deployment rules in catalog order
///
/// # Example
///
/// ```no_run
/// use ferret_rule_engine::load_built_in_rules;
///
/// let rules = load_built_in_rules().expect("Failed to load built-in rules");
/// assert_eq!(rules.len(), 6);
/// ```
pub fn load_built_in_rules() -> Result<Vec<ErrorRule>> {
    let file: ErrorRuleFile = toml::from_str(DEPLOY_ERRORS)?;
    Ok(file.rules)
}

/// Load the built-in build output signatures in priority order
pub fn load_built_in_signatures() -> Result<Vec<OutputSignature>> {
    let file: OutputSignatureFile = toml::from_str(BUILD_OUTPUT)?;
    Ok(file.signatures)
}
