//! TOML rule definitions and types
//!
//! This module defines the structure of rules as they appear in TOML files.

use ferret_core::Severity;
use serde::{Deserialize, Serialize};

/// A complete TOML rule file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorRuleFile {
    /// Catalog metadata (optional)
    #[serde(default)]
    pub catalog: Option<CatalogMetadata>,

    /// Rules in evaluation order
    #[serde(default)]
    pub rules: Vec<ErrorRule>,
}

/// Catalog metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogMetadata {
    /// Catalog name (e.g., "deploy-errors")
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Version of this rule file
    #[serde(default)]
    pub version: Option<String>,
}

/// One known failure signature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorRule {
    /// Unique key; a later rule with the same id replaces an earlier one
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Human label shown in findings (e.g., "TypeScript")
    pub category: String,

    pub severity: Severity,

    /// Regular expressions, matched case-insensitively against each line
    pub patterns: Vec<String>,

    /// Remediation suggestions, shown in authored order
    #[serde(default)]
    pub fixes: Vec<String>,
}

/// A TOML file of build output signatures
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSignatureFile {
    #[serde(default)]
    pub signatures: Vec<OutputSignature>,
}

/// A plain-substring signature recognized in build output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSignature {
    /// Reported as the error `type`
    pub id: String,

    /// Case-sensitive substring to look for
    pub needle: String,

    pub description: String,
}
