//! Ferret Rule Engine - TOML-based error signature catalogs
//!
//! This crate recognizes known failure signatures in log text. Rules are
//! data, not code: adding a signature means adding a TOML table, never
//! touching the matching logic.
//!
//! # Architecture
//!
//! - **Deploy catalog**: regex rules with category, severity and fixes,
//!   driving [`LogClassifier`]
//! - **Build output catalog**: plain substring signatures, driving
//!   [`OutputClassifier`]
//! - **Multi-source loading**: built-in catalogs + user rule files via
//!   [`RuleLoader`]
//!
//! # Example
//!
//! ```toml
//! # ci/deploy-rules.toml
//! [[rules]]
//! id = "prisma_client"
//! category = "Prisma"
//! severity = "high"
//! patterns = ["PrismaClientInitializationError"]
//! fixes = ["Run `prisma generate` as part of the build command"]
//! ```

pub mod built_in;
pub mod constants;
pub mod engine;
pub mod loader;
pub mod matcher;
pub mod output;
pub mod toml_rule;

// Re-export core types
pub use built_in::{load_built_in_rules, load_built_in_signatures};
pub use constants::*;
pub use engine::{summarize, LogClassifier, NO_FINDINGS_SUMMARY};
pub use loader::RuleLoader;
pub use matcher::CompiledRule;
pub use output::OutputClassifier;
pub use toml_rule::{
    CatalogMetadata, ErrorRule, ErrorRuleFile, OutputSignature, OutputSignatureFile,
};

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for rule engine
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid rule '{id}': {reason}")]
    InvalidRule { id: String, reason: String },

    #[error("Failed to load rules from {path}")]
    LoadError {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Rule file {path} is {size} bytes, max allowed is {max_allowed}")]
    FileTooLarge {
        path: String,
        size: u64,
        max_allowed: u64,
    },

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
