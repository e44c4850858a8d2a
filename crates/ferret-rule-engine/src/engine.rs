//! Log classifier - applies compiled rules to log text
//!
//! This is the main execution engine: it splits a log body into lines,
//! runs every rule over every line and ranks the resulting findings.

use crate::{load_built_in_rules, CompiledRule, ErrorRule, Result};
use ferret_core::{AnalysisResult, Finding, Severity};
use tracing::debug;

/// Summary used when no rule matched.
pub const NO_FINDINGS_SUMMARY: &str = "No known error patterns detected. Review logs manually.";

/// Classifies log text against an ordered rule catalog
#[derive(Debug, Clone)]
pub struct LogClassifier {
    rules: Vec<CompiledRule>,
}

impl LogClassifier {
    /// Create a classifier from rules in catalog order
    pub fn new(rules: Vec<ErrorRule>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;
        debug!(rules = rules.len(), "compiled log classifier");
        Ok(Self { rules })
    }

    /// Classifier over the embedded deployment catalog
    pub fn built_in() -> Result<Self> {
        Self::new(load_built_in_rules()?)
    }

    /// Rules in catalog order
    pub fn rules(&self) -> impl Iterator<Item = &ErrorRule> {
        self.rules.iter().map(CompiledRule::rule)
    }

    /// Classify a log body.
    ///
    /// Lines are the pieces of `text.split('\n')`, so an empty string is one
    /// (empty) line and a trailing newline adds a trailing empty line.
    pub fn classify(&self, text: &str) -> AnalysisResult {
        let lines: Vec<&str> = text.split('\n').collect();

        let mut findings: Vec<Finding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.find(&lines))
            .collect();

        // Stable: equal severities keep catalog order
        findings.sort_by_key(|finding| finding.severity.rank());

        debug!(
            lines = lines.len(),
            findings = findings.len(),
            "classified log text"
        );

        AnalysisResult {
            total_lines: lines.len(),
            issues_found: findings.len(),
            summary: summarize(&findings),
            findings,
        }
    }
}

/// One-line, human-readable digest of ranked findings
pub fn summarize(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return NO_FINDINGS_SUMMARY.to_string();
    }

    let categories = |severity: Severity| -> Vec<&str> {
        findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.category.as_str())
            .collect()
    };
    let critical = categories(Severity::Critical);
    let high = categories(Severity::High);

    let mut parts = Vec::new();
    if !critical.is_empty() {
        parts.push(format!(
            "🔴 {} critical issue(s): {}",
            critical.len(),
            critical.join(", ")
        ));
    }
    if !high.is_empty() {
        parts.push(format!(
            "🟠 {} high severity issue(s): {}",
            high.len(),
            high.join(", ")
        ));
    }

    if parts.is_empty() {
        format!("Found {} issue(s) of lower severity", findings.len())
    } else {
        parts.join(" | ")
    }
}
