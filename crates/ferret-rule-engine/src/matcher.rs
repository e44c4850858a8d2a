//! Compiled rule matchers
//!
//! Each rule's patterns are compiled once into a single case-insensitive
//! `RegexSet`, so testing a line costs one pass regardless of how many
//! patterns the rule lists.

use crate::constants::{
    MAX_EXAMPLES_PER_FINDING, MAX_LINE_CHARS, MAX_REGEX_LENGTH, REGEX_DFA_SIZE_LIMIT,
    REGEX_SIZE_LIMIT,
};
use crate::{ErrorRule, Result, RuleError};
use ferret_core::{truncate_chars, Finding, LineMatch};
use regex::{RegexSet, RegexSetBuilder};

/// Compile a rule's patterns with size limits
///
/// - Pattern length limit (500 chars)
/// - Compiled regex size limit (10MB)
/// - DFA size limit (2MB)
fn compile_pattern_set(rule: &ErrorRule) -> Result<RegexSet> {
    if rule.patterns.is_empty() {
        return Err(RuleError::InvalidRule {
            id: rule.id.clone(),
            reason: "rule has no patterns".to_string(),
        });
    }

    if let Some(pattern) = rule.patterns.iter().find(|p| p.len() > MAX_REGEX_LENGTH) {
        return Err(RuleError::InvalidPattern(format!(
            "Pattern in rule '{}' exceeds maximum length of {} characters ({} chars)",
            rule.id,
            MAX_REGEX_LENGTH,
            pattern.len()
        )));
    }

    RegexSetBuilder::new(&rule.patterns)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| RuleError::InvalidPattern(format!("rule '{}': {}", rule.id, e)))
}

/// A rule compiled for fast line matching
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: ErrorRule,
    patterns: RegexSet,
}

impl CompiledRule {
    /// Compile an ErrorRule into an executable form
    pub fn compile(rule: ErrorRule) -> Result<Self> {
        if rule.id.trim().is_empty() {
            return Err(RuleError::InvalidRule {
                id: rule.id.clone(),
                reason: "rule id must not be empty".to_string(),
            });
        }
        let patterns = compile_pattern_set(&rule)?;
        Ok(Self { rule, patterns })
    }

    pub fn rule(&self) -> &ErrorRule {
        &self.rule
    }

    /// True if any of the rule's patterns matches the line
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.is_match(line)
    }

    /// Match the rule against every line, counting each line at most once.
    ///
    /// Returns `None` when no line matched.
    pub fn find(&self, lines: &[&str]) -> Option<Finding> {
        let mut match_count = 0;
        let mut examples = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            if !self.matches(line) {
                continue;
            }
            match_count += 1;
            if examples.len() < MAX_EXAMPLES_PER_FINDING {
                examples.push(LineMatch {
                    line_number: idx + 1,
                    content: truncate_chars(line.trim(), MAX_LINE_CHARS).to_string(),
                });
            }
        }

        if match_count == 0 {
            return None;
        }

        Some(Finding {
            rule_id: self.rule.id.clone(),
            category: self.rule.category.clone(),
            severity: self.rule.severity,
            match_count,
            examples,
            fixes: self.rule.fixes.clone(),
        })
    }
}
