//! Build output classifier
//!
//! A deliberately simpler matcher than [`crate::LogClassifier`]: plain
//! substring needles, first signature wins per line, and a hard cap on the
//! number of entries. Its results are informational; build success is
//! decided by the exit code alone.

use crate::constants::{MAX_LINE_CHARS, MAX_OUTPUT_ERRORS};
use crate::{load_built_in_signatures, OutputSignature, Result, RuleError};
use ferret_core::{truncate_chars, BuildError};

#[derive(Debug, Clone)]
pub struct OutputClassifier {
    signatures: Vec<OutputSignature>,
}

impl OutputClassifier {
    pub fn new(signatures: Vec<OutputSignature>) -> Result<Self> {
        if let Some(sig) = signatures.iter().find(|s| s.needle.is_empty()) {
            return Err(RuleError::InvalidRule {
                id: sig.id.clone(),
                reason: "signature needle must not be empty".to_string(),
            });
        }
        Ok(Self { signatures })
    }

    /// Classifier over the embedded build output signatures
    pub fn built_in() -> Result<Self> {
        Self::new(load_built_in_signatures()?)
    }

    /// Tag output lines with the first matching signature, keeping at
    /// most [`MAX_OUTPUT_ERRORS`] entries.
    pub fn classify(&self, output: &str) -> Vec<BuildError> {
        output
            .split('\n')
            .filter_map(|line| {
                self.signatures
                    .iter()
                    .find(|sig| line.contains(sig.needle.as_str()))
                    .map(|sig| {
                        BuildError::signature(
                            sig.id.as_str(),
                            sig.description.as_str(),
                            truncate_chars(line.trim(), MAX_LINE_CHARS),
                        )
                    })
            })
            .take(MAX_OUTPUT_ERRORS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_signature_wins() {
        let classifier = OutputClassifier::built_in().unwrap();
        // Contains both "error TS" and "TypeError"
        let errors = classifier.classify("src/a.ts(3,1): error TS2345: TypeError-ish");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "typescript");
        assert_eq!(errors[0].description.as_deref(), Some("TypeScript compilation error"));
    }

    #[test]
    fn test_needles_are_case_sensitive() {
        let classifier = OutputClassifier::built_in().unwrap();
        assert!(classifier.classify("syntaxerror: lowercase").is_empty());
        assert_eq!(classifier.classify("SyntaxError: Unexpected token").len(), 1);
    }

    #[test]
    fn test_eslint_needle_needs_two_spaces() {
        let classifier = OutputClassifier::built_in().unwrap();
        assert!(classifier.classify("1:1 error 'x' unused").is_empty());
        let errors = classifier.classify("  1:1  error  'x' is defined but never used");
        assert_eq!(errors[0].kind, "eslint");
    }

    #[test]
    fn test_cap_at_twenty() {
        let classifier = OutputClassifier::built_in().unwrap();
        let output = "TypeError: boom\n".repeat(50);
        assert_eq!(classifier.classify(&output).len(), MAX_OUTPUT_ERRORS);
    }

    #[test]
    fn test_line_is_trimmed() {
        let classifier = OutputClassifier::built_in().unwrap();
        let errors = classifier.classify("   Error: Cannot find module 'next'   ");
        assert_eq!(errors[0].line.as_deref(), Some("Error: Cannot find module 'next'"));
    }

    #[test]
    fn test_empty_needle_rejected() {
        let result = OutputClassifier::new(vec![OutputSignature {
            id: "blank".to_string(),
            needle: String::new(),
            description: "matches everything".to_string(),
        }]);
        assert!(result.is_err());
    }
}
