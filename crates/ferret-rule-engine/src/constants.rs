//! Limits for rule compilation and classification output
//!
//! Rule files come from users, so their size and pattern complexity are
//! bounded. Classification output is bounded so a noisy log cannot blow up
//! the report payload.

/// Maximum size for TOML rule files (1MB)
pub const MAX_TOML_FILE_SIZE: u64 = 1_048_576; // 1MB

/// Maximum regex pattern length (500 characters)
pub const MAX_REGEX_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB

/// Example lines kept per finding
pub const MAX_EXAMPLES_PER_FINDING: usize = 5;

/// Characters kept from a matched line (no ellipsis is added)
pub const MAX_LINE_CHARS: usize = 200;

/// Entries kept by the build output classifier
pub const MAX_OUTPUT_ERRORS: usize = 20;
