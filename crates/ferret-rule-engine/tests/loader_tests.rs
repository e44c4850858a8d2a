//! User rule files layered over the built-in catalog

use ferret_core::Severity;
use ferret_rule_engine::{RuleError, RuleLoader, MAX_TOML_FILE_SIZE};
use std::fs;
use tempfile::TempDir;

const PRISMA_RULES: &str = r#"
[catalog]
name = "team-rules"

[[rules]]
id = "prisma_client"
category = "Prisma"
severity = "high"
patterns = ["PrismaClientInitializationError"]
fixes = ["Run `prisma generate` as part of the build command"]

[[rules]]
id = "memory"
category = "Memory"
severity = "low"
patterns = ["heap out of memory"]
fixes = ["Ignore, the retry succeeds"]
"#;

#[test]
fn test_load_file_appends_and_overrides() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team.toml");
    fs::write(&path, PRISMA_RULES).unwrap();

    let mut loader = RuleLoader::with_built_in().unwrap();
    loader.load_file(&path).unwrap();

    let ids: Vec<&str> = loader.rules().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "typescript_strict",
            "eslint",
            "module_not_found",
            "out_directory",
            "env_missing",
            "memory",
            "prisma_client"
        ]
    );

    let classifier = loader.build().unwrap();
    let result = classifier.classify(
        "JavaScript heap out of memory\nPrismaClientInitializationError: cannot connect",
    );
    let ids: Vec<&str> = result.findings.iter().map(|f| f.rule_id.as_str()).collect();
    assert_eq!(ids, vec!["prisma_client", "memory"]);
    assert_eq!(result.findings[1].severity, Severity::Low);
}

#[test]
fn test_load_directory_in_name_order() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("b.toml"),
        r#"
[[rules]]
id = "shared"
category = "From B"
severity = "medium"
patterns = ["shared"]
"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("a.toml"),
        r#"
[[rules]]
id = "shared"
category = "From A"
severity = "medium"
patterns = ["shared"]
"#,
    )
    .unwrap();
    fs::write(temp.path().join("notes.txt"), "not a rule file").unwrap();

    let mut loader = RuleLoader::empty();
    loader.load_directory(temp.path()).unwrap();

    assert_eq!(loader.rules().len(), 1);
    assert_eq!(loader.rules()[0].category, "From B");
}

#[test]
fn test_missing_file_is_load_error() {
    let temp = TempDir::new().unwrap();
    let mut loader = RuleLoader::empty();
    let err = loader.load_file(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RuleError::LoadError { .. }));
}

#[test]
fn test_malformed_toml_is_load_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[[rules]\nid = ").unwrap();

    let err = RuleLoader::empty().load_file(&path).map(|_| ()).unwrap_err();
    assert!(matches!(err, RuleError::LoadError { .. }));
    assert!(err.to_string().contains("broken.toml"));
    // The parser message is the source, not repeated in the top-level text
    assert!(!err.to_string().contains("TOML parse error"));
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("TOML parse error"));
}

#[test]
fn test_oversized_file_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("huge.toml");
    fs::write(&path, "#".repeat(MAX_TOML_FILE_SIZE as usize + 1)).unwrap();

    let err = RuleLoader::empty().load_file(&path).map(|_| ()).unwrap_err();
    assert!(matches!(err, RuleError::FileTooLarge { .. }));
}

#[test]
fn test_invalid_pattern_fails_at_build() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(
        &path,
        r#"
[[rules]]
id = "bad"
category = "Bad"
severity = "high"
patterns = ["(unclosed"]
"#,
    )
    .unwrap();

    let mut loader = RuleLoader::empty();
    loader.load_file(&path).unwrap();
    assert!(matches!(loader.build(), Err(RuleError::InvalidPattern(_))));
}

#[test]
fn test_unknown_severity_sorts_last() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("odd.toml");
    fs::write(
        &path,
        r#"
[[rules]]
id = "odd"
category = "Odd"
severity = "blocker"
patterns = ["odd"]
"#,
    )
    .unwrap();

    let mut loader = RuleLoader::with_built_in().unwrap();
    loader.load_file(&path).unwrap();
    let result = loader
        .build()
        .unwrap()
        .classify("odd thing\nESLint found 1 error");

    assert_eq!(result.findings.len(), 2);
    assert_eq!(result.findings[1].severity, Severity::Unknown);
}
