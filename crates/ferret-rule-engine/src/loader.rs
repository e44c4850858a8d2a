//! Multi-source rule loading
//!
//! Rules are layered: the built-in catalog first, then user rule files in
//! the order they are loaded. A later rule with an existing id replaces the
//! earlier one in place, so catalog order stays stable; new ids append.

use crate::constants::MAX_TOML_FILE_SIZE;
use crate::{load_built_in_rules, ErrorRule, ErrorRuleFile, LogClassifier, Result, RuleError};
use ferret_fs::{native::NativeFileSystem, FileSystem};
use std::path::Path;
use tracing::{debug, info};

/// Accumulates rules from multiple sources
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    rules: Vec<ErrorRule>,
}

impl RuleLoader {
    /// Start from an empty rule set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start from the built-in deployment catalog
    pub fn with_built_in() -> Result<Self> {
        let mut loader = Self::empty();
        loader.merge(load_built_in_rules()?);
        Ok(loader)
    }

    /// Load one TOML rule file and merge its rules
    pub fn load_file(&mut self, path: &Path) -> Result<&mut Self> {
        let rules = read_rule_file(path)?;
        info!(path = %path.display(), rules = rules.len(), "loaded rule file");
        self.merge(rules);
        Ok(self)
    }

    /// Load every `*.toml` file directly inside `dir`, sorted by file name
    pub fn load_directory(&mut self, dir: &Path) -> Result<&mut Self> {
        let fs = NativeFileSystem::new(dir).map_err(|e| load_error(dir, e))?;
        let mut entries: Vec<_> = fs
            .read_dir(fs.project_root())
            .map_err(|e| load_error(dir, e))?
            .into_iter()
            .filter(|entry| entry.metadata.is_file && entry.name.ends_with(".toml"))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        for entry in entries {
            self.load_file(&entry.path)?;
        }
        Ok(self)
    }

    /// Merge rules: same id replaces in place, otherwise append
    pub fn merge(&mut self, rules: impl IntoIterator<Item = ErrorRule>) {
        for rule in rules {
            match self.rules.iter_mut().find(|existing| existing.id == rule.id) {
                Some(existing) => {
                    debug!(id = %rule.id, "overriding rule");
                    *existing = rule;
                }
                None => self.rules.push(rule),
            }
        }
    }

    pub fn rules(&self) -> &[ErrorRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<ErrorRule> {
        self.rules
    }

    /// Compile the accumulated rules into a classifier
    pub fn build(self) -> Result<LogClassifier> {
        LogClassifier::new(self.rules)
    }
}

fn load_error(path: &Path, source: impl std::error::Error + Send + Sync + 'static) -> RuleError {
    RuleError::LoadError {
        path: path.display().to_string(),
        source: Box::new(source),
    }
}

/// Read and parse a rule file through a filesystem scoped to its parent
fn read_rule_file(path: &Path) -> Result<Vec<ErrorRule>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let fs = NativeFileSystem::new(parent).map_err(|e| load_error(path, e))?;
    let file_name = path.file_name().map(Path::new).unwrap_or(path);

    let metadata = fs.metadata(file_name).map_err(|e| load_error(path, e))?;
    if !metadata.exists || !metadata.is_file {
        return Err(load_error(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "rule file not found"),
        ));
    }
    if metadata.size > MAX_TOML_FILE_SIZE {
        return Err(RuleError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.size,
            max_allowed: MAX_TOML_FILE_SIZE,
        });
    }

    let content = fs.read_to_string(file_name).map_err(|e| load_error(path, e))?;
    let file: ErrorRuleFile = toml::from_str(&content).map_err(|e| load_error(path, e))?;
    Ok(file.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferret_core::Severity;

    fn rule(id: &str, severity: Severity) -> ErrorRule {
        ErrorRule {
            id: id.to_string(),
            description: None,
            category: id.to_uppercase(),
            severity,
            patterns: vec![id.to_string()],
            fixes: vec![],
        }
    }

    #[test]
    fn test_merge_replaces_in_place() {
        let mut loader = RuleLoader::empty();
        loader.merge(vec![rule("a", Severity::Low), rule("b", Severity::Low)]);
        loader.merge(vec![rule("a", Severity::Critical), rule("c", Severity::High)]);

        let ids: Vec<&str> = loader.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(loader.rules()[0].severity, Severity::Critical);
    }

    #[test]
    fn test_with_built_in_has_catalog() {
        let loader = RuleLoader::with_built_in().unwrap();
        assert_eq!(loader.rules().len(), 6);
    }
}
