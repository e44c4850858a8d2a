//! package.json parser

use crate::{Error, Result};
use ferret_core::NpmDependencies;
use serde_json::{Map, Value};
use std::path::Path;

/// Manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Extract dependency names from `package.json` content, keeping the
/// order in which they are declared.
///
/// A missing or `null` section is empty. Any other non-object section, or a
/// non-object document, is an [`Error::InvalidFormat`].
pub fn parse_package_json(path: &Path, content: &str) -> Result<NpmDependencies> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(root) = value else {
        return Err(Error::InvalidFormat(
            path.to_path_buf(),
            "expected a JSON object".to_string(),
        ));
    };

    Ok(NpmDependencies {
        dependencies: section_keys(path, &root, "dependencies")?,
        dev_dependencies: section_keys(path, &root, "devDependencies")?,
    })
}

fn section_keys(path: &Path, root: &Map<String, Value>, section: &str) -> Result<Vec<String>> {
    match root.get(section) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(deps)) => Ok(deps.keys().cloned().collect()),
        Some(_) => Err(Error::InvalidFormat(
            path.to_path_buf(),
            format!("`{section}` must be an object"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<NpmDependencies> {
        parse_package_json(Path::new("package.json"), content)
    }

    #[test]
    fn test_declared_order_is_kept() {
        let deps = parse(
            r#"{
                "name": "site",
                "dependencies": { "react": "^18", "next": "14.1.0", "clsx": "*" },
                "devDependencies": { "typescript": "^5", "eslint": "^8" }
            }"#,
        )
        .unwrap();
        assert_eq!(deps.dependencies, vec!["react", "next", "clsx"]);
        assert_eq!(deps.dev_dependencies, vec!["typescript", "eslint"]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let deps = parse(r#"{ "name": "bare", "devDependencies": null }"#).unwrap();
        assert!(deps.dependencies.is_empty());
        assert!(deps.dev_dependencies.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse("{ \"name\": "), Err(Error::Json(_))));
    }

    #[test]
    fn test_wrong_shapes() {
        assert!(matches!(parse("[]"), Err(Error::InvalidFormat(..))));
        assert!(matches!(
            parse(r#"{ "dependencies": ["react"] }"#),
            Err(Error::InvalidFormat(..))
        ));
    }
}
