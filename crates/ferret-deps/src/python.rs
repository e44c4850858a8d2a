//! requirements.txt parser

/// Manifest file name
pub const REQUIREMENTS_TXT: &str = "requirements.txt";

/// Extract package names from `requirements.txt` content.
///
/// Blank lines and `#` comment lines are skipped. Each remaining line is
/// cut at the first `==`, then at the first `>=`, then at an inline ` #`
/// comment, and trimmed. Lines that end up empty are dropped.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = cut(cut(cut(line, "=="), ">="), " #").trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

fn cut<'a>(line: &'a str, marker: &str) -> &'a str {
    line.split_once(marker).map_or(line, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_version_specifiers_are_stripped() {
        let content = "flask==3.0.0\nrequests>=2.0\n\n# dev tools\npytest\n";
        assert_eq!(parse_requirements(content), vec!["flask", "requests", "pytest"]);
    }

    #[test]
    fn test_inline_comment_is_stripped() {
        assert_eq!(
            parse_requirements("requests>=2.0  # comment-free"),
            vec!["requests"]
        );
        assert_eq!(parse_requirements("httpx  # pinned later"), vec!["httpx"]);
    }

    #[test]
    fn test_indented_comments_and_empty_names_dropped() {
        assert!(parse_requirements("   # indented comment\n==1.0\n   \n").is_empty());
    }

    #[test]
    fn test_other_specifiers_are_kept_verbatim() {
        assert_eq!(parse_requirements("django~=4.2"), vec!["django~=4.2"]);
    }

    proptest! {
        #[test]
        fn prop_names_are_trimmed_and_non_empty(content in "[a-z=># \n]{0,200}") {
            for name in parse_requirements(&content) {
                prop_assert!(!name.is_empty());
                prop_assert_eq!(name.trim(), name.as_str());
                prop_assert!(!name.contains("=="));
            }
        }
    }
}
