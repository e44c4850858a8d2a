//! Core data types for ferret diagnostics.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Sentinel extension label for files without an extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Urgency bucket of an error rule.
///
/// Ordering follows the rank: critical sorts first. Severities read from a
/// rule file that are not one of the four known buckets become `Unknown`
/// and sort after `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Sort rank (critical = 0, unknown = 4).
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Unknown => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matched log line kept as an example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based line number in the analyzed text.
    pub line_number: usize,
    /// Trimmed line content, clipped to 200 characters.
    pub content: String,
}

/// A matched error rule with bounded examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Id of the rule that produced this finding.
    #[serde(rename = "type")]
    pub rule_id: String,
    pub category: String,
    pub severity: Severity,
    /// Number of distinct lines that matched (always >= 1).
    #[serde(rename = "count")]
    pub match_count: usize,
    /// At most five example lines, in line order.
    #[serde(rename = "matches")]
    pub examples: Vec<LineMatch>,
    /// Remediation suggestions in authored order.
    #[serde(rename = "suggested_fixes")]
    pub fixes: Vec<String>,
}

/// Result of classifying one log body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_lines: usize,
    pub issues_found: usize,
    pub findings: Vec<Finding>,
    pub summary: String,
}

/// Kind of a scanned filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Recursive description of a scanned directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ScanNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Set when the depth bound stopped the walk at this directory.
    #[serde(default, skip_serializing_if = "is_false")]
    pub truncated: bool,
    /// Set when listing this directory failed; children are partial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ScanNode {
    pub fn file(name: impl Into<String>, size: u64, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: None,
            size: Some(size),
            extension: Some(extension.into()),
            truncated: false,
            error: None,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<ScanNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children: Some(children),
            size: None,
            extension: None,
            truncated: false,
            error: None,
        }
    }

    /// A directory beyond the depth bound: no children are listed.
    pub fn truncated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children: None,
            size: None,
            extension: None,
            truncated: true,
            error: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Children of a directory node (empty for files and truncated nodes).
    pub fn children(&self) -> &[ScanNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Extension -> file count, ordered by descending count.
///
/// Serialized as a JSON object whose key order is the count order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionCounts(Vec<(String, usize)>);

impl ExtensionCounts {
    /// Sort `(extension, count)` pairs descending by count; ties keep the
    /// order in which the extensions were first seen.
    pub fn from_first_seen(mut counts: Vec<(String, usize)>) -> Self {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self(counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(ext, count)| (ext.as_str(), *count))
    }

    pub fn get(&self, extension: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(ext, _)| ext == extension)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ExtensionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (ext, count) in &self.0 {
            map.serialize_entry(ext, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtensionCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = ExtensionCounts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of extension to file count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((ext, count)) = access.next_entry::<String, usize>()? {
                    counts.push((ext, count));
                }
                Ok(ExtensionCounts(counts))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Declared npm dependency names, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpmDependencies {
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
}

/// Dependencies declared by a project's manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<NpmDependencies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<Vec<String>>,
}

impl Dependencies {
    /// True when no manifest contributed anything.
    pub fn is_empty(&self) -> bool {
        self.npm.is_none() && self.python.is_none()
    }
}

/// Project or tooling type inferred from indicator files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Nextjs,
    Vite,
    Nuxt,
    Angular,
    Vue,
    Python,
    Rust,
    Go,
    Php,
    Ruby,
    Node,
    Static,
    Unknown,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Nextjs => "nextjs",
            ProjectType::Vite => "vite",
            ProjectType::Nuxt => "nuxt",
            ProjectType::Angular => "angular",
            ProjectType::Vue => "vue",
            ProjectType::Python => "python",
            ProjectType::Rust => "rust",
            ProjectType::Go => "go",
            ProjectType::Php => "php",
            ProjectType::Ruby => "ruby",
            ProjectType::Node => "node",
            ProjectType::Static => "static",
            ProjectType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate facts about a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Detected types, `[unknown]` when nothing matched.
    pub project_types: Vec<ProjectType>,
    /// Conventional entry files that exist, relative to the root.
    pub entry_points: Vec<String>,
    pub file_counts: ExtensionCounts,
    pub dependencies: Dependencies,
}

/// Output of a codebase scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Absolute path of the scanned root.
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: ScanSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<ScanNode>,
}

/// One problem reported by the build probe.
///
/// Probe-level failures carry a `message`; lines recognized in the build
/// output carry a `description` and the offending `line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl BuildError {
    /// Failure of the probe itself (missing deps, timeout, launch error).
    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: Some(message.into()),
            description: None,
            line: None,
        }
    }

    /// A known signature recognized in the build output.
    pub fn signature(
        kind: impl Into<String>,
        description: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: None,
            description: Some(description.into()),
            line: Some(line.into()),
        }
    }
}

/// Outcome of a build probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    pub success: bool,
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Exit code of a build that ran to completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returncode: Option<i32>,
    pub errors: Vec<BuildError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl BuildResult {
    /// A result for a probe that never started a process.
    pub fn without_run(
        success: bool,
        project_type: ProjectType,
        message: impl Into<String>,
        errors: Vec<BuildError>,
    ) -> Self {
        Self {
            success,
            project_type,
            message: Some(message.into()),
            returncode: None,
            errors,
            stdout: None,
            stderr: None,
            duration_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        let mut all = vec![
            Severity::Unknown,
            Severity::Low,
            Severity::Critical,
            Severity::Medium,
            Severity::High,
        ];
        all.sort_by_key(|s| s.rank());
        assert_eq!(
            all,
            vec![
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Unknown
            ]
        );
    }

    #[test]
    fn test_unrecognized_severity_deserializes_as_unknown() {
        let sev: Severity = serde_json::from_str("\"blocker\"").unwrap();
        assert_eq!(sev, Severity::Unknown);
        let sev: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(sev, Severity::High);
    }

    #[test]
    fn test_extension_counts_sort_is_stable() {
        let counts = ExtensionCounts::from_first_seen(vec![
            (".md".to_string(), 1),
            (".ts".to_string(), 3),
            (".css".to_string(), 1),
            (".tsx".to_string(), 3),
        ]);
        let order: Vec<&str> = counts.iter().map(|(ext, _)| ext).collect();
        assert_eq!(order, vec![".ts", ".tsx", ".md", ".css"]);
    }

    #[test]
    fn test_extension_counts_serialize_as_ordered_object() {
        let counts = ExtensionCounts::from_first_seen(vec![
            (".b".to_string(), 1),
            (".a".to_string(), 2),
        ]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{".a":2,".b":1}"#);

        let back: ExtensionCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }

    #[test]
    fn test_scan_node_serialization_shape() {
        let tree = ScanNode::directory(
            "app",
            vec![ScanNode::truncated("deep"), ScanNode::file("a.TS", 4, ".ts")],
        );
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["type"], "directory");
        assert_eq!(value["children"][0]["truncated"], true);
        assert!(value["children"][0].get("children").is_none());
        assert_eq!(value["children"][1]["size"], 4);
        assert!(value.get("truncated").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_build_error_shapes() {
        let failure = BuildError::failure("timeout", "Build process timed out");
        let failure = serde_json::to_value(failure).unwrap();
        assert_eq!(failure["type"], "timeout");
        assert!(failure.get("line").is_none());

        let sig = BuildError::signature("syntax", "Syntax error", "SyntaxError: x");
        let sig = serde_json::to_value(sig).unwrap();
        assert_eq!(sig["description"], "Syntax error");
        assert!(sig.get("message").is_none());
    }

    #[test]
    fn test_scan_report_flattens_summary() {
        let report = ScanReport {
            path: PathBuf::from("/tmp/site"),
            summary: ScanSummary {
                project_types: vec![ProjectType::Unknown],
                entry_points: vec![],
                file_counts: ExtensionCounts::default(),
                dependencies: Dependencies::default(),
            },
            structure: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["project_types"][0], "unknown");
        assert_eq!(value["dependencies"], serde_json::json!({}));
        assert!(value.get("structure").is_none());
    }
}
