//! Markdown codebase report.
//!
//! Rendering is a pure function of [`ReportInput`]: the timestamp is passed
//! in, so identical input renders byte-identical output.

use chrono::NaiveDateTime;
use ferret_core::{ScanNode, ScanSummary};
use std::path::Path;

const FILE_SUMMARY_ROWS: usize = 15;
const PRODUCTION_DEPS_SHOWN: usize = 20;
const DEV_DEPS_SHOWN: usize = 10;
const PYTHON_DEPS_SHOWN: usize = 20;

/// Everything the report shows about one project
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub project_name: &'a str,
    pub path: &'a Path,
    pub generated_at: NaiveDateTime,
    pub summary: &'a ScanSummary,
    /// Key configuration files present at the root, in display order
    pub config_files: &'a [String],
    pub tree: Option<&'a ScanNode>,
}

pub fn render_markdown(input: &ReportInput<'_>) -> String {
    let summary = input.summary;
    let project_types = summary
        .project_types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("# Codebase Report: {}", input.project_name),
        String::new(),
        format!("> Generated: {}", input.generated_at.format("%Y-%m-%d %H:%M")),
        String::new(),
        "## Overview".to_string(),
        String::new(),
        format!("- **Path**: `{}`", input.path.display()),
        format!("- **Project Type**: {project_types}"),
        format!("- **Total File Types**: {}", summary.file_counts.len()),
        String::new(),
    ];

    if !summary.entry_points.is_empty() {
        lines.push("## Entry Points".to_string());
        lines.push(String::new());
        lines.extend(summary.entry_points.iter().map(|ep| format!("- `{ep}`")));
        lines.push(String::new());
    }

    lines.push("## File Summary".to_string());
    lines.push(String::new());
    lines.push("| Extension | Count |".to_string());
    lines.push("|-----------|-------|".to_string());
    for (ext, count) in summary.file_counts.iter().take(FILE_SUMMARY_ROWS) {
        lines.push(format!("| {ext} | {count} |"));
    }
    if summary.file_counts.len() > FILE_SUMMARY_ROWS {
        lines.push(format!(
            "| ... | +{} more |",
            summary.file_counts.len() - FILE_SUMMARY_ROWS
        ));
    }
    lines.push(String::new());

    push_dependencies(&mut lines, summary);

    lines.push("## Key Configuration Files".to_string());
    lines.push(String::new());
    if input.config_files.is_empty() {
        lines.push("- No common config files found".to_string());
    } else {
        lines.extend(input.config_files.iter().map(|cf| format!("- `{cf}`")));
    }
    lines.push(String::new());

    if let Some(tree) = input.tree {
        lines.push("## Directory Structure".to_string());
        lines.push(String::new());
        lines.push("```".to_string());
        push_tree(&mut lines, tree, 0);
        lines.push("```".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn code_list(names: &[String], limit: usize) -> String {
    names
        .iter()
        .take(limit)
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_dependencies(lines: &mut Vec<String>, summary: &ScanSummary) {
    let deps = &summary.dependencies;
    let production = deps.npm.as_ref().map_or(&[][..], |npm| &npm.dependencies[..]);
    let dev = deps.npm.as_ref().map_or(&[][..], |npm| &npm.dev_dependencies[..]);
    let python = deps.python.as_deref().unwrap_or_default();

    if production.is_empty() && dev.is_empty() && python.is_empty() {
        return;
    }

    lines.push("## Dependencies".to_string());
    lines.push(String::new());
    if !production.is_empty() {
        lines.push(format!("### Production ({})", production.len()));
        lines.push(String::new());
        lines.push(code_list(production, PRODUCTION_DEPS_SHOWN));
        lines.push(String::new());
    }
    if !dev.is_empty() {
        lines.push(format!("### Dev ({})", dev.len()));
        lines.push(String::new());
        lines.push(code_list(dev, DEV_DEPS_SHOWN));
        lines.push(String::new());
    }
    if !python.is_empty() {
        lines.push("### Python Packages".to_string());
        lines.push(String::new());
        lines.push(code_list(python, PYTHON_DEPS_SHOWN));
        lines.push(String::new());
    }
}

fn push_tree(lines: &mut Vec<String>, node: &ScanNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{}", node.name);
    if node.is_dir() {
        line.push('/');
    }
    if node.truncated {
        line.push_str(" ...");
    }
    if let Some(error) = &node.error {
        line.push_str(&format!(" (error: {error})"));
    }
    lines.push(line);

    for child in node.children() {
        push_tree(lines, child, depth + 1);
    }
}
