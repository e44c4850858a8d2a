//! Human-readable terminal output.

use colored::*;
use ferret_core::{AnalysisResult, BuildResult, Severity};
use std::fmt::Write;

fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.as_str().to_uppercase();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.yellow().bold(),
        Severity::Medium => label.yellow(),
        Severity::Low | Severity::Unknown => label.dimmed(),
    }
}

pub fn print_analysis(result: &AnalysisResult) {
    print!("{}", render_analysis(result));
}

pub fn print_build(result: &BuildResult) {
    print!("{}", render_build(result));
}

// Writes to a String are infallible.

pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "Deployment Log Analysis".bold());
    let _ = writeln!(out, "=======================\n");
    let _ = writeln!(out, "  Lines analyzed: {}", result.total_lines);
    let _ = writeln!(out, "  Issues found: {}\n", result.issues_found);

    for finding in &result.findings {
        let _ = writeln!(
            out,
            "[{}] {} ({} line(s))",
            severity_label(finding.severity),
            finding.category.bold(),
            finding.match_count
        );
        for example in &finding.examples {
            let _ = writeln!(out, "  {:>5} | {}", example.line_number, example.content);
        }
        if finding.match_count > finding.examples.len() {
            let _ = writeln!(
                out,
                "        ... and {} more",
                finding.match_count - finding.examples.len()
            );
        }
        if !finding.fixes.is_empty() {
            let _ = writeln!(out, "  {}", "Suggested fixes:".cyan());
            for fix in &finding.fixes {
                let _ = writeln!(out, "    💡 {fix}");
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", result.summary);
    out
}

pub fn render_build(result: &BuildResult) -> String {
    let mut out = String::new();
    let status = if result.success {
        "✓ Build succeeded".green().bold()
    } else {
        "✗ Build failed".red().bold()
    };
    let _ = writeln!(out, "\n{status} ({})", result.project_type);

    if let Some(message) = &result.message {
        let _ = writeln!(out, "  {message}");
    }
    if let Some(code) = result.returncode {
        let _ = writeln!(out, "  Exit code: {code}");
    }
    if let Some(ms) = result.duration_ms {
        let _ = writeln!(out, "  Duration: {ms}ms");
    }

    if !result.errors.is_empty() {
        let _ = writeln!(out, "\n{} ({}):", "Errors".bold(), result.errors.len());
        for error in &result.errors {
            let detail = error
                .description
                .as_deref()
                .or(error.message.as_deref())
                .unwrap_or_default();
            let _ = writeln!(out, "  {} {}", error.kind.red(), detail);
            if let Some(line) = &error.line {
                let _ = writeln!(out, "      {}", line.dimmed());
            }
        }
    }

    if !result.success {
        if let Some(stderr) = result.stderr.as_deref().filter(|s| !s.trim().is_empty()) {
            let _ = writeln!(out, "\n{}", "stderr (tail):".bold());
            let _ = writeln!(out, "{stderr}");
        }
    }
    out
}
