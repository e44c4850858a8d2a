use crate::commands::scan::scan_options;
use crate::formatters::markdown::{render_markdown, ReportInput};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use ferret_scan::Scanner;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Project root
    path: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append the directory structure
    #[arg(long)]
    tree: bool,
}

pub fn run(args: ReportArgs, config: Option<&Path>) -> Result<ExitCode> {
    if !args.path.exists() {
        eprintln!("Error: Path not found: {}", args.path.display());
        return Ok(ExitCode::FAILURE);
    }

    let config = super::load_config(&args.path, config)?;
    let settings = &config.config().scan;
    let options = scan_options(settings, None);

    let scanner = Scanner::open(&args.path, settings.follow_symlinks)
        .with_context(|| format!("Cannot scan {}", args.path.display()))?;
    let summary = scanner.summary(&options);
    let config_files = scanner.config_files();
    let tree = args.tree.then(|| scanner.tree(options.max_depth));

    let project_name = scanner
        .root()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| scanner.root().display().to_string());

    let markdown = render_markdown(&ReportInput {
        project_name: &project_name,
        path: scanner.root(),
        generated_at: Local::now().naive_local(),
        summary: &summary,
        config_files: &config_files,
        tree: tree.as_ref(),
    });

    match args.output {
        Some(output) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&output, &markdown)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(path = %output.display(), bytes = markdown.len(), "report written");
            println!("Report saved to: {}", output.display());
        }
        None => println!("{markdown}"),
    }
    Ok(ExitCode::SUCCESS)
}
