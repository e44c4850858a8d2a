use crate::formatters::json;
use anyhow::{Context, Result};
use clap::Args;
use ferret_config::ScanSettings;
use ferret_scan::{ScanOptions, Scanner};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Project root
    path: PathBuf,

    /// Max depth to scan (default from config, else 4)
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    /// Include the full directory structure
    #[arg(long)]
    json: bool,
}

/// Scan options from config, with `--depth` bounding both the walk and
/// the extension count.
pub(crate) fn scan_options(settings: &ScanSettings, depth: Option<usize>) -> ScanOptions {
    match depth {
        Some(depth) => ScanOptions {
            max_depth: depth,
            extension_depth: None,
            include_structure: false,
        },
        None => ScanOptions {
            max_depth: settings.max_depth,
            extension_depth: settings.extension_depth,
            include_structure: false,
        },
    }
}

pub fn run(args: ScanArgs, config: Option<&Path>) -> Result<ExitCode> {
    if !args.path.exists() {
        json::print(&json!({ "error": format!("Path not found: {}", args.path.display()) }))?;
        return Ok(ExitCode::FAILURE);
    }

    let config = super::load_config(&args.path, config)?;
    let settings = &config.config().scan;
    let options = ScanOptions {
        include_structure: args.json,
        ..scan_options(settings, args.depth)
    };

    let scanner = Scanner::open(&args.path, settings.follow_symlinks)
        .with_context(|| format!("Cannot scan {}", args.path.display()))?;
    json::print(&scanner.scan(&options))?;
    Ok(ExitCode::SUCCESS)
}
