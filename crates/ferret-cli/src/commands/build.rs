use crate::formatters::{human, json};
use crate::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use ferret_probe::{BuildCommand, BuildProbe, ProbeOptions};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root
    path: PathBuf,

    /// Build timeout in seconds (default from config, else 300)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn run(args: BuildArgs, config: Option<&Path>) -> Result<ExitCode> {
    if !args.path.exists() {
        json::print(&json!({
            "success": false,
            "message": format!("Path not found: {}", args.path.display()),
        }))?;
        return Ok(ExitCode::FAILURE);
    }

    let config = super::load_config(&args.path, config)?;
    let settings = &config.config().build;
    let options = ProbeOptions {
        timeout: Duration::from_secs(args.timeout.unwrap_or(settings.timeout_secs)),
        command: settings.command.as_deref().and_then(BuildCommand::from_argv),
    };
    let probe = BuildProbe::new(options).context("Invalid build output signatures")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let result = runtime.block_on(probe.probe_dir(&args.path))?;

    match args.format {
        OutputFormat::Json => json::print(&result)?,
        OutputFormat::Human => human::print_build(&result),
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
