use crate::formatters::{human, json};
use crate::{Cli, OutputFormat};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory};
use ferret_rule_engine::{LogClassifier, RuleLoader};
use serde_json::json;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Log file to analyze; `-` or piped input reads stdin
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Extra rule file or directory (can be specified multiple times)
    #[arg(long = "rules", value_name = "FILE")]
    rules: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

pub fn run(args: LogsArgs, config: Option<&Path>) -> Result<ExitCode> {
    let text = match args.input.as_deref() {
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => {
            if !path.is_file() {
                json::print(&json!({ "error": format!("File not found: {}", path.display()) }))?;
                return Ok(ExitCode::FAILURE);
            }
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None if io::stdin().is_terminal() => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "no log file given and stdin is a terminal; pass a PATH or pipe a log in",
            )
            .exit(),
        None => read_stdin()?,
    };

    let classifier = match load_classifier(config, &args.rules) {
        Ok(classifier) => classifier,
        Err(err) => {
            json::print(&json!({ "error": format!("{err:#}") }))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = classifier.classify(&text);
    debug!(lines = result.total_lines, issues = result.issues_found, "log classified");

    match args.format {
        OutputFormat::Json => json::print(&result)?,
        OutputFormat::Human => human::print_analysis(&result),
    }
    Ok(ExitCode::SUCCESS)
}

/// Built-in rules, then configured rule paths, then `--rules`
fn load_classifier(config: Option<&Path>, extra: &[PathBuf]) -> Result<LogClassifier> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = super::load_config(&cwd, config)?;

    let mut loader = RuleLoader::with_built_in()?;
    for path in config.rule_paths(&cwd).iter().chain(extra) {
        if path.is_dir() {
            loader.load_directory(path)?;
        } else {
            loader.load_file(path)?;
        }
    }
    loader.build().context("Invalid rule catalog")
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
