//! Ferret CLI - diagnostics for web-project deployments.

mod commands;
mod formatters;
mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ferret")]
#[command(
    version,
    about = "Triage deployment logs, probe local builds and report on codebases",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (-v debug, -vv trace); logs go to stderr
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a deployment log against known error signatures
    ///
    /// Examples:
    ///   ferret logs build.log
    ///   vercel logs my-app | ferret logs
    Logs(commands::logs::LogsArgs),

    /// Run the project's build locally and triage its output
    Build(commands::build::BuildArgs),

    /// Summarize a codebase as JSON
    Scan(commands::scan::ScanArgs),

    /// Render a markdown report of a codebase
    Report(commands::report::ReportArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Human,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let outcome = match cli.command {
        Command::Logs(args) => commands::logs::run(args, config),
        Command::Build(args) => commands::build::run(args, config),
        Command::Scan(args) => commands::scan::run(args, config),
        Command::Report(args) => commands::report::run(args, config),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
