//! The build probe

use crate::command::command_for;
use crate::detect::{detect_build_type, is_npm_project};
use crate::exec::{run_with_timeout, CapturedOutput, ExecError};
use crate::BuildCommand;
use ferret_core::{tail_chars, BuildError, BuildResult, Error, ProjectType, Result};
use ferret_fs::{FileSystem, NativeFileSystem};
use ferret_rule_engine::{OutputClassifier, RuleError};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default build timeout (5 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Characters kept from the end of stdout and stderr
pub const MAX_CAPTURED_CHARS: usize = 2000;

pub const STATIC_MESSAGE: &str = "Static project - no build required";
pub const UNKNOWN_MESSAGE: &str = "Unrecognized project - no build command available";
pub const MISSING_DEPS_MESSAGE: &str = "node_modules not found - run 'npm install' first";

#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub timeout: Duration,
    /// Replaces `npm run build`
    pub command: Option<BuildCommand>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            command: None,
        }
    }
}

/// Detects, builds and triages a project
pub struct BuildProbe {
    options: ProbeOptions,
    classifier: OutputClassifier,
}

impl BuildProbe {
    /// Probe with the built-in output signatures
    pub fn new(options: ProbeOptions) -> std::result::Result<Self, RuleError> {
        Ok(Self::with_classifier(options, OutputClassifier::built_in()?))
    }

    pub fn with_classifier(options: ProbeOptions, classifier: OutputClassifier) -> Self {
        Self {
            options,
            classifier,
        }
    }

    /// Probe a directory of the local disk
    ///
    /// # Errors
    ///
    /// Only when `root` cannot be opened; every build outcome, including a
    /// failed launch, is a [`BuildResult`].
    pub async fn probe_dir(&self, root: &Path) -> Result<BuildResult> {
        let fs = NativeFileSystem::new(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::PathNotFound {
                path: root.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        Ok(self.probe(&fs).await)
    }

    /// Probe the project at the root of `fs`
    pub async fn probe<F: FileSystem + ?Sized>(&self, fs: &F) -> BuildResult {
        let project_type = detect_build_type(fs);
        debug!(root = %fs.project_root().display(), %project_type, "detected build type");

        let Some(command) = command_for(project_type, self.options.command.as_ref()) else {
            let message = if project_type == ProjectType::Static {
                STATIC_MESSAGE
            } else {
                UNKNOWN_MESSAGE
            };
            return BuildResult::without_run(true, project_type, message, Vec::new());
        };

        if is_npm_project(project_type) && !has_node_modules(fs) {
            return BuildResult::without_run(
                false,
                project_type,
                MISSING_DEPS_MESSAGE,
                vec![BuildError::failure(
                    "missing_deps",
                    "node_modules directory not found",
                )],
            );
        }

        info!(%command, cwd = %fs.project_root().display(), "running build");
        let started = Instant::now();
        let outcome = run_with_timeout(&command, fs.project_root(), self.options.timeout).await;
        let duration_ms = Some(started.elapsed().as_millis() as u64);

        match outcome {
            Ok(output) => {
                let mut result = self.completed(project_type, output);
                result.duration_ms = duration_ms;
                result
            }
            Err(ExecError::Timeout { limit, partial }) => BuildResult {
                success: false,
                project_type,
                message: Some(format!("Build timed out after {} seconds", limit.as_secs())),
                returncode: None,
                errors: vec![BuildError::failure("timeout", "Build process timed out")],
                stdout: Some(tail_chars(&partial.stdout, MAX_CAPTURED_CHARS).to_string()),
                stderr: Some(tail_chars(&partial.stderr, MAX_CAPTURED_CHARS).to_string()),
                duration_ms,
            },
            Err(e) => {
                let message = e.to_string();
                let mut result = BuildResult::without_run(
                    false,
                    project_type,
                    message.clone(),
                    vec![BuildError::failure("exception", message)],
                );
                result.duration_ms = duration_ms;
                result
            }
        }
    }

    fn completed(&self, project_type: ProjectType, output: CapturedOutput) -> BuildResult {
        let combined = format!("{}{}", output.stderr, output.stdout);
        let errors = self.classifier.classify(&combined);
        debug!(status = ?output.status, recognized = errors.len(), "build finished");

        BuildResult {
            success: output.status == Some(0),
            project_type,
            message: None,
            returncode: output.status,
            errors,
            stdout: Some(tail_chars(&output.stdout, MAX_CAPTURED_CHARS).to_string()),
            stderr: Some(tail_chars(&output.stderr, MAX_CAPTURED_CHARS).to_string()),
            duration_ms: None,
        }
    }
}

fn has_node_modules<F: FileSystem + ?Sized>(fs: &F) -> bool {
    fs.metadata(Path::new("node_modules"))
        .map(|meta| meta.is_dir)
        .unwrap_or(false)
}
