//! Ferret Probe - run a project's build locally and triage the output
//!
//! The probe decides how a project is built from its root indicator files,
//! checks the obvious prerequisite (`node_modules` for npm projects), runs
//! the build under a hard timeout and tags known error lines in the output.
//!
//! Build failures are data: [`BuildProbe::probe`] always returns a
//! [`ferret_core::BuildResult`].
//!
//! # Example
//!
//! ```no_run
//! use ferret_probe::{BuildProbe, ProbeOptions};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let probe = BuildProbe::new(ProbeOptions::default())?;
//! let result = probe.probe_dir(Path::new("./my-site")).await?;
//! println!("success: {}", result.success);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod detect;
pub mod exec;
pub mod probe;

pub use command::{command_for, BuildCommand};
pub use detect::{detect_build_type, is_npm_project};
pub use exec::{run_with_timeout, CapturedOutput, ExecError};
pub use probe::{BuildProbe, ProbeOptions, DEFAULT_TIMEOUT, MAX_CAPTURED_CHARS};
