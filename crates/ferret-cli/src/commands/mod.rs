pub mod build;
pub mod logs;
pub mod report;
pub mod scan;

use anyhow::{Context, Result};
use ferret_config::ConfigManager;
use std::path::Path;

/// Resolve the configuration that applies to `project_root`
pub(crate) fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ConfigManager> {
    ConfigManager::load_for_project(project_root, explicit).context("Failed to load configuration")
}
