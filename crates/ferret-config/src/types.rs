use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for ferret
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FerretConfig {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub build: BuildSettings,

    #[serde(default)]
    pub rules: RuleSettings,
}

/// Codebase scan settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanSettings {
    /// Depth bound of the directory walk (root = 0)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Depth bound for extension counting; defaults to `max_depth`
    #[serde(default)]
    pub extension_depth: Option<usize>,

    /// Report symlinked directories as directories and walk into them
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            extension_depth: None,
            follow_symlinks: default_true(),
        }
    }
}

/// Build probe settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Hard limit for the build process, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Replaces `npm run build`, e.g. `["pnpm", "run", "build"]`
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            command: None,
        }
    }
}

/// Extra log classification rules
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSettings {
    /// Rule files or directories, relative to the project root
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

fn default_max_depth() -> usize {
    4
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
