//! Ferret configuration
//!
//! Configuration is optional TOML, looked up per invocation:
//!
//! ```toml
//! [scan]
//! max_depth = 4
//! follow_symlinks = true
//!
//! [build]
//! timeout_secs = 300
//! command = ["pnpm", "run", "build"]
//!
//! [rules]
//! paths = ["ci/deploy-rules.toml"]
//! ```

pub mod manager;
pub mod types;

pub use manager::{ConfigError, ConfigManager, ConfigSource, PROJECT_CONFIG};
pub use types::{BuildSettings, FerretConfig, RuleSettings, ScanSettings};
