use crate::types::FerretConfig;
use ferret_fs::{FileSystem, NativeFileSystem};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Project-local config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".ferret/config.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config FILE`
    Explicit(PathBuf),
    /// `<project>/.ferret/config.toml`
    Project(PathBuf),
    /// `<user config dir>/ferret/config.toml`
    User(PathBuf),
    Default,
}

/// Resolves and holds the configuration for one invocation
#[derive(Debug, Clone)]
pub struct ConfigManager {
    source: ConfigSource,
    config: FerretConfig,
}

impl ConfigManager {
    /// Get the user config path (`<config dir>/ferret/config.toml`)
    #[cfg(feature = "user-config")]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ferret").join("config.toml"))
    }

    #[cfg(not(feature = "user-config"))]
    pub fn user_config_path() -> Option<PathBuf> {
        None
    }

    /// Load the configuration that applies to `project_root`.
    ///
    /// Precedence: `explicit`, then the project config, then the user
    /// config, then defaults. The first file found wins; files are not
    /// merged. An explicit path that does not exist is an error, the
    /// other locations are optional.
    pub fn load_for_project(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::read(path)?;
            return Ok(Self::new(ConfigSource::Explicit(path.to_path_buf()), config));
        }

        let project_path = project_root.join(PROJECT_CONFIG);
        if project_path.is_file() {
            let config = Self::read(&project_path)?;
            return Ok(Self::new(ConfigSource::Project(project_path), config));
        }

        if let Some(user_path) = Self::user_config_path().filter(|p| p.is_file()) {
            let config = Self::read(&user_path)?;
            return Ok(Self::new(ConfigSource::User(user_path), config));
        }

        debug!("no config file found, using defaults");
        Ok(Self::new(ConfigSource::Default, FerretConfig::default()))
    }

    /// Load config from a specific path (useful for testing)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        Ok(Self::new(ConfigSource::Explicit(path.to_path_buf()), config))
    }

    fn new(source: ConfigSource, config: FerretConfig) -> Self {
        Self { source, config }
    }

    fn read(path: &Path) -> Result<FerretConfig, ConfigError> {
        // FileSystem scoped to the config directory
        let config_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let fs = NativeFileSystem::new(config_dir)
            .map_err(|_| ConfigError::ConfigNotFound(path.to_path_buf()))?;
        let file_name = path.file_name().map(Path::new).unwrap_or(path);

        if !fs.metadata(file_name)?.is_file {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs.read_to_string(file_name)?;
        let config: FerretConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        validate(path, &config)?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get reference to config
    pub fn config(&self) -> &FerretConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Extra rule paths, resolved against `project_root`
    pub fn rule_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        self.config
            .rules
            .paths
            .iter()
            .map(|path| project_root.join(path))
            .collect()
    }
}

fn validate(path: &Path, config: &FerretConfig) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if config.build.timeout_secs == 0 {
        return Err(invalid("build.timeout_secs must be greater than 0"));
    }
    if let Some(command) = &config.build.command {
        if command.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(invalid("build.command must name a program"));
        }
    }
    Ok(())
}
