//! Configuration System
//!
//! Layered configuration: built-in defaults, then `titlefix.toml` (or an
//! explicit `--config` file), then `TITLEFIX_*` environment variables. CLI
//! flags are applied on top by the binary.

use crate::error::FixError;
use crate::logging::LoggingConfig;
use crate::walker::{normalize_extension, WalkerConfig, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod sources;

pub use sources::{DEFAULT_CONFIG_FILE, ENV_PREFIX};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixerConfig {
    /// Documentation root to walk
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File name extensions to process
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Report changes without writing
    #[serde(default)]
    pub dry_run: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            dry_run: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl FixerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FixError> {
        if self.root.as_os_str().is_empty() {
            return Err(FixError::Config("root cannot be empty".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(FixError::Config(
                "at least one extension is required".to_string(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| normalize_extension(ext).is_empty())
        {
            return Err(FixError::Config(format!("invalid extension: {:?}", bad)));
        }
        Ok(())
    }

    /// Walker settings derived from this config
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::with_extensions(&self.extensions)
    }
}

/// Loads [`FixerConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using `titlefix.toml` in `working_dir` if present.
    pub fn load(working_dir: &Path) -> Result<FixerConfig, FixError> {
        let path = working_dir.join(DEFAULT_CONFIG_FILE);
        Self::build(Some((&path, false)), true)
    }

    /// Load with an explicit config file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<FixerConfig, FixError> {
        Self::build(Some((path, true)), true)
    }

    /// Defaults plus environment only.
    pub fn load_defaults() -> Result<FixerConfig, FixError> {
        Self::build(None, true)
    }

    fn build(file: Option<(&Path, bool)>, with_env: bool) -> Result<FixerConfig, FixError> {
        let mut builder = sources::builder_with_defaults()?;
        if let Some((path, required)) = file {
            builder = sources::add_file(builder, path, required);
        }
        if with_env {
            builder = sources::add_environment(builder);
        }

        let config: FixerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(root = %config.root.display(), extensions = ?config.extensions, "Configuration loaded");
        Ok(config)
    }

    #[cfg(test)]
    fn load_file_without_env(path: &Path) -> Result<FixerConfig, FixError> {
        Self::build(Some((path, true)), false)
    }
}
