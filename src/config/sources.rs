//! Configuration sources: defaults, config file, environment.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (`TITLEFIX_ROOT`, `TITLEFIX_LOGGING__LEVEL`, ...)
pub const ENV_PREFIX: &str = "TITLEFIX";

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "titlefix.toml";

/// Builder with the merge-policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("root", "docs")?
        .set_default("dry_run", false)
}

/// Add a TOML config file. A missing optional file is skipped.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> ConfigBuilder<DefaultState> {
    if !required && !path.exists() {
        debug!(config_path = %path.display(), "No config file, using defaults");
        return builder;
    }
    debug!(config_path = %path.display(), required, "Adding config file");
    builder.add_source(
        File::from(path)
            .format(FileFormat::Toml)
            .required(required),
    )
}

/// Add `TITLEFIX_*` environment overrides. `__` separates nested keys and
/// `TITLEFIX_EXTENSIONS` is a comma-separated list.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("extensions")
            .try_parsing(true),
    )
}
