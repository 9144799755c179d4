//! Configuration sources: defaults, global file, workspace file, environment.

use super::WORKSPACE_CONFIG_FILE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Builder seeded with the scalar defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("scan.root", "assets2")?
        .set_default("output.dir", ".")
}

/// `<config dir>/louvores/config.toml`, when a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "louvores", "louvores")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Optional global config file.
pub fn add_global_file(
    builder: ConfigBuilder<DefaultState>,
) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    }
}

/// Optional `louvores.toml` at the workspace root.
pub fn add_workspace_file(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(workspace_root.join(WORKSPACE_CONFIG_FILE)).required(false))
}

/// Required explicit config file.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}

/// `LOUVORES__` prefix with `__` as the nesting separator.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("LOUVORES")
            .separator("__")
            .try_parsing(true),
    )
}
