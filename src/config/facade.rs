//! ConfigLoader facade over the layered sources.

use super::sources;
use super::CatalogConfig;
use crate::error::CatalogError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace from every standard source.
    pub fn load(workspace_root: &Path) -> Result<CatalogConfig, CatalogError> {
        let builder = sources::builder_with_defaults()?;
        let builder = sources::add_global_file(builder);
        let builder = sources::add_workspace_file(builder, workspace_root);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CatalogConfig, CatalogError> {
        if !path.is_file() {
            return Err(CatalogError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = sources::builder_with_defaults()?;
        let builder = sources::add_explicit_file(builder, path);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Create default configuration.
    pub fn default() -> CatalogConfig {
        CatalogConfig::default()
    }
}
