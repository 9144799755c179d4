//! Configuration
//!
//! Layered with the `config` crate. Precedence, lowest to highest: built-in
//! defaults, the global file (`<config dir>/louvores/config.toml`), the
//! workspace file (`louvores.toml`), then `LOUVORES__*` environment variables
//! (`__` separates nested keys, e.g. `LOUVORES__SCAN__ROOT`).

pub mod facade;
mod sources;

pub use facade::ConfigLoader;

use crate::catalog::OutputSettings;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace configuration file name.
pub const WORKSPACE_CONFIG_FILE: &str = "louvores.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the folder tree lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Scan root, relative to the workspace unless absolute
    #[serde(default = "default_scan_root")]
    pub root: PathBuf,
}

fn default_scan_root() -> PathBuf {
    PathBuf::from("assets2")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_scan_root(),
        }
    }
}

impl CatalogConfig {
    /// Scan root resolved against the workspace.
    pub fn scan_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.scan.root)
    }

    /// Output directory resolved against the workspace.
    pub fn output_dir(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.output.dir)
    }
}
