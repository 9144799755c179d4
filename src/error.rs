//! Error types for catalog construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, building, or writing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Scan root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration load error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
