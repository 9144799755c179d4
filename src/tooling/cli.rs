//! CLI Tooling
//!
//! Command-line interface for building the catalog and querying it. Running
//! without a subcommand performs a full build.

use crate::browse::{lookup_codes, parse_codes_param, search, PlaylistLink, SearchQuery};
use crate::config::{CatalogConfig, ConfigLoader};
use crate::error::CatalogError;
use crate::logging::LoggingOverrides;
use crate::pipeline::{BuiltCatalog, CatalogPipeline};
use crate::tooling::format::{
    format_build_text, format_issues_text, format_lookup_text, format_search_text,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Louvores catalog builder
#[derive(Parser)]
#[command(name = "louvores")]
#[command(about = "Build the louvores catalog from a folder tree of sheet-music PDFs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; a bare invocation builds.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build {
            format: "text".to_string(),
        })
    }

    /// Logging flags, applied ahead of environment variables and config.
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Scan the folder tree and write the catalog files (default)
    Build {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Report folders hidden from search and entries without a code
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Search the catalog by name or number
    Search {
        /// Text or number to look for
        query: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Look up entries by code (comma-separated)
    Codes {
        /// Codes such as CAT001,LCP055
        codes: String,
        /// Print a share link based on this URL
        #[arg(long)]
        share_base: Option<String>,
        /// Playlist name for the share link
        #[arg(long, default_value = "")]
        name: String,
        /// Playlist timestamp for the share link
        #[arg(long, default_value = "")]
        timestamp: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn check_format(format: &str) -> Result<(), CatalogError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(CatalogError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// CLI context: loaded configuration and the pipeline built from it.
pub struct CliContext {
    workspace_root: PathBuf,
    config: CatalogConfig,
    pipeline: CatalogPipeline,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CatalogError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create a context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: CatalogConfig) -> Self {
        let pipeline = CatalogPipeline::new(
            config.scan_root(&workspace_root),
            config.output_dir(&workspace_root),
            config.output.clone(),
        );
        CliContext {
            workspace_root,
            config,
            pipeline,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &std::path::Path {
        &self.workspace_root
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        match command {
            Commands::Build { format } => {
                check_format(format)?;
                let report = self.pipeline.run()?;
                if format == "json" {
                    let catalog = &report.catalog;
                    Ok(serde_json::to_string_pretty(&json!({
                        "version": report.written.stamp,
                        "total": catalog.entries().len(),
                        "scan": catalog.scan_stats,
                        "categories": catalog.codes.categories,
                        "naming_warnings": catalog.naming_warnings,
                        "duplicates": catalog.codes.duplicate_count(),
                        "unassigned": catalog.codes.unassigned_count(),
                        "files": {
                            "catalog_script": report.written.catalog_script,
                            "version_file": report.written.version_file,
                            "mapping_file": report.written.mapping_file,
                        },
                    }))?)
                } else {
                    Ok(format_build_text(&report))
                }
            }
            Commands::Validate { format } => {
                check_format(format)?;
                let catalog = self.pipeline.build()?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&validate_json(&catalog))?)
                } else {
                    Ok(format_issues_text(&catalog))
                }
            }
            Commands::Search { query, format } => {
                check_format(format)?;
                let catalog = self.pipeline.build()?;
                let parsed = SearchQuery::parse(query);
                let results = search(catalog.entries(), &parsed);
                info!(query = %query, results = results.len(), "Search finished");
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&results)?)
                } else {
                    Ok(format_search_text(query, &results))
                }
            }
            Commands::Codes {
                codes,
                share_base,
                name,
                timestamp,
                format,
            } => {
                check_format(format)?;
                let codes = parse_codes_param(codes);
                let catalog = self.pipeline.build()?;
                let lookup = lookup_codes(catalog.entries(), &codes);
                let share_url = share_base
                    .as_deref()
                    .map(|base| {
                        let base = Url::parse(base).map_err(|e| {
                            CatalogError::ConfigError(format!("Invalid share base URL {}: {}", base, e))
                        })?;
                        let link = PlaylistLink {
                            codes: codes.clone(),
                            name: name.clone(),
                            timestamp: timestamp.clone(),
                        };
                        Ok::<_, CatalogError>(link.to_url(&base))
                    })
                    .transpose()?;
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({
                        "found": lookup.found,
                        "missing": lookup.missing,
                        "share_url": share_url.as_ref().map(Url::as_str),
                    }))?)
                } else {
                    let mut out = format_lookup_text(&lookup);
                    if let Some(url) = share_url {
                        out.push_str(&format!("Share link: {}\n", url));
                    }
                    Ok(out)
                }
            }
        }
    }
}

fn validate_json(catalog: &BuiltCatalog) -> serde_json::Value {
    let code_issues: Vec<_> = catalog
        .entries()
        .iter()
        .zip(&catalog.codes.outcomes)
        .filter(|(_, outcome)| !matches!(outcome, crate::code::CodeOutcome::Assigned { .. }))
        .map(|(entry, outcome)| json!({ "path": entry.full_path, "code": outcome }))
        .collect();
    json!({
        "valid": catalog.naming_warnings.is_empty() && catalog.codes.unassigned_count() == 0,
        "naming_warnings": catalog.naming_warnings,
        "code_issues": code_issues,
    })
}
