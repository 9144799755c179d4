//! Logging System
//!
//! Structured logging through `tracing`. Level, format (text or json) and
//! destination come from CLI flags, `LOUVORES_LOG*` environment variables, the
//! config file, or defaults, in that order.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Resolve the log file path with precedence: CLI, LOUVORES_LOG_FILE env, config file, default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, CatalogError> {
    if let Some(p) = cli_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    if let Ok(env_path) = std::env::var("LOUVORES_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, CatalogError> {
    let project_dirs = directories::ProjectDirs::from("", "louvores", "louvores").ok_or_else(|| {
        CatalogError::ConfigError(
            "Could not determine platform state directory for log file".to_string(),
        )
    })?;
    let dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir())
        .to_path_buf();
    Ok(dir.join("louvores.log"))
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr, both
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means use runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Logging values given on the command line. Each set field beats the
/// matching `LOUVORES_LOG*` variable and the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOverrides {
    pub level: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub file: Option<PathBuf>,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Initialize the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(
    config: Option<&LoggingConfig>,
    overrides: &LoggingOverrides,
) -> Result<(), CatalogError> {
    let disabled = config.map(|c| !c.enabled).unwrap_or(false);
    if disabled {
        return Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
            .map_err(|e| CatalogError::ConfigError(format!("Failed to init logging: {}", e)));
    }

    let filter = build_env_filter(
        overrides.level.as_deref(),
        env_value("LOUVORES_LOG").as_deref(),
        env_value("LOUVORES_LOG_MODULES").as_deref(),
        config,
    )?;
    let format = determine_format(
        overrides.format.as_deref(),
        env_value("LOUVORES_LOG_FORMAT").as_deref(),
        config,
    )?;
    let output = determine_output(
        overrides.output.as_deref(),
        env_value("LOUVORES_LOG_OUTPUT").as_deref(),
        config,
    )?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && !output.file;
    let writer = build_writer(&output, overrides, config)?;

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };
    result.map_err(|e| CatalogError::ConfigError(format!("Failed to init logging: {}", e)))
}

fn open_log_file(
    overrides: &LoggingOverrides,
    config: Option<&LoggingConfig>,
) -> Result<std::fs::File, CatalogError> {
    let log_file = resolve_log_file_path(
        overrides.file.clone(),
        config.and_then(|c| c.file.clone()),
    )?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CatalogError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            CatalogError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

fn build_writer(
    output: &OutputDestinations,
    overrides: &LoggingOverrides,
    config: Option<&LoggingConfig>,
) -> Result<BoxMakeWriter, CatalogError> {
    let writer = if output.file && output.stderr {
        BoxMakeWriter::new(Mutex::new(open_log_file(overrides, config)?).and(std::io::stderr))
    } else if output.file {
        BoxMakeWriter::new(Mutex::new(open_log_file(overrides, config)?))
    } else if output.stdout && output.stderr {
        BoxMakeWriter::new(std::io::stdout.and(std::io::stderr))
    } else if output.stdout {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };
    Ok(writer)
}

fn add_directive(filter: EnvFilter, directive: String) -> Result<EnvFilter, CatalogError> {
    let parsed = directive
        .parse()
        .map_err(|e| CatalogError::InvalidLogDirective(format!("{}: {}", directive, e)))?;
    Ok(filter.add_directive(parsed))
}

/// Build the level filter: CLI level, then `LOUVORES_LOG`, then config.
///
/// Module levels from the config and `LOUVORES_LOG_MODULES` are added on top
/// of a CLI or config level; a `LOUVORES_LOG` directive is taken as is.
fn build_env_filter(
    cli_level: Option<&str>,
    env_directive: Option<&str>,
    env_modules: Option<&str>,
    config: Option<&LoggingConfig>,
) -> Result<EnvFilter, CatalogError> {
    let level = match (cli_level, env_directive) {
        (Some(level), _) => level,
        (None, Some(directive)) => {
            return EnvFilter::try_new(directive).map_err(|e| {
                CatalogError::InvalidLogDirective(format!("{}: {}", directive, e))
            })
        }
        (None, None) => config.map(|c| c.level.as_str()).unwrap_or("info"),
    };
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(level)
        .map_err(|e| CatalogError::InvalidLogDirective(format!("{}: {}", level, e)))?;

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            filter = add_directive(filter, format!("{}={}", module, module_level))?;
        }
    }

    if let Some(modules_str) = env_modules {
        for module_spec in modules_str.split(',') {
            if let Some((module, module_level)) = module_spec.split_once('=') {
                filter = add_directive(
                    filter,
                    format!("{}={}", module.trim(), module_level.trim()),
                )?;
            }
        }
    }

    Ok(filter)
}

/// Output format: CLI, then `LOUVORES_LOG_FORMAT`, then config.
fn determine_format(
    cli_format: Option<&str>,
    env_format: Option<&str>,
    config: Option<&LoggingConfig>,
) -> Result<String, CatalogError> {
    let env_format = env_format.filter(|f| *f == "json" || *f == "text");
    let format = cli_format
        .or(env_format)
        .or(config.map(|c| c.format.as_str()))
        .unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(CatalogError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}

/// Output destinations
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

/// Output destinations: CLI, then `LOUVORES_LOG_OUTPUT`, then config.
fn determine_output(
    cli_output: Option<&str>,
    env_output: Option<&str>,
    config: Option<&LoggingConfig>,
) -> Result<OutputDestinations, CatalogError> {
    let output = cli_output
        .or(env_output)
        .or(config.map(|c| c.output.as_str()))
        .unwrap_or("stderr");
    parse_output_destinations(output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, CatalogError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        _ => {
            return Err(CatalogError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
