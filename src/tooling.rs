//! Tooling layer: command-line interface and text formatting.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
