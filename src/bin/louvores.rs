//! Louvores CLI Binary
//!
//! Builds the catalog files from the configured folder tree. Exits 1 when the
//! scan root is missing or any other fatal error occurs.

use anyhow::Context;
use clap::Parser;
use louvores::logging::init_logging;
use louvores::tooling::cli::{Cli, CliContext};
use std::process;

fn start_logging(cli: &Cli, context: Option<&CliContext>) {
    let config = context.map(|ctx| &ctx.config().logging);
    if let Err(e) = init_logging(config, &cli.logging_overrides()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = match CliContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(context) => context,
        Err(e) => {
            // No config to read logging settings from; log with defaults.
            start_logging(cli, None);
            return Err(e).with_context(|| {
                format!("Error initializing workspace {}", cli.workspace.display())
            });
        }
    };
    start_logging(cli, Some(&context));

    Ok(context.execute(&cli.command())?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Fatal error");
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
