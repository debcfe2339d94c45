//! Linkback CLI Binary
//!
//! Host-facing entry point: answers renderer support probes and runs the
//! stdin-to-stdout annotation pass.

use clap::Parser;
use linkback::cli::{Cli, Commands, RunContext};
use linkback::config::ConfigLoader;
use linkback::logging::{init_logging, LoggingConfig};
use linkback::protocol;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Support probes carry their answer in the exit code alone, so they are
    // handled before logging can touch any stream.
    if let Some(Commands::Supports { renderer }) = &cli.command {
        if protocol::renderer_supported(renderer) {
            process::exit(0);
        }
        process::exit(1);
    }

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Linkback starting");

    let context = match RunContext::new(cli.root.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving project root: {}", e);
            eprintln!("{}", linkback::cli::map_error(&e));
            process::exit(1);
        }
    };

    // The annotated documents go to stdout inside the pass; nothing else may.
    match context.run() {
        Ok(summary) => {
            info!(
                documents = summary.documents,
                pages_linked = summary.pages_linked,
                symbols_linked = summary.symbols_linked,
                "annotation pass finished"
            );
        }
        Err(e) => {
            error!("Annotation pass failed: {}", e);
            eprintln!("{}", linkback::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: `--quiet`, then explicit flags, then `--verbose`, then the
/// config file, then defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.root)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }
    if cli.quiet {
        config.level = "off".to_string();
    }

    config
}
