//! CLI parse: clap types for linkback. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkback CLI - Edit-on-Bitbucket links for generated documentation
#[derive(Parser)]
#[command(name = "linkback")]
#[command(about = "Annotates generated documentation with edit-on-Bitbucket source links")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project checkout root (fallback when the build request carries none)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report via exit code whether a renderer is supported
    Supports {
        /// Renderer name the host is about to run
        renderer: String,
    },
}
