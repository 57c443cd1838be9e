//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// api-error-lint CLI main entry point
///
/// Without a subcommand the conventional check runs.
#[derive(Parser, Debug)]
#[command(name = "api-error-lint")]
#[command(about = "Audit HTTP handlers against API error-handling conventions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (defaults to api-error-lint.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scan the handler directory and report findings
    Check {
        /// Directory to scan (overrides configuration)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format (overrides configuration)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the builtin rules and whether they are enabled
    List {
        /// Output format (overrides configuration)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Check {
            root: None,
            format: None,
        }
    }
}
