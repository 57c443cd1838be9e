//! api-error-lint CLI entry point

use api_error_lint::cli::{CheckOptions, Cli, Command, run_check, run_list};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command.unwrap_or_default() {
        Command::Check { root, format } => run_check(&CheckOptions {
            config: cli.config,
            root,
            format,
            color: cli.color,
        }),
        Command::List { format } => run_list(cli.config.as_deref(), format),
    };

    process::exit(exit_code);
}
