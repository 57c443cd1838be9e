//! Check command implementation
//!
//! Loads configuration, applies command-line overrides, runs the audit and
//! renders the outcome. Exit code 1 means the audit could not run, the report
//! could not be written, or at least one error-severity finding was reported.

use crate::cli::common::{EXIT_FAILURE, EXIT_SUCCESS, color_choice, load_config};
use crate::config::{ColorOption, Config, OutputFormat};
use crate::engine::{AuditOutcome, run_audit};
use crate::error::AuditError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{StandardStream, WriteColor};

/// Command-line overrides for a check run
#[derive(Debug, Default, Clone)]
pub struct CheckOptions {
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<ColorOption>,
}

/// Run the check command, writing to stdout
///
/// Returns the process exit code.
pub fn run_check(options: &CheckOptions) -> i32 {
    let config = match resolve_config(options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    };

    let mut stdout = StandardStream::stdout(color_choice(config.output.color));
    check_with_config(&config, &mut stdout)
}

/// Run the audit for a resolved configuration and render it into `out`
pub fn check_with_config<W: WriteColor>(config: &Config, out: &mut W) -> i32 {
    match run_audit(config) {
        Ok(outcome) => match render(config.output.format, &outcome, out) {
            Ok(()) => exit_code(&outcome),
            Err(e) => {
                eprintln!("Error: failed to write report: {}", e);
                EXIT_FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Exit code for a completed audit outcome
pub fn exit_code(outcome: &AuditOutcome) -> i32 {
    match outcome {
        AuditOutcome::NoFiles { .. } => EXIT_SUCCESS,
        AuditOutcome::Completed(report) if report.verdict().is_failure() => EXIT_FAILURE,
        AuditOutcome::Completed(_) => EXIT_SUCCESS,
    }
}

fn resolve_config(options: &CheckOptions) -> Result<Config, AuditError> {
    let mut config = load_config(options.config.as_deref())?;
    if let Some(root) = &options.root {
        config.audit.root = root.clone();
    }
    if let Some(format) = options.format {
        config.output.format = format;
    }
    if let Some(color) = options.color {
        config.output.color = color;
    }
    Ok(config)
}

fn render<W: WriteColor>(format: OutputFormat, outcome: &AuditOutcome, out: &mut W) -> io::Result<()> {
    match (format, outcome) {
        (OutputFormat::Human, AuditOutcome::NoFiles { root }) => {
            HumanFormatter::new().write_no_files(out, root)
        }
        (OutputFormat::Human, AuditOutcome::Completed(report)) => {
            HumanFormatter::new().write_report(out, report)
        }
        (OutputFormat::Jsonl, AuditOutcome::NoFiles { root }) => {
            write_jsonl(out, &JsonlFormatter::new().format_no_files(root))
        }
        (OutputFormat::Jsonl, AuditOutcome::Completed(report)) => {
            write_jsonl(out, &JsonlFormatter::new().format(report))
        }
    }
}

fn write_jsonl<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
