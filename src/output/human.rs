#![forbid(unsafe_code)]

//! Human-readable report
//!
//! Errors are listed first, then warnings, then a one-line summary. Files are
//! shown by name, since every scanned file lives directly in the scan root.

use crate::engine::{AuditReport, Verdict};
use crate::rules::Finding;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable output formatter
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the grouped report for a completed scan
    pub fn write_report<W: WriteColor>(&self, out: &mut W, report: &AuditReport) -> io::Result<()> {
        if report.verdict() == Verdict::Pass {
            set_color(out, Color::Green, true)?;
            writeln!(out, "All checks passed ({} files).", report.files_checked())?;
            return out.reset();
        }

        let errors: Vec<&Finding> = report.errors().collect();
        let warnings: Vec<&Finding> = report.warnings().collect();

        if !errors.is_empty() {
            set_color(out, Color::Red, true)?;
            writeln!(out, "## Errors (must fix)")?;
            out.reset()?;
            writeln!(out)?;
            for finding in &errors {
                write_finding(out, finding)?;
            }
            writeln!(out)?;
        }

        if !warnings.is_empty() {
            set_color(out, Color::Yellow, true)?;
            writeln!(out, "## Warnings (advisory)")?;
            out.reset()?;
            writeln!(out)?;
            for finding in &warnings {
                write_finding(out, finding)?;
            }
            writeln!(out)?;
        }

        let summary = report.summary();
        writeln!(
            out,
            "Total: {} error(s), {} warning(s)",
            summary.errors, summary.warnings
        )
    }

    /// Write the notice for a root without matching files
    pub fn write_no_files<W: WriteColor>(&self, out: &mut W, root: &Path) -> io::Result<()> {
        set_color(out, Color::Yellow, false)?;
        writeln!(out, "No matching files found in {}", root.display())?;
        out.reset()
    }
}

fn set_color<W: WriteColor>(out: &mut W, color: Color, bold: bool) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))
}

fn write_finding<W: WriteColor>(out: &mut W, finding: &Finding) -> io::Result<()> {
    let name = finding
        .file
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| finding.file.to_string_lossy());

    write!(out, "- ")?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    if finding.line == 0 {
        write!(out, "{}", name)?;
    } else {
        write!(out, "{}:{}", name, finding.line)?;
    }
    out.reset()?;
    writeln!(out, " - {} [{}]", finding.message, finding.rule_id)
}
