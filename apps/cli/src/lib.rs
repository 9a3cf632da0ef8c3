//! Command-line front end for the card validator.
//!
//! Loads a JSON card collection, prints a summary of findings, and
//! optionally writes a corrected copy and a machine-readable report.

pub mod error;
pub mod io;
pub mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use card_validator::Validator;

use crate::render::{write_summary, Color, Palette};

/// Exit status when no errors were found.
pub const EXIT_OK: u8 = 0;
/// Exit status when validation found at least one error.
pub const EXIT_INVALID: u8 = 1;
/// Exit status when the input could not be loaded or output could not be written.
pub const EXIT_FATAL: u8 = 2;

/// Validate a cards JSON file and suggest (or apply) safe fixes.
#[derive(Parser, Debug)]
#[command(name = "validate-cards", version, about, long_about = None)]
pub struct Cli {
    /// Path to the cards JSON file.
    pub file: PathBuf,

    /// Apply safe fixes and write the corrected JSON.
    #[arg(long)]
    pub fix: bool,

    /// Output path for the corrected JSON (defaults to overwriting FILE, keeping a .bak).
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Write a machine-readable JSON report of errors and suggestions.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validate `cli.file`, writing the summary to `out`. Returns the exit status.
pub fn run(cli: &Cli, palette: Palette, out: &mut dyn Write) -> anyhow::Result<u8> {
    let cards = io::load_json(&cli.file)?;
    tracing::debug!(path = %cli.file.display(), "loaded input");

    let outcome = Validator::new().validate(&cards, cli.fix);
    write_summary(&outcome.report, palette, out)?;

    if let Some(corrected) = outcome.corrected.as_ref() {
        // An explicit --out is always written; an unchanged in-place fix is skipped.
        if cli.out.is_none() && corrected == &cards {
            tracing::info!("no changes to write");
        } else {
            let target = cli.out.as_deref().unwrap_or(&cli.file);
            if let Some(backup) = io::write_corrected(&cli.file, target, corrected)? {
                let line = format!("\nOriginal backed up to: {}", backup.display());
                writeln!(out, "{}", palette.paint(line, Color::Blue))?;
            }
            let line = format!("Fixed JSON written to: {}", target.display());
            writeln!(out, "{}", palette.paint(line, Color::Green))?;
        }
    }

    if let Some(path) = cli.report.as_deref() {
        io::write_json(path, &outcome.report)?;
        let line = format!("Report written to: {}", path.display());
        writeln!(out, "{}", palette.paint(line, Color::Blue))?;
    }

    Ok(if outcome.is_success() {
        EXIT_OK
    } else {
        EXIT_INVALID
    })
}
