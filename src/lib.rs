//! sessionprobe - type tag discovery for session.dat containers
//!
//! A one-shot diagnostic CLI that walks a directory tree for files named
//! `session.dat`, scans each for embedded PNG images, reads the 32-bit
//! little-endian value stored just past each image's IEND chunk, and
//! reports the distinct values seen per file and across all files.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod probe;
pub mod scanner;

use cli::{Cli, OutputFormat};
use error::ExitCode;
use output::{JsonReport, TextReport};
use probe::TagProbe;

/// Run the application: probe the tree and print the report.
///
/// Logging must already be initialized. Returns the exit code on a
/// completed run; discovery and read failures propagate as errors and are
/// reported by `main`.
pub fn run_app(cli: &Cli) -> anyhow::Result<ExitCode> {
    let probe = TagProbe::new(&cli.path);
    let (reports, summary) = probe.run()?;

    match cli.output {
        OutputFormat::Text => print!("{}", TextReport::new(&reports, &summary)),
        OutputFormat::Json => println!(
            "{}",
            JsonReport::new(&reports, &summary, ExitCode::Success).to_json_pretty()?
        ),
    }

    Ok(ExitCode::Success)
}
