//! Command-line interface definitions for sessionprobe.
//!
//! The tool is a one-shot scan, so the CLI is a single flat command: a scan
//! root plus output and verbosity options.
//!
//! # Example
//!
//! ```bash
//! # Scan the default ASSETS directory
//! sessionprobe
//!
//! # Scan a specific directory tree
//! sessionprobe /mnt/dumps/game-saves
//!
//! # Machine-readable output for scripting
//! sessionprobe /mnt/dumps/game-saves --output json
//!
//! # Verbose mode for debugging
//! sessionprobe -v /mnt/dumps/game-saves
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Scan session.dat containers for type tags trailing embedded PNGs.
///
/// sessionprobe walks a directory tree for files named `session.dat`,
/// locates embedded PNG blobs inside each, reads the 32-bit value stored
/// just past each image's IEND chunk, and reports the distinct values seen
/// per file and across all files.
#[derive(Debug, Parser)]
#[command(name = "sessionprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan for session.dat files
    ///
    /// Defaults to an `ASSETS` directory relative to the working directory,
    /// matching the layout the tool was written against.
    #[arg(value_name = "PATH", default_value = "ASSETS")]
    pub path: PathBuf,

    /// Output format (text for the human-readable report, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report fatal errors on stderr as structured JSON
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
