//! JSON output formatter for probe results.
//!
//! Machine-readable rendering of the same data as the text report.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "files": [
//!     {
//!       "path": "ASSETS/a/session.dat",
//!       "unique_types": [7, 9]
//!     }
//!   ],
//!   "all_types": [7, 9],
//!   "summary": {
//!     "files_scanned": 1,
//!     "total_unique_types": 2,
//!     "exit_code": 0,
//!     "exit_code_name": "SP000"
//!   }
//! }
//! ```

use serde::Serialize;

use crate::error::ExitCode;
use crate::probe::{FileReport, ProbeSummary};
use crate::scanner::TypeTag;

/// A single scanned file in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFileReport {
    /// Path of the scanned session.dat file
    pub path: String,
    /// Distinct type tags in ascending order
    pub unique_types: Vec<TypeTag>,
}

impl JsonFileReport {
    /// Convert a probe file report for serialization.
    #[must_use]
    pub fn from_file_report(report: &FileReport) -> Self {
        Self {
            path: report.path.display().to_string(),
            unique_types: report.tags.iter().copied().collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Number of session.dat files scanned
    pub files_scanned: usize,
    /// Number of distinct tags across all files
    pub total_unique_types: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "SP000")
    pub exit_code_name: String,
}

/// Complete JSON document for one probe run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Per-file results in walker order
    pub files: Vec<JsonFileReport>,
    /// Union of all per-file tag sets, ascending
    pub all_types: Vec<TypeTag>,
    /// Run summary
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Build the JSON document from probe results.
    #[must_use]
    pub fn new(reports: &[FileReport], summary: &ProbeSummary, exit_code: ExitCode) -> Self {
        Self {
            files: reports.iter().map(JsonFileReport::from_file_report).collect(),
            all_types: summary.all_tags.iter().copied().collect(),
            summary: JsonSummary {
                files_scanned: summary.files_scanned,
                total_unique_types: summary.all_tags.len(),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
