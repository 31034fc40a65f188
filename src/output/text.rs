//! Human-readable text report.
//!
//! This is the tool's primary output and its format is a stable contract:
//!
//! ```text
//! Found 2 session.dat files:
//!   ASSETS/a/session.dat
//!   ASSETS/b/session.dat
//! ASSETS/a/session.dat: 2 unique types: [7, 9]
//! ASSETS/b/session.dat: 1 unique types: [12]
//!
//! All unique type values across all session.dat files:
//! [7, 9, 12]
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::probe::{FileReport, ProbeSummary};
use crate::scanner::TypeTag;

/// Text renderer over a finished probe run.
#[derive(Debug)]
pub struct TextReport<'a> {
    reports: &'a [FileReport],
    summary: &'a ProbeSummary,
}

impl<'a> TextReport<'a> {
    /// Create a text report from probe results.
    #[must_use]
    pub fn new(reports: &'a [FileReport], summary: &'a ProbeSummary) -> Self {
        Self { reports, summary }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} session.dat files:", self.reports.len())?;
        for report in self.reports {
            writeln!(f, "  {}", report.path.display())?;
        }

        for report in self.reports {
            writeln!(
                f,
                "{}: {} unique types: {}",
                report.path.display(),
                report.tags.len(),
                format_tag_list(&report.tags)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "All unique type values across all session.dat files:")?;
        writeln!(f, "{}", format_tag_list(&self.summary.all_tags))
    }
}

/// Render an ordered tag set as `[v1, v2, v3]`.
fn format_tag_list(tags: &BTreeSet<TypeTag>) -> String {
    let rendered: Vec<String> = tags.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
