//! Output formatters for probe results.
//!
//! - [`text`]: the human-readable report (the tool's primary contract)
//! - [`json`]: machine-readable JSON for automation and scripting

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonReport;
pub use text::TextReport;
