//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the sessionprobe application.
///
/// - 0: Success (scan completed and the report was printed, even if no
///   `session.dat` files were found)
/// - 1: General error (root directory inaccessible, file read failure, or
///   any other unexpected failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Scan completed and the report was printed.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "SP000",
            Self::GeneralError => "SP001",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "SP001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "SP000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "SP001");
    }

    #[test]
    fn test_structured_error_fields() {
        let err = anyhow::anyhow!("root directory missing");
        let structured = StructuredError::new(&err, ExitCode::GeneralError);

        assert_eq!(structured.code, "SP001");
        assert_eq!(structured.exit_code, 1);
        assert!(structured.message.contains("root directory missing"));
    }
}
