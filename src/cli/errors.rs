//! CLI-specific error types
//!
//! These cover operational failures only (unreadable files, malformed
//! JSON, dataset problems). An *invalid* value is not an error: it is a
//! normal result reported with exit code 1.

use std::fmt;

use crate::generators::GeneratorError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// File could not be read
    IoError,
    /// Input file held malformed JSON or the wrong JSON shape
    ParseError,
    /// Generation failed (dataset or template problem)
    GeneratorError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "VERI_CLI_IO_ERROR",
            Self::ParseError => "VERI_CLI_PARSE_ERROR",
            Self::GeneratorError => "VERI_CLI_GENERATOR_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ParseError, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GeneratorError> for CliError {
    fn from(err: GeneratorError) -> Self {
        Self::new(CliErrorCode::GeneratorError, err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::io_error("cannot read schema.json");
        let text = format!("{}", err);
        assert!(text.contains("VERI_CLI_IO_ERROR"));
        assert!(text.contains("schema.json"));
    }

    #[test]
    fn test_generator_error_converts() {
        let err: CliError = GeneratorError::MissingCategory("colors".into()).into();
        assert_eq!(err.code(), CliErrorCode::GeneratorError);
        assert!(err.message().contains("colors"));
    }
}
