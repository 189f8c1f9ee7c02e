//! Error types for canasta-cli.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Rules file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Rules file is not a valid JSON array of rule rows
    #[error("Invalid rules file: {0}")]
    InvalidRules(String),

    /// No products were selected
    #[error("please select at least one product")]
    EmptySelection,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidRules(_) => ExitCode::from(4),
            Self::EmptySelection => ExitCode::from(2),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRules(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_message() {
        assert_eq!(
            CliError::EmptySelection.to_string(),
            "please select at least one product"
        );
    }

    #[test]
    fn test_exit_codes_distinct() {
        assert_ne!(
            CliError::EmptySelection.exit_code(),
            CliError::InvalidRules(String::new()).exit_code()
        );
    }
}
