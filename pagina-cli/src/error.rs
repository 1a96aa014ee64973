//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// A raw text input has no way to derive a locator
    #[error("Cannot locate records from {0}: pass --query or --base-url for plain text input")]
    MissingLocatorSource(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
