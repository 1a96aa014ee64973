//! Error types for segmentation and fragment synthesis

use thiserror::Error;

/// Errors raised by the pagination core
#[derive(Error, Debug)]
pub enum PaginaError {
    /// The record identifier is not an absolute URI with a host
    #[error("invalid locator '{identifier}': {reason}")]
    InvalidLocator {
        /// The identifier as supplied by the caller
        identifier: String,
        /// Why the identifier was rejected
        reason: String,
    },

    /// A configuration value is out of range or missing
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Synthesis was asked to build fragments from zero segments
    #[error("cannot synthesize fragments for '{title}': no segments (blank records must be filtered first)")]
    EmptySegments {
        /// Title of the offending record
        title: String,
    },

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaginaError {
    /// Whether the error concerns a single record rather than the whole batch
    ///
    /// Record errors can be skipped by a caller; everything else aborts.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            PaginaError::InvalidLocator { .. } | PaginaError::EmptySegments { .. }
        )
    }
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_locator_display() {
        let error = PaginaError::InvalidLocator {
            identifier: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid locator 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_record_error_classification() {
        let locator = PaginaError::InvalidLocator {
            identifier: String::new(),
            reason: String::new(),
        };
        let empty = PaginaError::EmptySegments {
            title: "T".to_string(),
        };
        let config = PaginaError::InvalidConfiguration("max_fragment_length is 0".to_string());

        assert!(locator.is_record_error());
        assert!(empty.is_record_error());
        assert!(!config.is_record_error());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let error: PaginaError = parse_err.into();
        assert!(error.to_string().starts_with("configuration parse error"));
    }
}
