//! Pagination configuration

use crate::error::{PaginaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum fragment length, in characters
pub const DEFAULT_MAX_FRAGMENT_LENGTH: usize = 200;

/// What to do with a record whose identifier is not a valid locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLocatorPolicy {
    /// Abort the batch on the first invalid locator
    #[default]
    Fail,
    /// Log and drop the record, keep paginating the rest
    Skip,
}

/// Validated pagination settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    max_fragment_length: usize,
    on_invalid_locator: InvalidLocatorPolicy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_fragment_length: DEFAULT_MAX_FRAGMENT_LENGTH,
            on_invalid_locator: InvalidLocatorPolicy::Fail,
        }
    }
}

impl PaginationConfig {
    /// Create a configuration with the given maximum fragment length
    ///
    /// Zero and negative values are rejected.
    pub fn new(max_fragment_length: i64) -> Result<Self> {
        Self::builder().max_fragment_length(max_fragment_length).build()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum fragment length in characters
    pub fn max_fragment_length(&self) -> usize {
        self.max_fragment_length
    }

    /// Policy for records with malformed identifiers
    pub fn on_invalid_locator(&self) -> InvalidLocatorPolicy {
        self.on_invalid_locator
    }

    /// Parse the `[pagination]` table of a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.pagination.into_config()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_fragment_length: Option<i64>,
    on_invalid_locator: InvalidLocatorPolicy,
}

impl ConfigBuilder {
    /// Set the maximum fragment length
    pub fn max_fragment_length(mut self, length: i64) -> Self {
        self.max_fragment_length = Some(length);
        self
    }

    /// Set the invalid locator policy
    pub fn on_invalid_locator(mut self, policy: InvalidLocatorPolicy) -> Self {
        self.on_invalid_locator = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PaginationConfig> {
        let max_fragment_length = match self.max_fragment_length {
            None => DEFAULT_MAX_FRAGMENT_LENGTH,
            Some(length) => validate_length(length)?,
        };

        Ok(PaginationConfig {
            max_fragment_length,
            on_invalid_locator: self.on_invalid_locator,
        })
    }
}

/// The `[pagination]` table as it appears in a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSection {
    /// Maximum fragment length; omitted means the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fragment_length: Option<i64>,

    /// Policy for records with malformed identifiers
    #[serde(default)]
    pub on_invalid_locator: InvalidLocatorPolicy,
}

impl PaginationSection {
    /// Validate the section into a configuration
    pub fn into_config(self) -> Result<PaginationConfig> {
        let mut builder = PaginationConfig::builder().on_invalid_locator(self.on_invalid_locator);
        if let Some(length) = self.max_fragment_length {
            builder = builder.max_fragment_length(length);
        }
        builder.build()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pagination: PaginationSection,
}

fn validate_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(PaginaError::InvalidConfiguration(format!(
            "max_fragment_length must be positive, got {length}"
        )));
    }
    usize::try_from(length).map_err(|_| {
        PaginaError::InvalidConfiguration(format!(
            "max_fragment_length {length} does not fit this platform"
        ))
    })
}
