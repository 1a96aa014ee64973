//! Output formatting module

use anyhow::Result;
use pagina_core::Fragment;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single fragment
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one block per fragment
    #[default]
    Text,
    /// JSON array of fragments with continuation metadata
    Json,
    /// Markdown formatted result list
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn describe_all() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Plain text, one block per fragment"),
            ("json", "JSON array of fragments with continuation metadata"),
            ("markdown", "Markdown result list, optionally with full documents"),
        ]
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
