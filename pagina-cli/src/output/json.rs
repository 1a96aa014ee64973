//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use pagina_core::Fragment;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs fragments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_full_body: bool,
    fragments: Vec<FragmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FragmentData {
    /// Part title
    pub title: String,
    /// Part locator
    pub identifier: String,
    /// Trimmed fragment text
    pub display_text: String,
    /// 0-based part index
    pub order: usize,
    /// Number of parts in the family
    pub total_parts: usize,
    /// Whether the record was split
    pub is_multi_part: bool,
    /// A later part follows
    pub continues: bool,
    /// An earlier part precedes
    pub continued_from_previous: bool,
    /// Full original body, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_body: Option<String>,
}

impl FragmentData {
    /// Flatten a fragment, optionally carrying its full body
    pub fn from_fragment(fragment: &Fragment, include_full_body: bool) -> Self {
        let continuation = fragment.continuation();
        Self {
            title: fragment.title().to_string(),
            identifier: fragment.identifier().to_string(),
            display_text: fragment.display_text().to_string(),
            order: fragment.order(),
            total_parts: fragment.total_parts(),
            is_multi_part: fragment.is_multi_part(),
            continues: continuation.continues(),
            continued_from_previous: continuation.continued_from_previous(),
            full_body: include_full_body.then(|| fragment.full_body().to_string()),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            include_full_body: false,
            fragments: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Toggle inclusion of the full body in every entry
    pub fn include_full_body(mut self, include: bool) -> Self {
        self.include_full_body = include;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        self.fragments
            .push(FragmentData::from_fragment(fragment, self.include_full_body));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.fragments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.fragments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
