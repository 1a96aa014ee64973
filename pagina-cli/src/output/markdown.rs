//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use pagina_core::{Continuation, Fragment};
use std::io::Write;

/// Markdown formatter - outputs fragments as a numbered result list
///
/// With full documents enabled, the complete body of each record follows
/// the last part of its family.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    fragment_count: usize,
    include_full_body: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fragment_count: 0,
            include_full_body: false,
        }
    }

    /// Toggle full document sections
    pub fn include_full_body(mut self, include: bool) -> Self {
        self.include_full_body = include;
        self
    }

    fn write_full_document(&mut self, fragment: &Fragment) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "## {}", fragment.document_title())?;
        if let Some(host) = fragment.host() {
            writeln!(self.writer, "*Source: {host}*")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", fragment.full_body().trim())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        self.fragment_count += 1;
        write!(
            self.writer,
            "{}. [{}]({}) {}",
            self.fragment_count,
            fragment.title(),
            fragment.identifier(),
            fragment.display_text()
        )?;
        match fragment.continuation().label() {
            Some(label) => writeln!(self.writer, " *({label})*")?,
            None => writeln!(self.writer)?,
        }

        let family_done = matches!(
            fragment.continuation(),
            Continuation::Single | Continuation::Last
        );
        if self.include_full_body && family_done {
            self.write_full_document(fragment)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total fragments: {}*", self.fragment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
