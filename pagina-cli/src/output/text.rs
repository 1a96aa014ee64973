//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use pagina_core::Fragment;
use std::io::Write;

/// Plain text formatter - outputs one block per fragment
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        writeln!(self.writer, "{}", fragment.identifier())?;
        writeln!(self.writer, "{}", fragment.title())?;
        match fragment.continuation().label() {
            Some(label) => writeln!(self.writer, "{} ({label})", fragment.display_text())?,
            None => writeln!(self.writer, "{}", fragment.display_text())?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
