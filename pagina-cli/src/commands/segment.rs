//! Segment command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use pagina_core::{Segmenter, TextSegment, DEFAULT_MAX_FRAGMENT_LENGTH};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Maximum characters per segment
    #[arg(short, long, value_name = "CHARS", default_value_t = DEFAULT_MAX_FRAGMENT_LENGTH)]
    pub max_length: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SegmentFormat,
}

/// Output formats for raw segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SegmentFormat {
    /// One line per segment with its byte span
    Text,
    /// JSON array of segments
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        let segmenter = Segmenter::new(self.max_length).context("Invalid segment length")?;
        if !self.input.is_file() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }
        let body = FileReader::read_text(&self.input)?;
        let segments = segmenter.segment(&body);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        Self::write_segments(&mut out, &segments, self.format)
    }

    fn write_segments<W: Write>(
        out: &mut W,
        segments: &[TextSegment],
        format: SegmentFormat,
    ) -> Result<()> {
        match format {
            SegmentFormat::Text => {
                for segment in segments {
                    writeln!(
                        out,
                        "[{}] {}..{}\t{}",
                        segment.order, segment.span.start, segment.span.end, segment.text
                    )?;
                }
            }
            SegmentFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, segments)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
