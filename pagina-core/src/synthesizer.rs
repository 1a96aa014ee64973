//! Fragment synthesis from segmented records

use crate::{
    error::{PaginaError, Result},
    locator::Locator,
    types::{Fragment, SourceRecord, TextSegment},
};
use std::sync::Arc;

/// Turns a record and its segments into a family of fragments
#[derive(Debug, Default, Clone, Copy)]
pub struct FragmentSynthesizer;

impl FragmentSynthesizer {
    /// Create a new synthesizer
    pub fn new() -> Self {
        Self
    }

    /// Build one fragment per segment, in segment order
    ///
    /// Fails with [`PaginaError::InvalidLocator`] when the record identifier
    /// is malformed and with [`PaginaError::EmptySegments`] when `segments`
    /// is empty.
    pub fn synthesize(&self, record: &SourceRecord, segments: &[TextSegment]) -> Result<Vec<Fragment>> {
        let locator = Locator::parse(&record.identifier)?;
        if segments.is_empty() {
            return Err(PaginaError::EmptySegments {
                title: record.title.clone(),
            });
        }

        let total_parts = segments.len();
        let full_body: Arc<str> = Arc::from(record.body.as_str());

        let fragments = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                Fragment::new(
                    part_title(&record.title, index),
                    locator.for_part(index),
                    segment.text.clone(),
                    index,
                    total_parts,
                    Arc::clone(&full_body),
                )
            })
            .collect();

        Ok(fragments)
    }
}

fn part_title(title: &str, index: usize) -> String {
    if index == 0 {
        title.to_string()
    } else {
        format!("{title} (Part {})", index + 1)
    }
}
