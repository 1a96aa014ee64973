//! Batch pagination over many source records
//!
//! Each record is segmented and synthesized independently. With the
//! `parallel` feature records fan out over rayon; results are always
//! collected back in input order.

use crate::{
    config::{InvalidLocatorPolicy, PaginationConfig},
    error::{PaginaError, Result},
    segmenter::Segmenter,
    synthesizer::FragmentSynthesizer,
    types::{Fragment, SourceRecord},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of paginating one record
#[derive(Debug)]
pub enum RecordOutcome {
    /// The record produced a family of fragments
    Paginated(Vec<Fragment>),
    /// The record body was empty or whitespace-only
    Blank,
    /// Segmentation or synthesis failed
    Failed(PaginaError),
}

/// Counts describing a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Records received
    pub records: usize,
    /// Records filtered out for having no content
    pub blank: usize,
    /// Records that failed and were skipped or aborted the batch
    pub failed: usize,
    /// Fragments emitted
    pub fragments: usize,
    /// Records split into more than one fragment
    pub multi_part: usize,
}

impl PaginationSummary {
    /// Tally a list of outcomes
    pub fn from_outcomes(outcomes: &[RecordOutcome]) -> Self {
        outcomes.iter().fold(
            Self {
                records: outcomes.len(),
                ..Self::default()
            },
            |mut summary, outcome| {
                match outcome {
                    RecordOutcome::Paginated(fragments) => {
                        summary.fragments += fragments.len();
                        if fragments.len() > 1 {
                            summary.multi_part += 1;
                        }
                    }
                    RecordOutcome::Blank => summary.blank += 1,
                    RecordOutcome::Failed(_) => summary.failed += 1,
                }
                summary
            },
        )
    }
}

/// Segments and synthesizes batches of records
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    segmenter: Segmenter,
    synthesizer: FragmentSynthesizer,
    policy: InvalidLocatorPolicy,
    parallel: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl Paginator {
    /// Create a paginator from a validated configuration
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            segmenter: Segmenter::from_config(&config),
            synthesizer: FragmentSynthesizer::new(),
            policy: config.on_invalid_locator(),
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Enable or disable parallel fan-out
    ///
    /// Has no effect without the `parallel` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel && cfg!(feature = "parallel");
        self
    }

    /// The segmenter used for every record
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Paginate a single record
    pub fn paginate_record(&self, record: &SourceRecord) -> RecordOutcome {
        if record.is_blank() {
            log::debug!("skipping blank record '{}'", record.title);
            return RecordOutcome::Blank;
        }

        let segments = self.segmenter.segment(&record.body);
        log::debug!(
            "record '{}' split into {} segment(s)",
            record.title,
            segments.len()
        );

        match self.synthesizer.synthesize(record, &segments) {
            Ok(fragments) => RecordOutcome::Paginated(fragments),
            Err(e) => RecordOutcome::Failed(e),
        }
    }

    /// Paginate every record, one outcome per input record in input order
    pub fn paginate_each(&self, records: &[SourceRecord]) -> Vec<RecordOutcome> {
        if self.parallel {
            self.fan_out(records)
        } else {
            records
                .iter()
                .map(|record| self.paginate_record(record))
                .collect()
        }
    }

    #[cfg(feature = "parallel")]
    fn fan_out(&self, records: &[SourceRecord]) -> Vec<RecordOutcome> {
        records
            .par_iter()
            .map(|record| self.paginate_record(record))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn fan_out(&self, records: &[SourceRecord]) -> Vec<RecordOutcome> {
        records
            .iter()
            .map(|record| self.paginate_record(record))
            .collect()
    }

    /// Paginate a batch into one flat fragment sequence
    ///
    /// Families appear in input order. Record errors abort the batch under
    /// [`InvalidLocatorPolicy::Fail`] and are logged and dropped under
    /// [`InvalidLocatorPolicy::Skip`].
    pub fn paginate(&self, records: &[SourceRecord]) -> Result<Vec<Fragment>> {
        let (fragments, _) = self.paginate_with_summary(records)?;
        Ok(fragments)
    }

    /// Like [`Paginator::paginate`], also returning batch counts
    pub fn paginate_with_summary(
        &self,
        records: &[SourceRecord],
    ) -> Result<(Vec<Fragment>, PaginationSummary)> {
        let outcomes = self.paginate_each(records);
        let summary = PaginationSummary::from_outcomes(&outcomes);

        let mut fragments = Vec::with_capacity(summary.fragments);
        for (record, outcome) in records.iter().zip(outcomes) {
            match outcome {
                RecordOutcome::Paginated(family) => fragments.extend(family),
                RecordOutcome::Blank => {}
                RecordOutcome::Failed(e) => match self.policy {
                    InvalidLocatorPolicy::Skip if e.is_record_error() => {
                        log::warn!("skipping record '{}': {e}", record.title);
                    }
                    _ => return Err(e),
                },
            }
        }

        Ok((fragments, summary))
    }
}
