//! Sentence-aware pagination of long prose into bounded fragments
//!
//! A [`SourceRecord`] (title, locator, body) is split by the [`Segmenter`]
//! into trimmed [`TextSegment`]s no longer than a configured bound, preferring
//! sentence boundaries, then word boundaries, then exact cuts. The
//! [`FragmentSynthesizer`] turns those segments into a family of
//! [`Fragment`]s with part titles, distinct per-part locators on the same host,
//! and a shared handle to the full original body.
//!
//! # Example
//!
//! ```rust
//! use pagina_core::{PaginationConfig, Paginator, SourceRecord};
//!
//! let config = PaginationConfig::new(40).unwrap();
//! let record = SourceRecord::new(
//!     "Rust",
//!     "https://en.wikipedia.org/wiki/Rust",
//!     "Rust is a systems language. It focuses on safety. It is fast too.",
//! );
//!
//! let fragments = Paginator::new(config).paginate(&[record]).unwrap();
//! assert_eq!(fragments[0].title(), "Rust");
//! assert_eq!(fragments[1].title(), "Rust (Part 2)");
//! assert_eq!(
//!     fragments[1].identifier(),
//!     "https://en.wikipedia.org/wiki/Rust/part-2"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod locator;
pub mod paginator;
pub mod response;
pub mod segmenter;
pub mod synthesizer;
pub mod types;

// Re-export key types
pub use config::{
    ConfigBuilder, InvalidLocatorPolicy, PaginationConfig, PaginationSection,
    DEFAULT_MAX_FRAGMENT_LENGTH,
};
pub use error::{PaginaError, Result};
pub use locator::Locator;
pub use paginator::{PaginationSummary, Paginator, RecordOutcome};
pub use response::records_from_response;
pub use segmenter::Segmenter;
pub use synthesizer::FragmentSynthesizer;
pub use types::{Continuation, Fragment, SourceRecord, TextSegment};

// Convenience functions

/// Split `body` into segments of at most `max_length` characters
pub fn segment(body: &str, max_length: usize) -> Result<Vec<TextSegment>> {
    Ok(Segmenter::new(max_length)?.segment(body))
}

/// Build the fragment family for `record` from its segments
pub fn synthesize(record: &SourceRecord, segments: &[TextSegment]) -> Result<Vec<Fragment>> {
    FragmentSynthesizer::new().synthesize(record, segments)
}

/// Paginate records with the default configuration
pub fn paginate(records: &[SourceRecord]) -> Result<Vec<Fragment>> {
    Paginator::default().paginate(records)
}
