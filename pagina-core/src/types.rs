//! Records, segments and fragments

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::{Arc, LazyLock};

static PART_SUFFIX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r" \(Part \d+\)$"));

const ENCYCLOPEDIA_SUFFIX: &str = " - Wikipedia";

/// One logical document before splitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Human-readable label
    pub title: String,
    /// Absolute URI locating the document
    pub identifier: String,
    /// Full text to paginate
    #[serde(default)]
    pub body: String,
}

impl SourceRecord {
    /// Create a new record
    pub fn new(
        title: impl Into<String>,
        identifier: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            identifier: identifier.into(),
            body: body.into(),
        }
    }

    /// Whether the body has no visible content
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// A trimmed slice of a body produced by the segmenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSegment {
    /// Trimmed text, never empty
    pub text: String,
    /// Position among the segments of the same body
    pub order: usize,
    /// Untrimmed byte range in the body
    ///
    /// Spans of consecutive segments are contiguous and together cover the
    /// whole body.
    pub span: Range<usize>,
}

/// Where a fragment sits inside its family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The only part
    Single,
    /// First of several parts
    First,
    /// Neither first nor last
    Middle,
    /// Last of several parts
    Last,
}

impl Continuation {
    /// Derive the position from a part index and family size
    pub fn of(order: usize, total_parts: usize) -> Self {
        let has_next = order + 1 < total_parts;
        match (order > 0, has_next) {
            (false, false) => Continuation::Single,
            (false, true) => Continuation::First,
            (true, true) => Continuation::Middle,
            (true, false) => Continuation::Last,
        }
    }

    /// A later part follows this one
    pub fn continues(self) -> bool {
        matches!(self, Continuation::First | Continuation::Middle)
    }

    /// An earlier part precedes this one
    pub fn continued_from_previous(self) -> bool {
        matches!(self, Continuation::Middle | Continuation::Last)
    }

    /// Indicator shown next to a part of a series, if any
    pub fn label(self) -> Option<&'static str> {
        match self {
            Continuation::Single => None,
            Continuation::First => Some("Continues in next result"),
            Continuation::Middle | Continuation::Last => Some("Continued from previous result"),
        }
    }
}

/// A display-ready, bounded-length part of a source record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    title: String,
    identifier: String,
    display_text: String,
    order: usize,
    total_parts: usize,
    full_body: Arc<str>,
}

impl Fragment {
    pub(crate) fn new(
        title: String,
        identifier: String,
        display_text: String,
        order: usize,
        total_parts: usize,
        full_body: Arc<str>,
    ) -> Self {
        Self {
            title,
            identifier,
            display_text,
            order,
            total_parts,
            full_body,
        }
    }

    /// Part title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Part locator
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Trimmed segment text
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// 0-based part index
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of parts in the family
    pub fn total_parts(&self) -> usize {
        self.total_parts
    }

    /// Whether the source record was split into several parts
    pub fn is_multi_part(&self) -> bool {
        self.total_parts > 1
    }

    /// The complete original body, shared by the whole family
    pub fn full_body(&self) -> &str {
        &self.full_body
    }

    /// Shared handle to the original body
    pub fn full_body_arc(&self) -> &Arc<str> {
        &self.full_body
    }

    /// Position of this part within its family
    pub fn continuation(&self) -> Continuation {
        Continuation::of(self.order, self.total_parts)
    }

    /// Host of the locator, for display next to the full document
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.identifier)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }

    /// Title of the underlying document, without part or site suffixes
    pub fn document_title(&self) -> &str {
        let mut title = self.title.as_str();
        if let Ok(re) = PART_SUFFIX.as_ref() {
            if let Some(m) = re.find(title) {
                title = &title[..m.start()];
            }
        }
        title.strip_suffix(ENCYCLOPEDIA_SUFFIX).unwrap_or(title)
    }
}
