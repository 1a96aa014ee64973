//! Sentence-aware text segmentation
//!
//! Bodies that fit the length bound pass through as a single segment. Longer
//! bodies are cut into sentences which are packed greedily into segments; a
//! sentence that cannot fit on its own is hard-split at word boundaries, or at
//! the exact bound when no nearby whitespace exists.
//!
//! All lengths are counted in `char`s of the untrimmed text. Segment spans are
//! byte ranges into the body and always lie on UTF-8 boundaries.

use crate::{
    config::PaginationConfig,
    error::{PaginaError, Result},
    types::TextSegment,
};
use std::ops::Range;

/// Furthest a hard split may back off from the bound to land on whitespace
pub const WORD_BREAK_WINDOW: usize = 30;

/// Splits bodies into bounded, trimmed segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    max_length: usize,
}

impl Segmenter {
    /// Create a segmenter with the given bound in characters
    pub fn new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(PaginaError::InvalidConfiguration(
                "max_fragment_length must be positive, got 0".to_string(),
            ));
        }
        Ok(Self { max_length })
    }

    /// Create a segmenter from a validated configuration
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            max_length: config.max_fragment_length(),
        }
    }

    /// Length bound in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Split `body` into ordered segments
    ///
    /// Returns an empty vector for empty or whitespace-only bodies.
    pub fn segment(&self, body: &str) -> Vec<TextSegment> {
        let mut sink = SegmentSink::new(body);
        if body.is_empty() {
            return sink.finish();
        }

        if body.chars().count() <= self.max_length {
            sink.push(0..body.len());
            return sink.finish();
        }

        let sentences = split_sentences(body);
        if sentences.is_empty() {
            self.hard_split(body, 0..body.len(), &mut sink);
        } else {
            self.pack_sentences(body, sentences, &mut sink);
        }

        sink.finish()
    }

    /// Greedily pack sentences into segments no longer than the bound
    fn pack_sentences(&self, body: &str, sentences: Vec<Range<usize>>, sink: &mut SegmentSink) {
        let mut acc = Accumulator::default();

        for sentence in sentences {
            let len = body[sentence.clone()].chars().count();

            match self.place(&acc, len) {
                Placement::Oversized => {
                    if let Some(range) = acc.take() {
                        sink.push(range);
                    }
                    self.hard_split(body, sentence, sink);
                }
                Placement::Append => acc.append(sentence, len),
                Placement::Flush => {
                    if let Some(range) = acc.take() {
                        sink.push(range);
                    }
                    acc.append(sentence, len);
                }
            }
        }

        if let Some(range) = acc.take() {
            sink.push(range);
        }
    }

    fn place(&self, acc: &Accumulator, sentence_len: usize) -> Placement {
        if sentence_len > self.max_length {
            Placement::Oversized
        } else if acc.chars + sentence_len <= self.max_length {
            Placement::Append
        } else {
            Placement::Flush
        }
    }

    /// Cut `range` into chunks of at most `max_length` characters
    fn hard_split(&self, body: &str, range: Range<usize>, sink: &mut SegmentSink) {
        let piece = &body[range.clone()];
        let chars: Vec<char> = piece.chars().collect();
        // offsets[k] is the byte offset of char k; offsets[len] is the piece length
        let offsets: Vec<usize> = piece
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(piece.len()))
            .collect();
        let total = chars.len();

        let mut cursor = 0;
        while cursor < total {
            let naive_end = (cursor + self.max_length).min(total);
            let end = if naive_end < total {
                word_break(&chars, cursor, naive_end).unwrap_or(naive_end)
            } else {
                naive_end
            };

            sink.push(range.start + offsets[cursor]..range.start + offsets[end]);
            cursor = end;
        }
    }
}

/// How the next sentence joins the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Longer than the bound on its own; must be hard-split
    Oversized,
    /// Fits after the accumulated text
    Append,
    /// Fits alone but not after the accumulated text
    Flush,
}

/// The segment currently being packed
#[derive(Debug, Default)]
struct Accumulator {
    range: Option<Range<usize>>,
    chars: usize,
}

impl Accumulator {
    fn append(&mut self, sentence: Range<usize>, len: usize) {
        self.range = Some(match self.range.take() {
            Some(current) => current.start..sentence.end,
            None => sentence,
        });
        self.chars += len;
    }

    fn take(&mut self) -> Option<Range<usize>> {
        self.chars = 0;
        self.range.take()
    }
}

/// Collects segments and keeps their spans contiguous
///
/// Pieces that trim to nothing are dropped; their bytes are absorbed into the
/// span of the next emitted segment, and trailing bytes into the last one.
struct SegmentSink<'a> {
    body: &'a str,
    covered: usize,
    segments: Vec<TextSegment>,
}

impl<'a> SegmentSink<'a> {
    fn new(body: &'a str) -> Self {
        Self {
            body,
            covered: 0,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, range: Range<usize>) {
        let text = self.body[range.clone()].trim();
        if text.is_empty() {
            return;
        }

        self.segments.push(TextSegment {
            text: text.to_string(),
            order: self.segments.len(),
            span: self.covered..range.end,
        });
        self.covered = range.end;
    }

    fn finish(mut self) -> Vec<TextSegment> {
        if let Some(last) = self.segments.last_mut() {
            last.span.end = self.body.len();
        }
        self.segments
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Partition `body` into sentences
///
/// A sentence ends after a maximal run of `.`, `!` or `?`. Text after the
/// last run becomes a final unterminated sentence so no bytes are lost.
/// Returns an empty vector when the body has no terminator at all.
fn split_sentences(body: &str) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut in_run = false;

    for (offset, ch) in body.char_indices() {
        if is_terminator(ch) {
            in_run = true;
        } else if in_run {
            sentences.push(start..offset);
            start = offset;
            in_run = false;
        }
    }

    if sentences.is_empty() && !in_run {
        return sentences;
    }
    if start < body.len() {
        sentences.push(start..body.len());
    }
    sentences
}

/// Find whitespace to break at, searching back from `naive_end`
///
/// Only positions strictly after `cursor` and at most
/// [`WORD_BREAK_WINDOW`] characters before `naive_end` qualify.
fn word_break(chars: &[char], cursor: usize, naive_end: usize) -> Option<usize> {
    let floor = (cursor + 1).max(naive_end.saturating_sub(WORD_BREAK_WINDOW));
    (floor..=naive_end)
        .rev()
        .find(|&k| chars.get(k).is_some_and(|ch| ch.is_whitespace()))
}
