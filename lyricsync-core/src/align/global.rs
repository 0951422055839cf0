//! Overlap-based alignment against the whole reference text.
//!
//! The transcript segments and the reference lines are each normalized and
//! joined into one string. Matching blocks between the two strings are
//! computed once; each segment then looks at the blocks overlapping its own
//! range of the joined transcript. When the best block covers enough of the
//! segment, the part of the reference that block matched inside the segment
//! replaces the transcribed text, restored to its original case and
//! punctuation.

use super::{Aligner, warn_empty_reference};
use crate::concat::Concatenation;
use crate::lyrics::Lyrics;
use crate::matcher::{MatchSpan, match_chars};
use crate::normalize::{Normalized, normalize, normalize_mapped};
use crate::types::{AlignedSegment, Segment};
use std::ops::Range;

/// Default minimum coverage, exclusive.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 0.7;

/// Global fuzzy matching of the joined transcript against the joined reference.
#[derive(Clone, Copy, Debug)]
pub struct FuzzyGlobal {
    /// A segment takes reference text only if its best block covers
    /// strictly more than this fraction of its characters
    pub coverage_threshold: f64,
}

impl Default for FuzzyGlobal {
    fn default() -> Self {
        Self {
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
        }
    }
}

impl FuzzyGlobal {
    pub fn new(coverage_threshold: f64) -> Self {
        Self { coverage_threshold }
    }
}

impl Aligner for FuzzyGlobal {
    fn align(&self, segments: &[Segment], reference: &Lyrics) -> Vec<AlignedSegment> {
        if reference.is_empty() {
            warn_empty_reference(segments.len());
        }

        let transcript = Concatenation::new(segments.iter().map(|s| normalize(&s.text)));
        let transcript_chars: Vec<char> = transcript.text().chars().collect();

        let display = Concatenation::new(reference.iter());
        let reference_text = normalize_mapped(display.text());

        let blocks = match_chars(&transcript_chars, &reference_text.chars);

        tracing::debug!(
            transcript_chars = transcript_chars.len(),
            reference_chars = reference_text.len(),
            blocks = blocks.len(),
            "matched transcript against reference"
        );

        let target = Target {
            blocks: &blocks,
            normalized: &reference_text,
            display: display.text(),
        };

        segments
            .iter()
            .cloned()
            .zip(transcript.ranges())
            .map(|(segment, range)| self.align_segment(segment, range.clone(), &target))
            .collect()
    }
}

impl FuzzyGlobal {
    fn align_segment(&self, segment: Segment, range: Range<usize>, target: &Target) -> AlignedSegment {
        let Some((block, coverage)) = target.best_block(&range) else {
            return AlignedSegment::transcribed(segment);
        };

        if coverage <= self.coverage_threshold {
            return AlignedSegment::transcribed(segment).with_score(coverage);
        }

        match target.reference_text(&block, &range) {
            Some(text) => AlignedSegment::reference(segment, text).with_score(coverage),
            None => AlignedSegment::transcribed(segment).with_score(coverage),
        }
    }
}

/// Matching blocks plus the reference they point into.
struct Target<'a> {
    /// Blocks sorted by transcript position
    blocks: &'a [MatchSpan],
    /// Normalized reference, mapped back into `display`
    normalized: &'a Normalized,
    /// Reference lines joined as they appear in the lyrics
    display: &'a str,
}

impl Target<'_> {
    /// Blocks overlapping transcript range `range`.
    fn overlapping(&self, range: &Range<usize>) -> impl Iterator<Item = &MatchSpan> {
        let from = self
            .blocks
            .partition_point(|b| b.transcript_end() <= range.start);

        self.blocks[from..]
            .iter()
            .take_while(move |b| b.transcript_offset < range.end)
    }

    /// Block covering the largest fraction of the range, with that fraction.
    ///
    /// Ties go to the block earliest in the transcript.
    fn best_block(&self, range: &Range<usize>) -> Option<(MatchSpan, f64)> {
        let len = range.len();
        if len == 0 {
            return None;
        }

        self.overlapping(range)
            .map(|b| (*b, b.overlap(range.start, range.end) as f64 / len as f64))
            .fold(None, |best, (b, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((b, c)),
            })
    }

    /// Original reference text matched by `block` within transcript range `range`.
    fn reference_text(&self, block: &MatchSpan, range: &Range<usize>) -> Option<String> {
        let overlap_start = block.transcript_offset.max(range.start);
        let overlap_len = block.overlap(range.start, range.end);

        let start = block.ref_offset + (overlap_start - block.transcript_offset);

        let bytes = self.normalized.source_range(start..start + overlap_len)?;
        let text = self.display[bytes].trim();

        (!text.is_empty()).then(|| text.to_string())
    }
}
