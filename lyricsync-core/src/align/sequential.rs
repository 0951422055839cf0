//! Positional one-to-one alignment.

use super::{Aligner, warn_empty_reference};
use crate::lyrics::Lyrics;
use crate::types::{AlignedSegment, Segment};

/// Hands out reference lines in order, one per segment.
///
/// Once the lines run out, remaining segments keep their transcribed text.
/// No similarity scoring is performed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl Aligner for Sequential {
    fn align(&self, segments: &[Segment], reference: &Lyrics) -> Vec<AlignedSegment> {
        if reference.is_empty() {
            warn_empty_reference(segments.len());
        } else if segments.len() > reference.len() {
            tracing::warn!(
                exhausted_at = reference.len() + 1,
                remaining = segments.len() - reference.len(),
                "reference lyrics exhausted, keeping transcribed text for remaining segments"
            );
        }

        let mut lines = reference.iter();

        segments
            .iter()
            .cloned()
            .map(|segment| match lines.next() {
                Some(line) => AlignedSegment::reference(segment, line),
                None => AlignedSegment::transcribed(segment),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;

    fn segments(n: usize) -> Vec<Segment> {
        (0..n)
            .map(|i| Segment::new(format!(" heard {i}"), i as f64, i as f64 + 1.0))
            .collect()
    }

    #[test]
    fn uses_reference_when_enough_lines() {
        let reference = Lyrics::parse("one\ntwo\nthree\nfour");

        let aligned = Sequential.align(&segments(3), &reference);

        assert_eq!(aligned.len(), 3);
        assert!(aligned.iter().all(|a| a.source == Source::Reference));
        assert_eq!(aligned[0].aligned_text, "one");
        assert_eq!(aligned[2].aligned_text, "three");
    }

    #[test]
    fn falls_back_after_reference_is_exhausted() {
        let reference = Lyrics::parse("one\ntwo");

        let aligned = Sequential.align(&segments(5), &reference);

        let sources: Vec<_> = aligned.iter().map(|a| a.source).collect();
        assert_eq!(
            sources,
            [
                Source::Reference,
                Source::Reference,
                Source::Transcribed,
                Source::Transcribed,
                Source::Transcribed,
            ]
        );
        assert_eq!(aligned[2].aligned_text, " heard 2");
    }

    #[test]
    fn keeps_timestamps_and_provenance() {
        let reference = Lyrics::parse("Clean line");
        let input = vec![Segment::new(" clean lion", 1.5, 3.25)];

        let aligned = Sequential.align(&input, &reference);

        assert_eq!(aligned[0].start(), 1.5);
        assert_eq!(aligned[0].end(), 3.25);
        assert_eq!(aligned[0].original_text(), " clean lion");
        assert_eq!(aligned[0].aligned_text, "Clean line");
    }
}
