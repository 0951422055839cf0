//! Transcript-to-lyrics alignment policies.
//!
//! Every policy implements [`Aligner`] and yields exactly one
//! [`AlignedSegment`] per input segment, in input order, so subtitle
//! synthesis does not depend on which policy ran.

mod global;
mod per_line;
mod sequential;

pub use global::{DEFAULT_COVERAGE_THRESHOLD, FuzzyGlobal};
pub use per_line::{DEFAULT_PER_LINE_THRESHOLD, FuzzyPerLine};
pub use sequential::Sequential;

use crate::lyrics::Lyrics;
use crate::types::{AlignedSegment, Segment};

/// Decides, per segment, whether reference text replaces the transcribed text.
///
/// Alignment never fails: empty segments and empty lyrics are handled by
/// falling back to the transcribed text.
pub trait Aligner {
    fn align(&self, segments: &[Segment], reference: &Lyrics) -> Vec<AlignedSegment>;
}

impl<A: Aligner + ?Sized> Aligner for Box<A> {
    fn align(&self, segments: &[Segment], reference: &Lyrics) -> Vec<AlignedSegment> {
        (**self).align(segments, reference)
    }
}

/// Counts of where aligned text came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignmentSummary {
    /// Total aligned segments
    pub segments: usize,
    /// Segments whose text was taken from the reference
    pub reference: usize,
    /// Segments that kept the transcribed text
    pub transcribed: usize,
}

impl AlignmentSummary {
    pub fn from_aligned(aligned: &[AlignedSegment]) -> Self {
        let reference = aligned.iter().filter(|a| a.is_reference()).count();

        Self {
            segments: aligned.len(),
            reference,
            transcribed: aligned.len() - reference,
        }
    }
}

fn warn_empty_reference(segments: usize) {
    if segments > 0 {
        tracing::warn!(segments, "reference lyrics are empty, keeping transcribed text");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;

    #[test]
    fn summarizes_sources() {
        let aligned = vec![
            AlignedSegment::reference(Segment::new("a", 0.0, 1.0), "A"),
            AlignedSegment::transcribed(Segment::new("b", 1.0, 2.0)),
            AlignedSegment::reference(Segment::new("c", 2.0, 3.0), "C"),
        ];

        let summary = AlignmentSummary::from_aligned(&aligned);

        assert_eq!(
            summary,
            AlignmentSummary {
                segments: 3,
                reference: 2,
                transcribed: 1,
            }
        );
    }

    #[test]
    fn all_policies_fall_back_on_empty_reference() {
        let segments = vec![
            Segment::new(" the qick brown fox", 0.0, 1.0),
            Segment::new(" jumps over", 1.0, 2.0),
        ];
        let reference = Lyrics::default();

        let aligners: Vec<Box<dyn Aligner>> = vec![
            Box::new(Sequential),
            Box::new(FuzzyGlobal::default()),
            Box::new(FuzzyPerLine::default()),
        ];

        for aligner in aligners {
            let aligned = aligner.align(&segments, &reference);

            assert_eq!(aligned.len(), 2);
            for (a, s) in aligned.iter().zip(&segments) {
                assert_eq!(a.source, Source::Transcribed);
                assert_eq!(a.aligned_text, s.text);
            }
        }
    }

    #[test]
    fn all_policies_keep_empty_segments() {
        let segments = vec![
            Segment::new("", 0.0, 0.5),
            Segment::new("hello there", 0.5, 1.0),
        ];
        let reference = Lyrics::parse("hello there");

        let aligners: Vec<Box<dyn Aligner>> = vec![
            Box::new(FuzzyGlobal::default()),
            Box::new(FuzzyPerLine::default()),
        ];

        for aligner in aligners {
            let aligned = aligner.align(&segments, &reference);

            assert_eq!(aligned.len(), 2);
            assert_eq!(aligned[0].aligned_text, "");
            assert_eq!(aligned[0].source, Source::Transcribed);
            assert_eq!(aligned[1].aligned_text, "hello there");
        }
    }
}
