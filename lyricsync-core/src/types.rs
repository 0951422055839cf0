//! Core types for lyricsync-core

use crate::error::{InputError, Result};
use serde::Deserialize;

/// Text segment with timestamps.
///
/// Represents a portion of transcribed text with start and end times in seconds,
/// as produced by an external ASR collaborator.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Segment {
    /// Transcribed text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Check timestamps are finite, non-negative and ordered.
    ///
    /// `index` is the 1-based position used in error messages.
    pub fn validate(&self, index: usize) -> Result<()> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end >= self.start;

        if ok {
            Ok(())
        } else {
            Err(InputError::InvalidTimestamps {
                index,
                start: self.start,
                end: self.end,
            }
            .into())
        }
    }
}

/// Reject the first segment with unusable timestamps.
pub fn validate_segments(segments: &[Segment]) -> Result<()> {
    segments
        .iter()
        .zip(1..)
        .try_for_each(|(s, i)| s.validate(i))
}

/// Where an aligned segment's text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Text substituted from the reference lyrics
    Reference,
    /// Original ASR text kept
    Transcribed,
}

/// A segment paired with the text chosen for it by an aligner.
///
/// The original segment is kept unmodified as provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedSegment {
    pub segment: Segment,
    pub aligned_text: String,
    pub source: Source,
    /// Match score behind the decision: coverage for overlap matching,
    /// similarity ratio for closest-line lookup
    pub score: Option<f64>,
}

impl AlignedSegment {
    /// Use reference text for this segment.
    pub fn reference(segment: Segment, text: impl Into<String>) -> Self {
        Self {
            segment,
            aligned_text: text.into(),
            source: Source::Reference,
            score: None,
        }
    }

    /// Keep the transcribed text verbatim.
    pub fn transcribed(segment: Segment) -> Self {
        let aligned_text = segment.text.clone();
        Self {
            segment,
            aligned_text,
            source: Source::Transcribed,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn original_text(&self) -> &str {
        &self.segment.text
    }

    pub fn start(&self) -> f64 {
        self.segment.start
    }

    pub fn end(&self) -> f64 {
        self.segment.end
    }

    pub fn is_reference(&self) -> bool {
        self.source == Source::Reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn accepts_ordered_segments() {
        let segments = vec![
            Segment::new(" Hello", 0.0, 1.0),
            Segment::new(" world", 1.0, 1.0),
        ];

        assert!(validate_segments(&segments).is_ok());
    }

    #[test]
    fn rejects_end_before_start() {
        let segments = vec![
            Segment::new("ok", 0.0, 1.0),
            Segment::new("bad", 2.0, 1.5),
        ];

        let err = validate_segments(&segments).unwrap_err();

        match err {
            Error::Input(InputError::InvalidTimestamps { index, start, end }) => {
                assert_eq!(index, 2);
                assert_eq!(start, 2.0);
                assert_eq!(end, 1.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_and_nan_times() {
        assert!(Segment::new("a", -0.5, 1.0).validate(1).is_err());
        assert!(Segment::new("a", 0.0, f64::NAN).validate(1).is_err());
    }

    #[test]
    fn transcribed_keeps_text_verbatim() {
        let aligned = AlignedSegment::transcribed(Segment::new(" hey you ", 0.0, 1.0));

        assert_eq!(aligned.aligned_text, " hey you ");
        assert_eq!(aligned.original_text(), " hey you ");
        assert_eq!(aligned.source, Source::Transcribed);
        assert!(aligned.score.is_none());
    }
}
