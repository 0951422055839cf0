//! Closest reference line lookup, one segment at a time.

use super::{Aligner, warn_empty_reference};
use crate::lyrics::Lyrics;
use crate::matcher::SequenceMatcher;
use crate::types::{AlignedSegment, Segment};

/// Default minimum similarity ratio, inclusive.
pub const DEFAULT_PER_LINE_THRESHOLD: f64 = 0.5;

/// Picks the single most similar reference line for each segment.
///
/// Segments are compared against lines independently, using the raw
/// segment text. Suited to lyrics that are already split the way the
/// transcriber splits segments.
#[derive(Clone, Copy, Debug)]
pub struct FuzzyPerLine {
    /// Minimum similarity ratio for a line to be accepted
    pub threshold: f64,
}

impl Default for FuzzyPerLine {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PER_LINE_THRESHOLD,
        }
    }
}

impl FuzzyPerLine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Index and ratio of the most similar line.
///
/// Equal ratios go to the line that sorts last.
fn closest(text: &[char], reference: &Lyrics, lines: &[Vec<char>]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (i, line) in lines.iter().enumerate() {
        let m = SequenceMatcher::new(line, text);
        let floor = best.map_or(0.0, |(_, r)| r);

        // cheap upper bounds first
        if m.real_quick_ratio() < floor || m.quick_ratio() < floor {
            continue;
        }

        let ratio = m.ratio();
        let better = match best {
            None => true,
            Some((j, r)) => ratio > r || (ratio == r && reference.lines()[i] > reference.lines()[j]),
        };
        if better {
            best = Some((i, ratio));
        }
    }

    best
}

impl Aligner for FuzzyPerLine {
    fn align(&self, segments: &[Segment], reference: &Lyrics) -> Vec<AlignedSegment> {
        if reference.is_empty() {
            warn_empty_reference(segments.len());
        }

        let lines: Vec<Vec<char>> = reference.iter().map(|l| l.chars().collect()).collect();

        segments
            .iter()
            .cloned()
            .map(|segment| {
                let text: Vec<char> = segment.text.chars().collect();

                match closest(&text, reference, &lines) {
                    Some((i, ratio)) if ratio >= self.threshold => {
                        tracing::trace!(line = i + 1, ratio, "closest reference line");
                        AlignedSegment::reference(segment, &reference.lines()[i]).with_score(ratio)
                    }
                    Some((_, ratio)) => AlignedSegment::transcribed(segment).with_score(ratio),
                    None => AlignedSegment::transcribed(segment),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;

    #[test]
    fn picks_most_similar_line() {
        let reference = Lyrics::parse("Hold on, I'm coming\nJust hold on\nDon't you worry");
        let segments = vec![
            Segment::new("don't you wory", 0.0, 1.0),
            Segment::new("hold on im coming", 1.0, 2.0),
        ];

        let aligned = FuzzyPerLine::default().align(&segments, &reference);

        assert_eq!(aligned[0].aligned_text, "Don't you worry");
        assert_eq!(aligned[1].aligned_text, "Hold on, I'm coming");
        assert!(aligned.iter().all(|a| a.source == Source::Reference));
    }

    #[test]
    fn may_reuse_a_line() {
        let reference = Lyrics::parse("la la la");
        let segments = vec![
            Segment::new("la la la", 0.0, 1.0),
            Segment::new("la la la", 1.0, 2.0),
        ];

        let aligned = FuzzyPerLine::default().align(&segments, &reference);

        assert!(aligned.iter().all(|a| a.aligned_text == "la la la"));
        assert_eq!(aligned[0].score, Some(1.0));
    }

    #[test]
    fn keeps_transcribed_text_below_threshold() {
        let reference = Lyrics::parse("completely different words");
        let segments = vec![Segment::new("xyz", 0.0, 1.0)];

        let aligned = FuzzyPerLine::default().align(&segments, &reference);

        assert_eq!(aligned[0].source, Source::Transcribed);
        assert_eq!(aligned[0].aligned_text, "xyz");
        // the rejected ratio is kept as provenance
        let score = aligned[0].score.unwrap();
        assert!(score > 0.0 && score < 0.5, "score: {score}");
    }

    #[test]
    fn ratio_at_threshold_is_accepted() {
        // "abcd" vs "bcde": ratio 0.75
        let reference = Lyrics::parse("abcd");
        let segments = vec![Segment::new("bcde", 0.0, 1.0)];

        let accepted = FuzzyPerLine::new(0.75).align(&segments, &reference);
        let rejected = FuzzyPerLine::new(0.76).align(&segments, &reference);

        assert_eq!(accepted[0].source, Source::Reference);
        assert_eq!(rejected[0].source, Source::Transcribed);
    }

    #[test]
    fn ties_go_to_greatest_line() {
        let reference = Lyrics::parse("abcX\nabcY");
        let segments = vec![Segment::new("abcZ", 0.0, 1.0)];

        let aligned = FuzzyPerLine::default().align(&segments, &reference);

        assert_eq!(aligned[0].aligned_text, "abcY");

        // order of the lyrics does not matter
        let reversed = Lyrics::parse("abcY\nabcX");
        let aligned = FuzzyPerLine::default().align(&segments, &reversed);

        assert_eq!(aligned[0].aligned_text, "abcY");
    }
}
