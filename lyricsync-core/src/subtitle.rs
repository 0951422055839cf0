//! SRT subtitle synthesis.
//!
//! Converts aligned segments into an SRT document. Timestamps pass through
//! unchanged; entries are never merged or reordered.

use crate::types::AlignedSegment;
use srtlib::{Subtitle, Timestamp};
use std::fmt;

/// Largest representable time, `255:59:59,999`.
const MAX_HOURS: u64 = u8::MAX as u64;

/// Convert seconds to an SRT timestamp by truncation.
///
/// Milliseconds come from the fractional part and hours, minutes and seconds
/// from the integer part, each truncated separately, so `3725.4` becomes
/// `01:02:05,400` rather than rounding through a total millisecond count.
/// Negative or non-finite input clamps to zero; times past 255 hours
/// saturate at `255:59:59,999`.
pub fn secs_to_timestamp(secs: f64) -> Timestamp {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    let whole = secs.trunc() as u64;

    if whole / 3600 > MAX_HOURS {
        return Timestamp::new(u8::MAX, 59, 59, 999);
    }

    let milliseconds = ((secs.fract() * 1000.0) as u16).min(999);

    Timestamp::new(
        (whole / 3600) as u8,
        ((whole / 60) % 60) as u8,
        (whole % 60) as u8,
        milliseconds,
    )
}

/// Format seconds as an SRT timestamp. See [`secs_to_timestamp`].
pub fn format_time(secs: f64) -> String {
    secs_to_timestamp(secs).to_string()
}

/// Ordered subtitles with contiguous indices starting at 1.
///
/// Only built by [`synthesize`], which guarantees the index invariant.
#[derive(Clone, Debug, Default)]
pub struct SubtitleDocument {
    entries: Vec<Subtitle>,
}

impl SubtitleDocument {
    pub fn entries(&self) -> &[Subtitle] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subtitle> {
        self.entries.iter()
    }

    /// First `head` and last `tail` entries, with `...` between when some are hidden.
    pub fn preview(&self, head: usize, tail: usize) -> String {
        let total = self.entries.len();

        if total <= head + tail {
            return self.to_string();
        }

        let mut out = String::new();
        for entry in &self.entries[..head] {
            out.push_str(&format!("{entry}\n\n"));
        }
        out.push_str("...\n\n");
        for entry in &self.entries[total - tail..] {
            out.push_str(&format!("{entry}\n\n"));
        }
        out
    }
}

impl fmt::Display for SubtitleDocument {
    /// SRT text: each entry followed by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries
            .iter()
            .try_for_each(|entry| write!(f, "{entry}\n\n"))
    }
}

impl<'a> IntoIterator for &'a SubtitleDocument {
    type Item = &'a Subtitle;
    type IntoIter = std::slice::Iter<'a, Subtitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Convert aligned segments to a subtitle document, one entry per segment.
pub fn synthesize(aligned: &[AlignedSegment]) -> SubtitleDocument {
    let entries = aligned
        .iter()
        .zip(1..)
        .map(|(a, index)| create_subtitle(a, index))
        .collect();

    SubtitleDocument { entries }
}

fn create_subtitle(aligned: &AlignedSegment, index: usize) -> Subtitle {
    Subtitle::new(
        index,
        secs_to_timestamp(aligned.start()),
        secs_to_timestamp(aligned.end()),
        aligned.aligned_text.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;
    use rstest::rstest;

    fn aligned(text: &str, start: f64, end: f64) -> AlignedSegment {
        AlignedSegment::reference(Segment::new(" asr text", start, end), text)
    }

    #[rstest]
    #[case(0.0, "00:00:00,000")]
    #[case(3725.4, "01:02:05,400")]
    #[case(59.5, "00:00:59,500")]
    #[case(61.5, "00:01:01,500")]
    #[case(360_000.25, "100:00:00,250")]
    #[case(-1.0, "00:00:00,000")]
    #[case(f64::NAN, "00:00:00,000")]
    fn formats_time(#[case] secs: f64, #[case] expected: &str) {
        assert_eq!(format_time(secs), expected);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 0.0009999 s of fraction truncates to 0 ms
        assert_eq!(format_time(1.0009999), "00:00:01,000");
        assert_eq!(format_time(2.9996), "00:00:02,999");
    }

    #[test]
    fn saturates_past_255_hours() {
        assert_eq!(format_time(255.0 * 3600.0 + 1.5), "255:00:01,500");
        assert_eq!(format_time(256.0 * 3600.0), "255:59:59,999");
        assert_eq!(format_time(1e12), "255:59:59,999");
    }

    #[test]
    fn numbers_entries_from_one() {
        let doc = synthesize(&[
            aligned("First", 0.0, 1.1),
            aligned("Second", 1.5, 3.1),
            aligned("Third", 3.1, 4.0),
        ]);

        assert_eq!(doc.len(), 3);
        let indices: Vec<_> = doc.iter().map(|e| e.num).collect();
        assert_eq!(indices, [1, 2, 3]);
        assert_eq!(doc.entries()[1].text, "Second");
        assert_eq!(doc.entries()[1].start_time.to_string(), "00:00:01,500");
    }

    #[test]
    fn serializes_byte_exact() {
        let doc = synthesize(&[aligned("Hello world.", 0.0, 1.1), aligned("", 1.5, 3725.4)]);

        assert_eq!(
            doc.to_string(),
            "1\n00:00:00,000 --> 00:00:01,100\nHello world.\n\n\
             2\n00:00:01,500 --> 01:02:05,400\n\n\n"
        );
    }

    #[test]
    fn handles_empty_input() {
        let doc = synthesize(&[]);

        assert!(doc.is_empty());
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn previews_head_and_tail() {
        let segments: Vec<_> = (0..5)
            .map(|i| aligned(&format!("line {i}"), i as f64, i as f64 + 1.0))
            .collect();
        let doc = synthesize(&segments);

        let preview = doc.preview(1, 1);

        assert!(preview.starts_with("1\n00:00:00,000 --> 00:00:01,000\nline 0\n\n...\n\n"));
        assert!(preview.ends_with("5\n00:00:04,000 --> 00:00:05,000\nline 4\n\n"));
        assert!(!preview.contains("line 2"));
        assert_eq!(doc.preview(3, 3), doc.to_string());
    }
}
