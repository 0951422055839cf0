//! Structural comparison of SRT output against reference lyrics.
//!
//! Subtitle text is reduced to its content lines (index lines, timestamp
//! lines and blank lines removed) and compared in order against the
//! non-blank reference lines. No case or punctuation normalization is done.

use crate::lyrics::Lyrics;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static INDEX_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("index pattern is valid"));

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3} -->").expect("timestamp pattern is valid")
});

/// How differing line counts are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Strictness {
    /// Compare only up to the shorter sequence; extra trailing lines on
    /// either side are ignored
    Lenient,
    /// Additionally require both sequences to have the same length
    Strict,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Outcome of comparing subtitles against reference lyrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No mismatch within the compared lines
    Equivalent { compared: usize },
    /// Content lines differ at 1-based position `line`
    Mismatch {
        line: usize,
        expected: String,
        found: String,
    },
    /// Strict mode only: every compared line matched but the counts differ
    LengthMismatch {
        subtitle_lines: usize,
        reference_lines: usize,
    },
}

impl Verdict {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Self::Equivalent { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equivalent { compared } => write!(f, "equivalent ({compared} lines compared)"),
            Self::Mismatch {
                line,
                expected,
                found,
            } => write!(f, "line {line} differs: expected {expected:?}, found {found:?}"),
            Self::LengthMismatch {
                subtitle_lines,
                reference_lines,
            } => write!(
                f,
                "line counts differ: {subtitle_lines} subtitle lines, {reference_lines} reference lines"
            ),
        }
    }
}

/// Content lines of SRT text, trimmed.
pub fn sanitize_subtitles(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .filter(|line| {
            !(line.trim().is_empty() || INDEX_LINE.is_match(line) || TIMESTAMP_LINE.is_match(line))
        })
        .map(str::trim)
        .collect()
}

/// Non-blank reference lines, trimmed.
pub fn sanitize_reference(text: &str) -> Lyrics {
    Lyrics::parse(text)
}

/// Compare SRT text with reference text line by line.
pub fn compare(subtitle_text: &str, reference_text: &str, strictness: Strictness) -> Verdict {
    let subtitles = sanitize_subtitles(subtitle_text);
    let reference = sanitize_reference(reference_text);

    let mismatch = subtitles
        .iter()
        .zip(reference.iter())
        .position(|(found, expected)| found != &expected);

    if let Some(i) = mismatch {
        return Verdict::Mismatch {
            line: i + 1,
            expected: reference.lines()[i].clone(),
            found: subtitles[i].to_string(),
        };
    }

    if strictness == Strictness::Strict && subtitles.len() != reference.len() {
        return Verdict::LengthMismatch {
            subtitle_lines: subtitles.len(),
            reference_lines: reference.len(),
        };
    }

    Verdict::Equivalent {
        compared: subtitles.len().min(reference.len()),
    }
}

/// Whether the SRT content lines match the reference lines.
pub fn is_equivalent(subtitle_text: &str, reference_text: &str, strictness: Strictness) -> bool {
    compare(subtitle_text, reference_text, strictness).is_equivalent()
}
