//! Text normalization for robust comparison.
//!
//! Normalization lower-cases text, strips a fixed punctuation set, collapses
//! whitespace runs into a single space and trims both ends. It is pure and
//! idempotent: `normalize(&normalize(x)) == normalize(x)`.

use std::ops::Range;

/// Typographic marks stripped in addition to ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2018}', '\u{2019}', '\u{201A}', '\u{201C}', '\u{201D}', '\u{201E}', // quotes
    '\u{2013}', '\u{2014}', '\u{2026}', // dashes, ellipsis
    '\u{00A1}', '\u{00BF}', '\u{00AB}', '\u{00BB}', // inverted marks, guillemets
];

/// Whether `c` belongs to the fixed punctuation set.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Normalize text for comparison.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    normalize_with(text, |c, _| out.push(c));
    out
}

/// Normalized text that remembers where each character came from.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    /// Normalized characters
    pub chars: Vec<char>,
    /// Byte range in the source text for each normalized character
    origins: Vec<Range<usize>>,
}

impl Normalized {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Byte range in the source covering normalized characters `chars`.
    ///
    /// Returns `None` for an empty or out-of-bounds range.
    pub fn source_range(&self, chars: Range<usize>) -> Option<Range<usize>> {
        if chars.start >= chars.end || chars.end > self.origins.len() {
            return None;
        }
        let first = &self.origins[chars.start];
        let last = &self.origins[chars.end - 1];
        Some(first.start..last.end)
    }
}

impl std::fmt::Display for Normalized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Normalize text, keeping a source mapping for every output character.
pub fn normalize_mapped(text: &str) -> Normalized {
    let mut normalized = Normalized::default();
    normalize_with(text, |c, origin| {
        normalized.chars.push(c);
        normalized.origins.push(origin);
    });
    normalized
}

/// Stream normalized characters with their source byte ranges.
fn normalize_with(text: &str, mut emit: impl FnMut(char, Range<usize>)) {
    // start of the pending whitespace run, if any
    let mut pending_space: Option<Range<usize>> = None;
    let mut emitted = false;

    for (i, c) in text.char_indices() {
        let origin = i..i + c.len_utf8();

        for lc in c.to_lowercase() {
            if is_punctuation(lc) {
                continue;
            }

            if lc.is_whitespace() {
                pending_space.get_or_insert(origin.clone());
                continue;
            }

            if let Some(space) = pending_space.take()
                && emitted
            {
                emit(' ', space);
            }

            emit(lc, origin.clone());
            emitted = true;
        }
    }
}
