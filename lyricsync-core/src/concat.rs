//! Joined text with per-piece offsets.
//!
//! All offsets are in characters, not bytes. Pieces are joined with exactly
//! one [`SEPARATOR`] at every boundary, including around empty pieces, so
//! piece `i` starts at the sum of the preceding piece lengths plus `i`.

use std::ops::Range;

/// Separator inserted between pieces. Always one character wide.
pub const SEPARATOR: char = ' ';

/// Pieces of text joined by [`SEPARATOR`], remembering where each piece landed.
#[derive(Clone, Debug, Default)]
pub struct Concatenation {
    text: String,
    ranges: Vec<Range<usize>>,
}

impl Concatenation {
    pub fn new<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut ranges = Vec::new();
        let mut offset = 0;

        for (i, piece) in pieces.into_iter().enumerate() {
            if i > 0 {
                text.push(SEPARATOR);
                offset += 1;
            }

            let piece = piece.as_ref();
            let len = piece.chars().count();
            text.push_str(piece);
            ranges.push(offset..offset + len);
            offset += len;
        }

        Self { text, ranges }
    }

    /// The joined text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character range of piece `index` within [`Self::text`].
    pub fn range(&self, index: usize) -> Option<Range<usize>> {
        self.ranges.get(index).cloned()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of pieces joined.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
