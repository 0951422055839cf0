//! Approximate sequence matching.
//!
//! Finds non-overlapping matching blocks between two sequences by recursively
//! taking the longest common run and matching on either side of it. The
//! longest-run search walks an occurrence index of the second sequence, so
//! each step only visits positions where the current element actually occurs
//! instead of scanning every pair of positions.

use std::collections::HashMap;
use std::hash::Hash;

/// A run of identical elements shared by the transcript and the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchSpan {
    /// Start position in the transcript sequence
    pub transcript_offset: usize,
    /// Start position in the reference sequence
    pub ref_offset: usize,
    /// Number of matching elements
    pub length: usize,
}

impl MatchSpan {
    pub fn new(transcript_offset: usize, ref_offset: usize, length: usize) -> Self {
        Self {
            transcript_offset,
            ref_offset,
            length,
        }
    }

    pub fn transcript_end(&self) -> usize {
        self.transcript_offset + self.length
    }

    pub fn ref_end(&self) -> usize {
        self.ref_offset + self.length
    }

    /// Number of elements this span shares with transcript range `[start, end)`.
    pub fn overlap(&self, start: usize, end: usize) -> usize {
        let lo = self.transcript_offset.max(start);
        let hi = self.transcript_end().min(end);
        hi.saturating_sub(lo)
    }
}

/// Matcher between a transcript sequence `a` and a reference sequence `b`.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Ascending positions of every element in `b`
    b2j: HashMap<T, Vec<usize>>,
}

impl<'a, T> SequenceMatcher<'a, T>
where
    T: Copy + Eq + Hash,
{
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<T, Vec<usize>> = HashMap::new();
        for (j, &elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        Self { a, b, b2j }
    }

    /// Longest matching run within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the run starting earliest in `a`, then earliest in `b`.
    /// Returns a zero-length span when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchSpan {
        let mut best = MatchSpan::new(alo, blo, 0);
        if alo >= ahi || blo >= bhi {
            return best;
        }

        // run length ending at b[j], stored at slot j - blo + 1 for the
        // previous and current row; slot 0 stays zero
        let width = bhi - blo + 1;
        let mut prev = vec![0usize; width];
        let mut curr = vec![0usize; width];
        let mut prev_touched: Vec<usize> = Vec::new();
        let mut curr_touched: Vec<usize> = Vec::new();

        for i in alo..ahi {
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                let from = positions.partition_point(|&j| j < blo);

                for &j in positions[from..].iter().take_while(|&&j| j < bhi) {
                    let slot = j - blo + 1;
                    let k = prev[slot - 1] + 1;
                    curr[slot] = k;
                    curr_touched.push(slot);

                    if k > best.length {
                        best = MatchSpan::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }

            // reset only what the finished row wrote
            for &slot in &prev_touched {
                prev[slot] = 0;
            }
            prev_touched.clear();

            std::mem::swap(&mut prev, &mut curr);
            std::mem::swap(&mut prev_touched, &mut curr_touched);
        }

        best
    }

    /// All matching blocks, sorted by transcript position, adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<MatchSpan> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.length == 0 {
                continue;
            }

            if alo < m.transcript_offset && blo < m.ref_offset {
                queue.push((alo, m.transcript_offset, blo, m.ref_offset));
            }
            if m.transcript_end() < ahi && m.ref_end() < bhi {
                queue.push((m.transcript_end(), ahi, m.ref_end(), bhi));
            }

            blocks.push(m);
        }

        blocks.sort_unstable();

        let mut merged: Vec<MatchSpan> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.transcript_end() == block.transcript_offset
                        && last.ref_end() == block.ref_offset =>
                {
                    last.length += block.length;
                }
                _ => merged.push(block),
            }
        }

        merged
    }

    /// Similarity in `[0, 1]`: twice the matched elements over the total length.
    pub fn ratio(&self) -> f64 {
        let matched: usize = self.matching_blocks().iter().map(|m| m.length).sum();
        similarity(matched, self.a.len() + self.b.len())
    }

    /// Upper bound on [`Self::ratio`] from element counts, ignoring order.
    pub fn quick_ratio(&self) -> f64 {
        let mut avail: HashMap<T, usize> = self
            .b2j
            .iter()
            .map(|(&elt, positions)| (elt, positions.len()))
            .collect();

        let matched = self
            .a
            .iter()
            .filter(|elt| match avail.get_mut(elt) {
                Some(n) if *n > 0 => {
                    *n -= 1;
                    true
                }
                _ => false,
            })
            .count();

        similarity(matched, self.a.len() + self.b.len())
    }

    /// Upper bound on [`Self::quick_ratio`] from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        similarity(self.a.len().min(self.b.len()), self.a.len() + self.b.len())
    }
}

fn similarity(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

/// Matching blocks between two strings, compared character by character.
pub fn match_chars(a: &[char], b: &[char]) -> Vec<MatchSpan> {
    SequenceMatcher::new(a, b).matching_blocks()
}
