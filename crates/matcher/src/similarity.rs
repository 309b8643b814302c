//! Partial-ratio text similarity.
//!
//! The score of a query against a value is the best insert/delete ratio of
//! the shorter string against any same-length window of the longer one,
//! scaled to `0.0..=100.0`. Windows include the shorter prefixes and
//! suffixes at the edges of the longer string, so a query that hangs off
//! either end of a value still scores partially.
//!
//! Both sides are lower-cased before comparison.
//!
//! ```rust
//! use matcher::similarity::{matches, partial_ratio};
//!
//! assert_eq!(partial_ratio("acme", "AcmeTools"), 100.0);
//! assert!(matches("martilo", "Martillo 500g", 70));
//! assert!(!matches("destornillador", "Martillo 500g", 70));
//! ```

use std::collections::HashMap;

/// Acceptance threshold used by every search in this crate.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Pre-lowered query side of a similarity comparison.
///
/// Filtering a whole catalog compares one query against many values, so
/// the query is lower-cased and compiled into LCS bit masks once.
#[derive(Debug, Clone)]
pub struct PartialMatcher {
    needle: Vec<char>,
    pattern: BitPattern,
    threshold: u8,
}

impl PartialMatcher {
    pub fn new(query: &str, threshold: u8) -> Self {
        let needle: Vec<char> = query.to_lowercase().chars().collect();
        Self {
            pattern: BitPattern::new(&needle),
            needle,
            threshold,
        }
    }

    /// Score `value` against the query, `0.0..=100.0`.
    pub fn score(&self, value: &str) -> f64 {
        if self.needle.is_empty() {
            // No constraint: everything matches.
            return 100.0;
        }
        let value: Vec<char> = value.to_lowercase().chars().collect();
        if value.is_empty() {
            return 0.0;
        }
        if self.needle.len() <= value.len() {
            best_window_ratio(&self.pattern, &value)
        } else {
            best_window_ratio(&BitPattern::new(&value), &self.needle)
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        if !self.needle.is_empty() && value.is_empty() {
            return false;
        }
        self.score(value) >= f64::from(self.threshold)
    }
}

/// Partial-ratio similarity between `query` and `value`, `0.0..=100.0`.
pub fn partial_ratio(query: &str, value: &str) -> f64 {
    PartialMatcher::new(query, 0).score(value)
}

/// `true` when the partial-ratio of `query` against `value` reaches `threshold`.
///
/// An empty query matches every value; a non-empty query never matches an
/// empty value.
pub fn matches(query: &str, value: &str, threshold: u8) -> bool {
    PartialMatcher::new(query, threshold).matches(value)
}

/// Bit-parallel LCS pattern (Hyyrö): one mask per distinct character, with
/// bit `i` set where the pattern holds that character at position `i`.
#[derive(Debug, Clone)]
struct BitPattern {
    len: usize,
    words: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl BitPattern {
    fn new(chars: &[char]) -> Self {
        let words = chars.len().div_ceil(64).max(1);
        let mut masks: HashMap<char, Vec<u64>> = HashMap::new();
        for (i, &c) in chars.iter().enumerate() {
            masks.entry(c).or_insert_with(|| vec![0; words])[i / 64] |= 1 << (i % 64);
        }
        Self {
            len: chars.len(),
            words,
            masks,
        }
    }

    fn contains(&self, c: char) -> bool {
        self.masks.contains_key(&c)
    }

    fn start(&self) -> Vec<u64> {
        vec![u64::MAX; self.words]
    }

    /// Advance the state vector by one text character:
    /// `V = (V + (V & M)) | (V & !M)`, with carries across words.
    fn step(&self, state: &mut [u64], c: char) {
        let Some(mask) = self.masks.get(&c) else {
            return;
        };
        let mut carry = false;
        for (v, &m) in state.iter_mut().zip(mask) {
            let u = *v & m;
            let (sum, c1) = v.overflowing_add(u);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            carry = c1 || c2;
            *v = sum | (*v & !m);
        }
    }

    /// LCS so far: zero bits within the first `len` positions.
    fn lcs(&self, state: &[u64]) -> usize {
        state
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let bits = (self.len - (i * 64).min(self.len)).min(64);
                let live = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
                (!v & live).count_ones() as usize
            })
            .sum()
    }

    fn lcs_with(&self, text: &[char]) -> usize {
        let mut state = self.start();
        for &c in text {
            self.step(&mut state, c);
        }
        self.lcs(&state)
    }
}

/// Best ratio of `needle` against every window of `haystack`.
/// Requires `needle.len <= haystack.len()` and a non-empty needle.
///
/// A window whose leading character (or, for prefixes, trailing character)
/// does not occur in the needle never beats its neighbour one position
/// over, so only windows bounded by needle characters are scored.
fn best_window_ratio(needle: &BitPattern, haystack: &[char]) -> f64 {
    let n = needle.len;
    let h = haystack.len();
    let mut best = 0.0f64;

    // Full-length windows first; a perfect hit ends the scan.
    for start in 0..=(h - n) {
        if start < h - n && !needle.contains(haystack[start]) {
            continue;
        }
        let lcs = needle.lcs_with(&haystack[start..start + n]);
        best = best.max(indel_ratio(n, n, lcs));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Prefix windows share one incremental pass.
    let mut state = needle.start();
    for (i, &c) in haystack[..n - 1].iter().enumerate() {
        needle.step(&mut state, c);
        if needle.contains(c) {
            best = best.max(indel_ratio(n, i + 1, needle.lcs(&state)));
        }
    }

    for start in (h - n + 1)..h {
        if !needle.contains(haystack[start]) {
            continue;
        }
        let lcs = needle.lcs_with(&haystack[start..]);
        best = best.max(indel_ratio(n, h - start, lcs));
    }
    best
}

/// Normalized insert/delete similarity: `200 * LCS / (|a| + |b|)`.
fn indel_ratio(a_len: usize, b_len: usize, lcs: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs as f64 / total as f64
}
