//! Indel (insertion/deletion) distance via bit-parallel LCS
//!
//! The distance between two sequences restricted to insertions and deletions
//! is `len1 + len2 - 2 * LCS`. The LCS length is computed with the Hyyrö
//! bit-vector algorithm, processing 64 pattern characters per machine word.
//!
//! The pattern-side bit masks are built once into a [`PatternMask`] and can be
//! reused across many text sequences. This is what the cached scorers rely on:
//! one mask build per query, then O(n) bit operations per choice.

use ahash::AHashMap;
use smallvec::{smallvec, SmallVec};

type MaskWords = SmallVec<[u64; 2]>;

/// Per-character bit masks for one pattern, spanning one or more 64-bit words.
///
/// Bit `i` of the mask for character `c` is set when `pattern[i] == c`.
pub struct PatternMask {
    len: usize,
    words: usize,
    masks: AHashMap<char, MaskWords>,
    zeros: MaskWords,
}

impl PatternMask {
    /// Build the masks for `pattern`. O(len) time, one map entry per distinct
    /// character.
    #[must_use]
    pub fn build(pattern: &[char]) -> Self {
        let len = pattern.len();
        let words = len.div_ceil(64);
        let mut masks: AHashMap<char, MaskWords> = AHashMap::with_capacity(len.min(64));
        for (i, &c) in pattern.iter().enumerate() {
            let entry = masks.entry(c).or_insert_with(|| smallvec![0u64; words]);
            entry[i / 64] |= 1u64 << (i % 64);
        }
        Self {
            len,
            words,
            masks,
            zeros: smallvec![0u64; words],
        }
    }

    /// Length of the pattern the masks were built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn get(&self, c: char) -> &[u64] {
        self.masks.get(&c).map_or(&self.zeros, |m| m.as_slice())
    }
}

#[inline]
fn count_matches(v: &[u64], last_mask: u64) -> usize {
    let words = v.len();
    let mut matched = 0usize;
    for &word in &v[..words - 1] {
        matched += (!word).count_ones() as usize;
    }
    matched + (!v[words - 1] & last_mask).count_ones() as usize
}

/// Length of the longest common subsequence between the pattern behind `pm`
/// and `text`.
///
/// When `required` is given, returns `None` as soon as it becomes provable
/// that the LCS cannot reach that length, without finishing the scan.
#[must_use]
pub fn lcs_length(pm: &PatternMask, text: &[char], required: Option<usize>) -> Option<usize> {
    let m = pm.len();
    let n = text.len();
    if m == 0 || n == 0 {
        return match required {
            Some(req) if req > 0 => None,
            _ => Some(0),
        };
    }

    let last_bits = m - (pm.words - 1) * 64;
    let last_mask = if last_bits == 64 {
        !0u64
    } else {
        (1u64 << last_bits) - 1
    };

    if pm.words == 1 {
        // Single-word fast path: no carry propagation needed.
        let mut v = !0u64;
        for (i, &c) in text.iter().enumerate() {
            let x = pm.get(c)[0];
            let u = v & x;
            v = v.wrapping_add(u) | (v ^ u);
            if let Some(req) = required {
                let have = (!v & last_mask).count_ones() as usize;
                if have + (n - 1 - i) < req {
                    return None;
                }
            }
        }
        return Some((!v & last_mask).count_ones() as usize);
    }

    let mut v: MaskWords = smallvec![!0u64; pm.words];
    for (i, &c) in text.iter().enumerate() {
        let x = pm.get(c);
        let mut carry = 0u64;
        for w in 0..pm.words {
            let u = v[w] & x[w];
            let sum = u128::from(v[w]) + u128::from(u) + u128::from(carry);
            carry = (sum >> 64) as u64;
            v[w] = (sum as u64) | (v[w] ^ u);
        }
        if let Some(req) = required {
            let have = count_matches(&v, last_mask);
            if have + (n - 1 - i) < req {
                return None;
            }
        }
    }
    Some(count_matches(&v, last_mask))
}

#[inline]
fn indel_impl(pm: &PatternMask, text: &[char], max_dist: Option<usize>) -> Option<usize> {
    let m = pm.len();
    let n = text.len();
    if let Some(max_d) = max_dist {
        // The length difference is a lower bound on the distance.
        if m.abs_diff(n) > max_d {
            return None;
        }
    }
    let required = max_dist.map(|max_d| {
        let lensum = m + n;
        if lensum <= max_d {
            0
        } else {
            (lensum - max_d + 1) / 2
        }
    });
    let lcs = lcs_length(pm, text, required)?;
    let dist = m + n - 2 * lcs;
    match max_dist {
        Some(max_d) if dist > max_d => None,
        _ => Some(dist),
    }
}

/// Indel distance between the pattern behind `pm` and `text`.
///
/// # Example
/// ```
/// use fuzzscore::algorithms::indel::{indel_distance, PatternMask};
///
/// let pattern: Vec<char> = "lewenstein".chars().collect();
/// let text: Vec<char> = "levenshtein".chars().collect();
/// let pm = PatternMask::build(&pattern);
/// assert_eq!(indel_distance(&pm, &text), 3);
/// ```
#[must_use]
pub fn indel_distance(pm: &PatternMask, text: &[char]) -> usize {
    // Without a budget the scan always completes.
    indel_impl(pm, text, None).unwrap_or_default()
}

/// Indel distance with a distance budget.
///
/// Returns `None` once the distance provably exceeds `max_dist`, which lets
/// the ratio functions stop early when a score cutoff cannot be reached.
#[must_use]
pub fn indel_distance_bounded(pm: &PatternMask, text: &[char], max_dist: usize) -> Option<usize> {
    indel_impl(pm, text, Some(max_dist))
}
