//! Levenshtein (edit) distance implementation
//!
//! Uses the Myers bit-parallel algorithm for patterns up to 64 characters and
//! a single-row DP fallback beyond that. The bounded variants terminate early
//! once the distance provably exceeds the threshold.

use ahash::AHashMap;
use smallvec::SmallVec;

/// Maximum pattern length handled by the single-word Myers routine.
const MYERS_BLOCK_SIZE: usize = 64;

fn myers_64(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();

    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(m.min(26));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut dist = m;
    let mask = 1u64 << (m - 1);

    for &tc in text {
        let eq = peq.get(&tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if hp & mask != 0 {
            dist += 1;
        } else if hn & mask != 0 {
            dist -= 1;
        }

        let hp = (hp << 1) | 1;
        let hn = hn << 1;
        vp = hn | !(xv | hp);
        vn = hp & xv;
    }

    dist
}

fn myers_64_bounded(pattern: &[char], text: &[char], max_distance: usize) -> Option<usize> {
    let m = pattern.len();
    let n = text.len();

    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(m.min(26));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut dist = m;
    let mask = 1u64 << (m - 1);

    for (j, &tc) in text.iter().enumerate() {
        let eq = peq.get(&tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if hp & mask != 0 {
            dist += 1;
        } else if hn & mask != 0 {
            dist -= 1;
        }

        // Each remaining text character can lower the score by at most one.
        let remaining = n - j - 1;
        if dist > max_distance + remaining {
            return None;
        }

        let hp = (hp << 1) | 1;
        let hn = hn << 1;
        vp = hn | !(xv | hp);
        vn = hp & xv;
    }

    (dist <= max_distance).then_some(dist)
}

fn dp_distance(a: &[char], b: &[char], max_distance: Option<usize>) -> Option<usize> {
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for j in 0..n {
            let cost = usize::from(sc != target[j]);
            let cell = (prev + cost).min(row[j + 1] + 1).min(row[j] + 1);
            prev = row[j + 1];
            row[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if let Some(max_d) = max_distance {
            if row_min > max_d {
                return None;
            }
        }
    }

    match max_distance {
        Some(max_d) if row[n] > max_d => None,
        _ => Some(row[n]),
    }
}

fn levenshtein_impl(a: &str, b: &str, max_distance: Option<usize>) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if let Some(max_d) = max_distance {
        if m.abs_diff(n) > max_d {
            return None;
        }
    }
    if m == 0 || n == 0 {
        return Some(m.max(n));
    }

    // Run Myers with the shorter string as the pattern.
    let (pattern, text) = if m <= n {
        (&a_chars[..], &b_chars[..])
    } else {
        (&b_chars[..], &a_chars[..])
    };

    if pattern.len() > MYERS_BLOCK_SIZE {
        return dp_distance(pattern, text, max_distance);
    }
    match max_distance {
        Some(max_d) => myers_64_bounded(pattern, text, max_d),
        None => Some(myers_64(pattern, text)),
    }
}

/// Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use fuzzscore::algorithms::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein_impl(a, b, None).unwrap_or_default()
}

/// Levenshtein distance with a threshold.
///
/// Returns `None` as soon as the distance provably exceeds `max_distance`.
///
/// # Example
/// ```
/// use fuzzscore::algorithms::levenshtein::levenshtein_distance_bounded;
///
/// assert_eq!(levenshtein_distance_bounded("abc", "abd", 2), Some(1));
/// assert_eq!(levenshtein_distance_bounded("abcdef", "ghijkl", 3), None);
/// ```
#[must_use]
pub fn levenshtein_distance_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    levenshtein_impl(a, b, Some(max_distance))
}

/// Normalized Levenshtein similarity in [0, 100]:
/// `100 * (1 - distance / max(len1, len2))`.
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let dist = levenshtein_distance(a, b);
    100.0 * (1.0 - dist as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_bounded() {
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_bounded("abc", "abcdefgh", 2), None);
    }

    #[test]
    fn test_long_strings_use_dp_fallback() {
        let a = "x".repeat(80);
        let mut b = a.clone();
        b.push('y');
        assert_eq!(levenshtein_distance(&a, &b), 1);
    }

    #[test]
    fn test_similarity_scale() {
        assert_eq!(levenshtein_similarity("", ""), 100.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 100.0);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
        // One substitution out of four characters.
        let s = levenshtein_similarity("abcd", "abce");
        assert!((s - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
    }
}
