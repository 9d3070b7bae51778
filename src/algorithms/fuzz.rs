//! The fuzz ratio family
//!
//! Ten scoring functions over the indel distance core, all returning a score
//! in [0, 100]:
//! - `ratio`: similarity of the verbatim strings
//! - `partial_ratio`: best substring alignment of the shorter string
//! - `token_sort_ratio` / `partial_token_sort_ratio`: word order ignored
//! - `token_set_ratio` / `partial_token_set_ratio`: word order and duplicates
//!   ignored
//! - `token_ratio` / `partial_token_ratio`: best of sort and set variants
//! - `weighted_ratio`: length-aware combination of the above
//! - `quick_ratio`: character-frequency upper bound, no edit distance
//!
//! Every function takes a `score_cutoff`; a score provably below the cutoff
//! is returned as 0.0, which lets the distance core stop scanning early.
//! Callers that need exact sub-cutoff scores pass a cutoff of 0.
//!
//! Each function also has a prepared-query form used by the cached scorers in
//! [`crate::cached`]; the stateless functions here are thin wrappers around
//! the same implementations, so cached and one-shot scoring always agree.

use std::collections::BTreeSet;

use ahash::AHashMap;

use super::indel::{indel_distance, indel_distance_bounded, PatternMask};
use super::tokenize;

// ---------------------------------------------------------------------------
// Weighted-ratio tuning constants
//
// Empirically tuned in the reference implementations; changing any of them
// changes scores and is a compatibility break.
// ---------------------------------------------------------------------------

/// Discount applied to token-based sub-scores inside `weighted_ratio`.
pub const UNBASE_SCALE: f64 = 0.95;

/// Discount applied to partial-ratio sub-scores for moderately different
/// string lengths (length ratio in (1.5, 8]).
pub const PARTIAL_SCALE: f64 = 0.9;

/// Discount applied to partial-ratio sub-scores for very different string
/// lengths (length ratio above 8).
pub const PARTIAL_SCALE_LONG: f64 = 0.6;

/// Length ratio below which `weighted_ratio` uses the token branch.
pub const TOKEN_LENGTH_RATIO: f64 = 1.5;

/// Length ratio above which the stronger partial discount applies.
pub const LONG_LENGTH_RATIO: f64 = 8.0;

// ---------------------------------------------------------------------------
// Prepared query state
// ---------------------------------------------------------------------------

/// Preprocessed query for the character-level ratios: the character sequence
/// plus its pattern masks, built once and reused per choice.
pub struct IndelQuery {
    chars: Vec<char>,
    pm: PatternMask,
}

impl IndelQuery {
    pub(crate) fn new(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let pm = PatternMask::build(&chars);
        Self { chars, pm }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Preprocessed query for the token-based ratios: sorted-token form (with
/// masks) and the unique-token set.
pub struct TokenQuery {
    raw_empty: bool,
    sorted: IndelQuery,
    set: BTreeSet<String>,
}

impl TokenQuery {
    pub(crate) fn new(s: &str) -> Self {
        Self {
            raw_empty: s.is_empty(),
            sorted: IndelQuery::new(&tokenize::sorted_join(s)),
            set: tokenize::token_set(s),
        }
    }
}

/// Preprocessed query for `weighted_ratio`: both the verbatim and the token
/// representations.
pub struct WeightedQuery {
    seq: IndelQuery,
    tokens: TokenQuery,
}

impl WeightedQuery {
    pub(crate) fn new(s: &str) -> Self {
        Self {
            seq: IndelQuery::new(s),
            tokens: TokenQuery::new(s),
        }
    }
}

/// Preprocessed query for `quick_ratio`: a character histogram.
pub struct HistogramQuery {
    counts: AHashMap<char, usize>,
    len: usize,
}

impl HistogramQuery {
    pub(crate) fn new(s: &str) -> Self {
        let mut counts: AHashMap<char, usize> = AHashMap::new();
        let mut len = 0usize;
        for c in s.chars() {
            *counts.entry(c).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }
}

// ---------------------------------------------------------------------------
// Cutoff plumbing
// ---------------------------------------------------------------------------

pub(crate) fn clamp_cutoff(score_cutoff: f64) -> f64 {
    if score_cutoff.is_finite() {
        score_cutoff.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn apply_cutoff(score: f64, cutoff: f64) -> f64 {
    if score < cutoff {
        0.0
    } else {
        score
    }
}

/// Empty inputs short-circuit every ratio: both empty scores 100, one empty
/// scores 0, regardless of cutoff.
fn empty_guard(query_empty: bool, choice_empty: bool) -> Option<f64> {
    if query_empty || choice_empty {
        Some(if query_empty && choice_empty { 100.0 } else { 0.0 })
    } else {
        None
    }
}

/// Largest indel distance still reaching `cutoff` for the given length sum.
fn distance_budget(lensum: usize, cutoff: f64) -> Option<usize> {
    if cutoff <= 0.0 {
        return None;
    }
    let mut budget = (lensum as f64 * (1.0 - cutoff / 100.0)).floor() as usize;
    // Rounding in the product can land just below the true integral budget,
    // which would zero a match whose score equals the cutoff exactly. Widen
    // while the next distance still scores at or above the cutoff.
    while budget < lensum && 100.0 * (1.0 - (budget + 1) as f64 / lensum as f64) >= cutoff {
        budget += 1;
    }
    Some(budget)
}

// ---------------------------------------------------------------------------
// Scoring cores
// ---------------------------------------------------------------------------

/// Indel similarity of the prepared query against `choice`, normalized by the
/// length sum, honoring the distance budget the cutoff implies.
fn indel_ratio_core(q: &IndelQuery, choice: &[char], cutoff: f64) -> f64 {
    let lensum = q.len() + choice.len();
    if lensum == 0 {
        return 100.0;
    }
    let dist = match distance_budget(lensum, cutoff) {
        Some(budget) => match indel_distance_bounded(&q.pm, choice, budget) {
            Some(d) => d,
            None => return 0.0,
        },
        None => indel_distance(&q.pm, choice),
    };
    apply_cutoff(100.0 * (1.0 - dist as f64 / lensum as f64), cutoff)
}

/// One-off indel score between two canonical strings (no cutoff).
fn indel_score(a: &str, b: &str) -> f64 {
    let q = IndelQuery::new(a);
    let choice: Vec<char> = b.chars().collect();
    indel_ratio_core(&q, &choice, 0.0)
}

fn window_score(pm: &PatternMask, window: &[char]) -> f64 {
    let lensum = pm.len() + window.len();
    if lensum == 0 {
        return 100.0;
    }
    let dist = indel_distance(pm, window);
    100.0 * (1.0 - dist as f64 / lensum as f64)
}

/// Best indel similarity of the (shorter) pattern behind `pm` against prefix
/// overhangs, equal-length windows and suffix overhangs of `longer`. The
/// pattern masks are reused for every window.
fn best_alignment(pm: &PatternMask, longer: &[char]) -> f64 {
    let s_len = pm.len();
    let l_len = longer.len();
    if s_len == 0 {
        return if l_len == 0 { 100.0 } else { 0.0 };
    }
    if l_len == 0 {
        return 0.0;
    }

    let mut best = 0.0f64;

    // Prefix overhangs: pattern against longer[..i].
    for i in 1..s_len.min(l_len) {
        let score = window_score(pm, &longer[..i]);
        if score > best {
            best = score;
            if best >= 100.0 {
                return 100.0;
            }
        }
    }

    // Equal-length windows.
    if l_len >= s_len {
        for start in 0..=(l_len - s_len) {
            let score = window_score(pm, &longer[start..start + s_len]);
            if score > best {
                best = score;
                if best >= 100.0 {
                    return 100.0;
                }
            }
        }
    }

    // Suffix overhangs: pattern against longer[i..].
    let suffix_from = if l_len >= s_len { l_len - s_len + 1 } else { 0 };
    for i in suffix_from..l_len {
        let score = window_score(pm, &longer[i..]);
        if score > best {
            best = score;
            if best >= 100.0 {
                return 100.0;
            }
        }
    }

    best
}

fn partial_core(q: &IndelQuery, choice: &[char]) -> f64 {
    if q.len() <= choice.len() {
        let mut best = best_alignment(&q.pm, choice);
        // For equal lengths the alignment is not symmetric; try both orders.
        if best < 100.0 && q.len() == choice.len() {
            let pm_choice = PatternMask::build(choice);
            best = best.max(best_alignment(&pm_choice, &q.chars));
        }
        best
    } else {
        let pm_choice = PatternMask::build(choice);
        best_alignment(&pm_choice, &q.chars)
    }
}

/// One-off partial score between two canonical strings (no cutoff).
fn partial_score(a: &str, b: &str) -> f64 {
    let q = IndelQuery::new(a);
    let choice: Vec<char> = b.chars().collect();
    partial_core(&q, &choice)
}

fn token_set_score(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let sets = tokenize::decompose(a, b);
    if sets.is_empty() {
        return 0.0;
    }
    if !sets.has_intersection {
        return indel_score(&sets.combined_a, &sets.combined_b);
    }
    indel_score(&sets.intersection, &sets.combined_a)
        .max(indel_score(&sets.intersection, &sets.combined_b))
        .max(indel_score(&sets.combined_a, &sets.combined_b))
}

fn partial_token_set_score(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // Any shared token is a perfect partial alignment.
    if a.intersection(b).next().is_some() {
        return 100.0;
    }
    let joined_a = a.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
    let joined_b = b.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
    partial_score(&joined_a, &joined_b)
}

fn token_ratio_score(q: &TokenQuery, choice: &str) -> f64 {
    let choice_sorted: Vec<char> = tokenize::sorted_join(choice).chars().collect();
    let sort = indel_ratio_core(&q.sorted, &choice_sorted, 0.0);
    let set = token_set_score(&q.set, &tokenize::token_set(choice));
    sort.max(set)
}

fn partial_token_ratio_score(q: &TokenQuery, choice: &str) -> f64 {
    let choice_sorted: Vec<char> = tokenize::sorted_join(choice).chars().collect();
    let sort = partial_core(&q.sorted, &choice_sorted);
    let set = partial_token_set_score(&q.set, &tokenize::token_set(choice));
    sort.max(set)
}

fn weighted_score(q: &WeightedQuery, choice: &str, choice_chars: &[char], cutoff: f64) -> f64 {
    // The base ratio may be zeroed by the cutoff; that never changes the
    // maximum, because the final cutoff check would zero such a result anyway.
    let base = indel_ratio_core(&q.seq, choice_chars, cutoff);

    let len1 = q.seq.len() as f64;
    let len2 = choice_chars.len() as f64;
    let len_ratio = if len1 > len2 { len1 / len2 } else { len2 / len1 };

    if len_ratio < TOKEN_LENGTH_RATIO {
        let token = token_ratio_score(&q.tokens, choice);
        base.max(token * UNBASE_SCALE)
    } else {
        let partial_scale = if len_ratio <= LONG_LENGTH_RATIO {
            PARTIAL_SCALE
        } else {
            PARTIAL_SCALE_LONG
        };
        let partial = partial_core(&q.seq, choice_chars);
        let partial_token = partial_token_ratio_score(&q.tokens, choice);
        base.max(partial * partial_scale)
            .max(partial_token * UNBASE_SCALE * partial_scale)
    }
}

// ---------------------------------------------------------------------------
// Prepared-query entry points (shared with the cached scorers)
// ---------------------------------------------------------------------------

pub(crate) fn ratio_prepared(q: &IndelQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.is_empty(), choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let choice_chars: Vec<char> = choice.chars().collect();
    indel_ratio_core(q, &choice_chars, cutoff)
}

pub(crate) fn partial_ratio_prepared(q: &IndelQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.is_empty(), choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let choice_chars: Vec<char> = choice.chars().collect();
    apply_cutoff(partial_core(q, &choice_chars), cutoff)
}

pub(crate) fn token_sort_ratio_prepared(q: &TokenQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let choice_sorted: Vec<char> = tokenize::sorted_join(choice).chars().collect();
    indel_ratio_core(&q.sorted, &choice_sorted, cutoff)
}

pub(crate) fn partial_token_sort_ratio_prepared(
    q: &TokenQuery,
    choice: &str,
    score_cutoff: f64,
) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let choice_sorted: Vec<char> = tokenize::sorted_join(choice).chars().collect();
    apply_cutoff(partial_core(&q.sorted, &choice_sorted), cutoff)
}

pub(crate) fn token_set_ratio_prepared(q: &TokenQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    apply_cutoff(token_set_score(&q.set, &tokenize::token_set(choice)), cutoff)
}

pub(crate) fn partial_token_set_ratio_prepared(
    q: &TokenQuery,
    choice: &str,
    score_cutoff: f64,
) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    apply_cutoff(
        partial_token_set_score(&q.set, &tokenize::token_set(choice)),
        cutoff,
    )
}

pub(crate) fn token_ratio_prepared(q: &TokenQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    apply_cutoff(token_ratio_score(q, choice), cutoff)
}

pub(crate) fn partial_token_ratio_prepared(q: &TokenQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.raw_empty, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    apply_cutoff(partial_token_ratio_score(q, choice), cutoff)
}

pub(crate) fn weighted_ratio_prepared(q: &WeightedQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.seq.is_empty(), choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let choice_chars: Vec<char> = choice.chars().collect();
    apply_cutoff(weighted_score(q, choice, &choice_chars, cutoff), cutoff)
}

pub(crate) fn quick_ratio_prepared(q: &HistogramQuery, choice: &str, score_cutoff: f64) -> f64 {
    if let Some(score) = empty_guard(q.len == 0, choice.is_empty()) {
        return score;
    }
    let cutoff = clamp_cutoff(score_cutoff);
    let mut counts: AHashMap<char, usize> = AHashMap::new();
    let mut choice_len = 0usize;
    for c in choice.chars() {
        *counts.entry(c).or_insert(0) += 1;
        choice_len += 1;
    }
    let matches: usize = counts
        .iter()
        .map(|(c, &n)| n.min(q.counts.get(c).copied().unwrap_or(0)))
        .sum();
    let score = 100.0 * (2.0 * matches as f64) / (q.len + choice_len) as f64;
    apply_cutoff(score, cutoff)
}

// ---------------------------------------------------------------------------
// Stateless public API
// ---------------------------------------------------------------------------

/// Indel similarity of the two strings verbatim.
///
/// # Example
/// ```
/// use fuzzscore::ratio;
///
/// let score = ratio("this is a test", "this is a test!", 0.0);
/// assert!((score - 96.55).abs() < 0.01);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    ratio_prepared(&IndelQuery::new(a), b, score_cutoff)
}

/// Best indel similarity of the shorter string against all alignments within
/// the longer one.
///
/// # Example
/// ```
/// use fuzzscore::partial_ratio;
///
/// assert_eq!(partial_ratio("this is a test", "this is a test!", 0.0), 100.0);
/// ```
#[must_use]
pub fn partial_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    partial_ratio_prepared(&IndelQuery::new(a), b, score_cutoff)
}

/// `ratio` on the sorted-token forms of both strings; word order is ignored.
///
/// # Example
/// ```
/// use fuzzscore::token_sort_ratio;
///
/// let score = token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear", 0.0);
/// assert_eq!(score, 100.0);
/// ```
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    token_sort_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// `partial_ratio` on the sorted-token forms of both strings.
#[must_use]
pub fn partial_token_sort_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    partial_token_sort_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// Best score over the token-set recombinations (intersection against each
/// "intersection + difference" string, and those strings against each other);
/// word order and duplicates are ignored.
///
/// # Example
/// ```
/// use fuzzscore::token_set_ratio;
///
/// let score = token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear", 0.0);
/// assert_eq!(score, 100.0);
/// ```
#[must_use]
pub fn token_set_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    token_set_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// Set-based partial ratio; any shared token short-circuits to 100.
#[must_use]
pub fn partial_token_set_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    partial_token_set_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// `max(token_sort_ratio, token_set_ratio)`.
#[must_use]
pub fn token_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    token_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// `max(partial_token_sort_ratio, partial_token_set_ratio)`.
#[must_use]
pub fn partial_token_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    partial_token_ratio_prepared(&TokenQuery::new(a), b, score_cutoff)
}

/// Length-aware combination of the other ratios.
///
/// Similar-length strings compare via `ratio` and a discounted `token_ratio`;
/// very different lengths bring in the partial family with the discounts in
/// [`PARTIAL_SCALE`] / [`PARTIAL_SCALE_LONG`].
#[must_use]
pub fn weighted_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    weighted_ratio_prepared(&WeightedQuery::new(a), b, score_cutoff)
}

/// Character-frequency upper bound on `ratio`: twice the multiset character
/// overlap divided by the length sum. A coarse pre-filter, not an edit
/// distance.
///
/// # Example
/// ```
/// use fuzzscore::{quick_ratio, ratio};
///
/// assert!(quick_ratio("appel", "apple", 0.0) >= ratio("appel", "apple", 0.0));
/// ```
#[must_use]
pub fn quick_ratio(a: &str, b: &str, score_cutoff: f64) -> f64 {
    quick_ratio_prepared(&HistogramQuery::new(a), b, score_cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIOS: [fn(&str, &str, f64) -> f64; 10] = [
        ratio,
        partial_ratio,
        token_sort_ratio,
        partial_token_sort_ratio,
        token_set_ratio,
        partial_token_set_ratio,
        token_ratio,
        partial_token_ratio,
        weighted_ratio,
        quick_ratio,
    ];

    #[test]
    fn test_ratio_one_extra_character() {
        let score = ratio("this is a test", "this is a test!", 0.0);
        assert!((score - 100.0 * 28.0 / 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_ratio_substring() {
        assert_eq!(partial_ratio("this is a test", "this is a test!", 0.0), 100.0);
        assert_eq!(partial_ratio("test", "this is a test", 0.0), 100.0);
    }

    #[test]
    fn test_token_sort_ignores_order() {
        let score = token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear", 0.0);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_token_set_ignores_duplicates() {
        let score = token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear", 0.0);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_partial_token_set_shared_token() {
        assert_eq!(
            partial_token_set_ratio("green apple pie", "apple tart", 0.0),
            100.0
        );
    }

    #[test]
    fn test_quick_ratio_empty_handling() {
        assert_eq!(quick_ratio("", "", 0.0), 100.0);
        assert_eq!(quick_ratio("abc", "", 0.0), 0.0);
        assert_eq!(quick_ratio("", "abc", 0.0), 0.0);
    }

    #[test]
    fn test_quick_ratio_upper_bounds_ratio() {
        for (a, b) in [
            ("appel", "apple"),
            ("new york mets", "new york jets"),
            ("fuzzy wuzzy", "wuzzy fuzzy"),
            ("abcd", "dcba"),
        ] {
            assert!(quick_ratio(a, b, 0.0) >= ratio(a, b, 0.0));
        }
    }

    #[test]
    fn test_identity() {
        for f in RATIOS {
            assert_eq!(f("new york mets", "new york mets", 0.0), 100.0);
        }
    }

    #[test]
    fn test_empty_handling_all_ratios() {
        for f in RATIOS {
            assert_eq!(f("", "", 0.0), 100.0);
            assert_eq!(f("", "abc", 0.0), 0.0);
            assert_eq!(f("abc", "", 0.0), 0.0);
        }
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("new york mets vs atlanta braves", "atlanta braves vs new york mets"),
            ("a", "xyz"),
            ("the quick brown fox", "fox brown quick the"),
            ("ab", "ababababababababababab"),
        ];
        for f in RATIOS {
            for (a, b) in pairs {
                let score = f(a, b, 0.0);
                assert!((0.0..=100.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_symmetry() {
        for f in [ratio, token_sort_ratio, token_set_ratio, quick_ratio] {
            for (a, b) in [
                ("kitten", "sitting"),
                ("fuzzy wuzzy was a bear", "wuzzy fuzzy"),
                ("abcd", "abce"),
            ] {
                assert_eq!(f(a, b, 0.0), f(b, a, 0.0));
            }
        }
    }

    #[test]
    fn test_cutoff_zeroes_below_threshold() {
        // "abcd" vs "abce": distance 2 over length sum 8 -> exactly 75.
        assert_eq!(ratio("abcd", "abce", 0.0), 75.0);
        assert_eq!(ratio("abcd", "abce", 80.0), 0.0);
    }

    #[test]
    fn test_cutoff_keeps_at_threshold_result_exact() {
        // A cutoff at or below the true score must not change the result.
        let exact = ratio("abcd", "abce", 0.0);
        assert_eq!(ratio("abcd", "abce", 75.0), exact);
        assert_eq!(ratio("abcd", "abce", 40.0), exact);
    }

    #[test]
    fn test_cutoff_at_exact_nonrepresentable_score() {
        // 200/3 is not representable in f64; a cutoff equal to the returned
        // score must still keep the match.
        let exact = ratio("a", "ab", 0.0);
        assert_eq!(ratio("a", "ab", exact), exact);

        let exact = ratio("ab", "abcb", 0.0);
        assert_eq!(ratio("ab", "abcb", exact), exact);
    }

    #[test]
    fn test_cutoff_on_all_ratios() {
        for f in RATIOS {
            assert_eq!(f("completely", "different!", 99.0), 0.0);
            assert_eq!(f("same text", "same text", 99.0), 100.0);
        }
    }

    #[test]
    fn test_weighted_ratio_prefers_token_branch_for_similar_lengths() {
        // Same words reordered: token branch scores 100, discounted by 0.95.
        let score = weighted_ratio("new york mets", "mets york new", 0.0);
        assert!((score - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_ratio_partial_branch() {
        // Length ratio above 1.5 routes through the partial family: the query
        // is a perfect substring, so the branch yields exactly 100 * 0.9.
        let score = weighted_ratio("new york mets", "new york mets vs atlanta braves", 0.0);
        assert!((score - PARTIAL_SCALE * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_ratio_is_max_of_parts() {
        let a = "fuzzy was a bear";
        let b = "fuzzy fuzzy was a bear";
        let expected = token_sort_ratio(a, b, 0.0).max(token_set_ratio(a, b, 0.0));
        assert_eq!(token_ratio(a, b, 0.0), expected);

        let expected = partial_token_sort_ratio(a, b, 0.0).max(partial_token_set_ratio(a, b, 0.0));
        assert_eq!(partial_token_ratio(a, b, 0.0), expected);
    }

    #[test]
    fn test_whitespace_only_inputs() {
        // Non-empty strings with no tokens: the token metrics see empty
        // canonical forms.
        assert_eq!(token_sort_ratio("   ", " ", 0.0), 100.0);
        assert_eq!(token_set_ratio("   ", " ", 0.0), 0.0);
    }

    #[test]
    fn test_partial_ratio_equal_length_tries_both_orders() {
        let a = "abcdxyz";
        let b = "xyzabcd";
        assert_eq!(partial_ratio(a, b, 0.0), partial_ratio(b, a, 0.0));
    }

    #[test]
    fn test_long_inputs_multiword_masks() {
        let a = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
        let b = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod!";
        let score = ratio(a, b, 0.0);
        assert!(score > 99.0 && score < 100.0);
    }
}
