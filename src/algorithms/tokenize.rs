//! Whitespace tokenization for the token-based ratios
//!
//! Tokens are maximal runs of non-whitespace characters; empty tokens are
//! never produced. The sort-based ratios compare canonical sorted-token
//! strings, the set-based ratios compare recombinations of the token-set
//! intersection and the two symmetric differences.

use std::collections::BTreeSet;

/// Split a string into whitespace-delimited tokens.
#[must_use]
pub fn split_tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Canonical sorted-token form: tokens sorted and joined with single spaces.
///
/// Duplicate tokens are kept; this is the input to the sort-based ratios.
///
/// # Example
/// ```
/// use fuzzscore::algorithms::tokenize::sorted_join;
///
/// assert_eq!(sorted_join("wuzzy fuzzy was a bear"), "a bear fuzzy was wuzzy");
/// ```
#[must_use]
pub fn sorted_join(s: &str) -> String {
    let mut tokens = split_tokens(s);
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Unique tokens of a string. `BTreeSet` keeps iteration sorted, which is the
/// order the canonical joined strings need.
#[must_use]
pub fn token_set(s: &str) -> BTreeSet<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// The canonical strings token_set_ratio compares.
///
/// `combined_a` is the intersection followed by the tokens only in `a`
/// (`combined_b` analogous); each part is internally sorted.
#[derive(Debug, Clone)]
pub struct TokenSets {
    pub intersection: String,
    pub combined_a: String,
    pub combined_b: String,
    pub has_intersection: bool,
}

impl TokenSets {
    /// True when both token sets were empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intersection.is_empty() && self.combined_a.is_empty() && self.combined_b.is_empty()
    }
}

fn combine(base: &str, diff: &[&str]) -> String {
    if diff.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        diff.join(" ")
    } else {
        format!("{} {}", base, diff.join(" "))
    }
}

/// Decompose two token sets into intersection and symmetric differences,
/// joined into the canonical comparison strings.
#[must_use]
pub fn decompose(a: &BTreeSet<String>, b: &BTreeSet<String>) -> TokenSets {
    let intersect: Vec<&str> = a.intersection(b).map(String::as_str).collect();
    let diff_a: Vec<&str> = a.difference(b).map(String::as_str).collect();
    let diff_b: Vec<&str> = b.difference(a).map(String::as_str).collect();

    let has_intersection = !intersect.is_empty();
    let intersection = intersect.join(" ");
    let combined_a = combine(&intersection, &diff_a);
    let combined_b = combine(&intersection, &diff_b);

    TokenSets {
        intersection,
        combined_a,
        combined_b,
        has_intersection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_whitespace_runs() {
        assert_eq!(split_tokens("  fuzzy   wuzzy "), vec!["fuzzy", "wuzzy"]);
        assert!(split_tokens("   ").is_empty());
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_sorted_join_keeps_duplicates() {
        assert_eq!(sorted_join("b a b"), "a b b");
        assert_eq!(sorted_join(""), "");
    }

    #[test]
    fn test_token_set_dedups() {
        let set = token_set("fuzzy fuzzy was a bear");
        assert_eq!(set.len(), 4);
        assert!(set.contains("fuzzy"));
    }

    #[test]
    fn test_decompose() {
        let a = token_set("fuzzy wuzzy was");
        let b = token_set("wuzzy was a bear");
        let sets = decompose(&a, &b);
        assert!(sets.has_intersection);
        assert_eq!(sets.intersection, "was wuzzy");
        assert_eq!(sets.combined_a, "was wuzzy fuzzy");
        assert_eq!(sets.combined_b, "was wuzzy a bear");
    }

    #[test]
    fn test_decompose_disjoint() {
        let a = token_set("red green");
        let b = token_set("blue");
        let sets = decompose(&a, &b);
        assert!(!sets.has_intersection);
        assert_eq!(sets.combined_a, "green red");
        assert_eq!(sets.combined_b, "blue");
    }

    #[test]
    fn test_decompose_both_empty() {
        let sets = decompose(&token_set(""), &token_set("  "));
        assert!(sets.is_empty());
    }
}
