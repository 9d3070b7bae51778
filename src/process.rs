//! Batch matching: score a query against a list of choices
//!
//! Builds one cached scorer for the query and reuses it for every choice.
//! Large choice lists are scored in parallel with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithms::fuzz::clamp_cutoff;
use crate::cached::RatioKind;

/// Minimum number of choices before scoring goes parallel.
const PARALLEL_THRESHOLD: usize = 100;

/// One scored choice from [`extract`] or [`extract_one`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Position of the choice in the input slice.
    pub index: usize,
    pub text: String,
    pub score: f64,
}

fn score_all<S: AsRef<str> + Sync>(
    query: &str,
    choices: &[S],
    kind: RatioKind,
    score_cutoff: f64,
) -> Vec<Match> {
    let scorer = kind.into_cached(query);
    // Filter against the same normalized cutoff the scoring layer uses, so an
    // out-of-range or non-finite caller value cannot drop in-range scores.
    let score_cutoff = clamp_cutoff(score_cutoff);
    let score_one = |(index, choice): (usize, &S)| {
        let text = choice.as_ref();
        let score = scorer.score(text, score_cutoff);
        (score >= score_cutoff).then(|| Match {
            index,
            text: text.to_string(),
            score,
        })
    };

    if choices.len() >= PARALLEL_THRESHOLD {
        choices.par_iter().enumerate().filter_map(score_one).collect()
    } else {
        choices.iter().enumerate().filter_map(score_one).collect()
    }
}

/// Score `query` against every choice and return the best matches, highest
/// score first, at most `limit` of them. Choices scoring below `score_cutoff`
/// are dropped. Ties keep input order.
///
/// # Example
/// ```
/// use fuzzscore::{extract, RatioKind};
///
/// let choices = ["new york mets", "atlanta braves", "new york jets"];
/// let matches = extract("new york mets", &choices, RatioKind::Ratio, 60.0, 2);
/// assert_eq!(matches[0].text, "new york mets");
/// assert_eq!(matches[0].score, 100.0);
/// ```
#[must_use]
pub fn extract<S: AsRef<str> + Sync>(
    query: &str,
    choices: &[S],
    kind: RatioKind,
    score_cutoff: f64,
    limit: usize,
) -> Vec<Match> {
    let mut matches = score_all(query, choices, kind, score_cutoff);
    // Stable sort keeps input order among equal scores. Scores are never NaN.
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(limit);
    matches
}

/// The single best match, or `None` when nothing reaches `score_cutoff`.
#[must_use]
pub fn extract_one<S: AsRef<str> + Sync>(
    query: &str,
    choices: &[S],
    kind: RatioKind,
    score_cutoff: f64,
) -> Option<Match> {
    score_all(query, choices, kind, score_cutoff)
        .into_iter()
        .reduce(|best, m| if m.score > best.score { m } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [&str; 4] = [
        "atlanta falcons",
        "new york jets",
        "new york giants",
        "dallas cowboys",
    ];

    #[test]
    fn test_extract_orders_by_score() {
        let matches = extract("new york mets", &CHOICES, RatioKind::Ratio, 0.0, 10);
        assert_eq!(matches.len(), 4);
        assert_eq!(matches[0].text, "new york jets");
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_extract_applies_cutoff_and_limit() {
        let matches = extract("new york mets", &CHOICES, RatioKind::Ratio, 50.0, 1);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "new york jets");
        assert_eq!(matches[0].index, 1);
    }

    #[test]
    fn test_extract_one() {
        let best = extract_one("cowboys", &CHOICES, RatioKind::PartialRatio, 0.0).unwrap();
        assert_eq!(best.text, "dallas cowboys");
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn test_extract_one_none_below_cutoff() {
        assert!(extract_one("zzzzzz", &CHOICES, RatioKind::Ratio, 90.0).is_none());
    }

    #[test]
    fn test_large_input_parallel_path() {
        let mut choices: Vec<String> = (0..300).map(|i| format!("choice number {i}")).collect();
        choices.push("new york mets".to_string());
        let best = extract_one("new york mets", &choices, RatioKind::Ratio, 0.0).unwrap();
        assert_eq!(best.text, "new york mets");
        assert_eq!(best.index, 300);
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn test_cutoff_is_clamped() {
        let choices = ["new york mets", "new york jets"];
        // Above 100 clamps to 100: perfect matches survive.
        let matches = extract("new york mets", &choices, RatioKind::Ratio, 150.0, 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "new york mets");
        assert_eq!(matches[0].score, 100.0);
        // Non-finite behaves like no cutoff at all.
        let matches = extract("new york mets", &choices, RatioKind::Ratio, f64::NAN, 10);
        assert_eq!(matches.len(), 2);
        assert!(extract_one("new york mets", &choices, RatioKind::Ratio, f64::NEG_INFINITY).is_some());
    }

    #[test]
    fn test_empty_choices() {
        let empty: [&str; 0] = [];
        assert!(extract("query", &empty, RatioKind::Ratio, 0.0, 5).is_empty());
        assert!(extract_one("query", &empty, RatioKind::Ratio, 0.0).is_none());
    }
}
