//! fuzzscore - fast fuzzy string scoring
//!
//! A scoring engine in the FuzzyWuzzy/RapidFuzz family: ten ratio functions
//! over a bit-parallel indel distance core, with cached per-query scorers for
//! one-against-many matching.
//!
//! # Features
//! - Ten ratio functions: `ratio`, the partial/token variants, `weighted_ratio`
//!   and the `quick_ratio` pre-filter, all returning scores in [0, 100]
//! - `score_cutoff` on every function, turned into a distance budget so the
//!   distance core can stop scanning early
//! - Cached scorers that preprocess the query once and reuse it per choice,
//!   guaranteed to agree with the stateless functions
//! - Batch `extract` / `extract_one` with parallel scoring for large inputs
//!
//! # Example
//! ```
//! use fuzzscore::{extract_one, ratio, CachedRatio, RatioKind};
//!
//! let score = ratio("this is a test", "this is a test!", 0.0);
//! assert!((score - 96.55).abs() < 0.01);
//!
//! let scorer = CachedRatio::new("new york mets");
//! assert_eq!(scorer.score("new york mets", 0.0), 100.0);
//!
//! let choices = ["atlanta braves", "new york jets", "new york mets"];
//! let best = extract_one("new york mets", &choices, RatioKind::WeightedRatio, 0.0).unwrap();
//! assert_eq!(best.text, "new york mets");
//! ```
//!
//! Scoring never rewrites its inputs; apply
//! [`default_process`](crate::algorithms::normalize::default_process) first
//! for case- and punctuation-insensitive matching.

pub mod algorithms;
pub mod cached;
pub mod process;

use thiserror::Error;

pub use algorithms::fuzz::{
    partial_ratio, partial_token_ratio, partial_token_set_ratio, partial_token_sort_ratio,
    quick_ratio, ratio, token_ratio, token_set_ratio, token_sort_ratio, weighted_ratio,
};
pub use algorithms::levenshtein::{
    levenshtein_distance, levenshtein_distance_bounded, levenshtein_similarity,
};
pub use algorithms::normalize::default_process;
pub use cached::{
    CachedPartialRatio, CachedPartialTokenRatio, CachedPartialTokenSetRatio,
    CachedPartialTokenSortRatio, CachedQuickRatio, CachedRatio, CachedScorer, CachedTokenRatio,
    CachedTokenSetRatio, CachedTokenSortRatio, CachedWeightedRatio, ChoiceScorer, Metric,
    RatioKind,
};
pub use process::{extract, extract_one, Match};

/// Errors surfaced by the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuzzError {
    /// A ratio-kind name that `RatioKind` parsing does not recognize.
    #[error("unknown ratio kind: {0:?}")]
    UnknownRatioKind(String),
}
