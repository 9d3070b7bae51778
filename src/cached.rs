//! Cached scorers: preprocess a query once, score many choices
//!
//! Every ratio function has a preprocessing step (character collection,
//! pattern-mask construction, tokenization) that depends only on the query.
//! A [`CachedScorer`] performs that step once at construction and reuses the
//! result for every choice, which is the fast path for one-query-against-many
//! matching.
//!
//! Cached and stateless scoring always agree: the stateless functions in
//! [`crate::algorithms::fuzz`] call the same prepared implementations the
//! cached scorers do.
//!
//! Releasing a scorer is just dropping it; the borrow checker rules out use
//! after release.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithms::fuzz::{
    self, HistogramQuery, IndelQuery, TokenQuery, WeightedQuery,
};
use crate::FuzzError;

/// A scoring strategy: how to preprocess a query and how to score a choice
/// against the preprocessed state.
pub trait Metric: Send + Sync {
    /// Query-derived state reused across choices.
    type QueryState: Send + Sync;

    /// The [`RatioKind`] this metric implements.
    const KIND: RatioKind;

    fn preprocess(query: &str) -> Self::QueryState;

    fn score(state: &Self::QueryState, choice: &str, score_cutoff: f64) -> f64;
}

macro_rules! metric {
    ($(#[$doc:meta])* $name:ident, $state:ty, $kind:expr, $prepare:path, $score:path) => {
        $(#[$doc])*
        pub struct $name;

        impl Metric for $name {
            type QueryState = $state;
            const KIND: RatioKind = $kind;

            fn preprocess(query: &str) -> Self::QueryState {
                $prepare(query)
            }

            fn score(state: &Self::QueryState, choice: &str, score_cutoff: f64) -> f64 {
                $score(state, choice, score_cutoff)
            }
        }
    };
}

metric!(
    /// Strategy for [`crate::ratio`].
    Ratio,
    IndelQuery,
    RatioKind::Ratio,
    IndelQuery::new,
    fuzz::ratio_prepared
);
metric!(
    /// Strategy for [`crate::partial_ratio`].
    PartialRatio,
    IndelQuery,
    RatioKind::PartialRatio,
    IndelQuery::new,
    fuzz::partial_ratio_prepared
);
metric!(
    /// Strategy for [`crate::token_sort_ratio`].
    TokenSortRatio,
    TokenQuery,
    RatioKind::TokenSortRatio,
    TokenQuery::new,
    fuzz::token_sort_ratio_prepared
);
metric!(
    /// Strategy for [`crate::partial_token_sort_ratio`].
    PartialTokenSortRatio,
    TokenQuery,
    RatioKind::PartialTokenSortRatio,
    TokenQuery::new,
    fuzz::partial_token_sort_ratio_prepared
);
metric!(
    /// Strategy for [`crate::token_set_ratio`].
    TokenSetRatio,
    TokenQuery,
    RatioKind::TokenSetRatio,
    TokenQuery::new,
    fuzz::token_set_ratio_prepared
);
metric!(
    /// Strategy for [`crate::partial_token_set_ratio`].
    PartialTokenSetRatio,
    TokenQuery,
    RatioKind::PartialTokenSetRatio,
    TokenQuery::new,
    fuzz::partial_token_set_ratio_prepared
);
metric!(
    /// Strategy for [`crate::token_ratio`].
    TokenRatio,
    TokenQuery,
    RatioKind::TokenRatio,
    TokenQuery::new,
    fuzz::token_ratio_prepared
);
metric!(
    /// Strategy for [`crate::partial_token_ratio`].
    PartialTokenRatio,
    TokenQuery,
    RatioKind::PartialTokenRatio,
    TokenQuery::new,
    fuzz::partial_token_ratio_prepared
);
metric!(
    /// Strategy for [`crate::weighted_ratio`].
    WeightedRatio,
    WeightedQuery,
    RatioKind::WeightedRatio,
    WeightedQuery::new,
    fuzz::weighted_ratio_prepared
);
metric!(
    /// Strategy for [`crate::quick_ratio`].
    QuickRatio,
    HistogramQuery,
    RatioKind::QuickRatio,
    HistogramQuery::new,
    fuzz::quick_ratio_prepared
);

/// A query preprocessed for one metric.
///
/// # Example
/// ```
/// use fuzzscore::{ratio, CachedRatio};
///
/// let scorer = CachedRatio::new("this is a test");
/// let cached = scorer.score("this is a test!", 0.0);
/// assert_eq!(cached, ratio("this is a test", "this is a test!", 0.0));
/// ```
pub struct CachedScorer<M: Metric> {
    query: String,
    state: M::QueryState,
    _metric: PhantomData<M>,
}

impl<M: Metric> CachedScorer<M> {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let state = M::preprocess(&query);
        Self {
            query,
            state,
            _metric: PhantomData,
        }
    }

    /// Score one choice against the cached query.
    #[must_use]
    pub fn score(&self, choice: &str, score_cutoff: f64) -> f64 {
        M::score(&self.state, choice, score_cutoff)
    }

    /// The original query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn kind(&self) -> RatioKind {
        M::KIND
    }

    /// Release the scorer, recovering the query string.
    #[must_use]
    pub fn into_query(self) -> String {
        self.query
    }
}

impl<M: Metric> fmt::Debug for CachedScorer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedScorer")
            .field("kind", &M::KIND)
            .field("query", &self.query)
            .finish()
    }
}

pub type CachedRatio = CachedScorer<Ratio>;
pub type CachedPartialRatio = CachedScorer<PartialRatio>;
pub type CachedTokenSortRatio = CachedScorer<TokenSortRatio>;
pub type CachedPartialTokenSortRatio = CachedScorer<PartialTokenSortRatio>;
pub type CachedTokenSetRatio = CachedScorer<TokenSetRatio>;
pub type CachedPartialTokenSetRatio = CachedScorer<PartialTokenSetRatio>;
pub type CachedTokenRatio = CachedScorer<TokenRatio>;
pub type CachedPartialTokenRatio = CachedScorer<PartialTokenRatio>;
pub type CachedWeightedRatio = CachedScorer<WeightedRatio>;
pub type CachedQuickRatio = CachedScorer<QuickRatio>;

/// Object-safe view of a cached scorer, for runtime metric selection.
pub trait ChoiceScorer: Send + Sync {
    fn score(&self, choice: &str, score_cutoff: f64) -> f64;
    fn kind(&self) -> RatioKind;
    fn query(&self) -> &str;
}

impl<M: Metric> ChoiceScorer for CachedScorer<M> {
    fn score(&self, choice: &str, score_cutoff: f64) -> f64 {
        CachedScorer::score(self, choice, score_cutoff)
    }

    fn kind(&self) -> RatioKind {
        M::KIND
    }

    fn query(&self) -> &str {
        CachedScorer::query(self)
    }
}

/// Runtime identifier for the ten ratio functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    Ratio,
    PartialRatio,
    TokenSortRatio,
    PartialTokenSortRatio,
    TokenSetRatio,
    PartialTokenSetRatio,
    TokenRatio,
    PartialTokenRatio,
    WeightedRatio,
    QuickRatio,
}

impl RatioKind {
    pub const ALL: [RatioKind; 10] = [
        RatioKind::Ratio,
        RatioKind::PartialRatio,
        RatioKind::TokenSortRatio,
        RatioKind::PartialTokenSortRatio,
        RatioKind::TokenSetRatio,
        RatioKind::PartialTokenSetRatio,
        RatioKind::TokenRatio,
        RatioKind::PartialTokenRatio,
        RatioKind::WeightedRatio,
        RatioKind::QuickRatio,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RatioKind::Ratio => "ratio",
            RatioKind::PartialRatio => "partial_ratio",
            RatioKind::TokenSortRatio => "token_sort_ratio",
            RatioKind::PartialTokenSortRatio => "partial_token_sort_ratio",
            RatioKind::TokenSetRatio => "token_set_ratio",
            RatioKind::PartialTokenSetRatio => "partial_token_set_ratio",
            RatioKind::TokenRatio => "token_ratio",
            RatioKind::PartialTokenRatio => "partial_token_ratio",
            RatioKind::WeightedRatio => "weighted_ratio",
            RatioKind::QuickRatio => "quick_ratio",
        }
    }

    /// One-shot score without a cached scorer.
    #[must_use]
    pub fn score(self, a: &str, b: &str, score_cutoff: f64) -> f64 {
        match self {
            RatioKind::Ratio => fuzz::ratio(a, b, score_cutoff),
            RatioKind::PartialRatio => fuzz::partial_ratio(a, b, score_cutoff),
            RatioKind::TokenSortRatio => fuzz::token_sort_ratio(a, b, score_cutoff),
            RatioKind::PartialTokenSortRatio => fuzz::partial_token_sort_ratio(a, b, score_cutoff),
            RatioKind::TokenSetRatio => fuzz::token_set_ratio(a, b, score_cutoff),
            RatioKind::PartialTokenSetRatio => fuzz::partial_token_set_ratio(a, b, score_cutoff),
            RatioKind::TokenRatio => fuzz::token_ratio(a, b, score_cutoff),
            RatioKind::PartialTokenRatio => fuzz::partial_token_ratio(a, b, score_cutoff),
            RatioKind::WeightedRatio => fuzz::weighted_ratio(a, b, score_cutoff),
            RatioKind::QuickRatio => fuzz::quick_ratio(a, b, score_cutoff),
        }
    }

    /// Build a cached scorer for this kind.
    #[must_use]
    pub fn into_cached(self, query: impl Into<String>) -> Box<dyn ChoiceScorer> {
        let query = query.into();
        match self {
            RatioKind::Ratio => Box::new(CachedRatio::new(query)),
            RatioKind::PartialRatio => Box::new(CachedPartialRatio::new(query)),
            RatioKind::TokenSortRatio => Box::new(CachedTokenSortRatio::new(query)),
            RatioKind::PartialTokenSortRatio => Box::new(CachedPartialTokenSortRatio::new(query)),
            RatioKind::TokenSetRatio => Box::new(CachedTokenSetRatio::new(query)),
            RatioKind::PartialTokenSetRatio => Box::new(CachedPartialTokenSetRatio::new(query)),
            RatioKind::TokenRatio => Box::new(CachedTokenRatio::new(query)),
            RatioKind::PartialTokenRatio => Box::new(CachedPartialTokenRatio::new(query)),
            RatioKind::WeightedRatio => Box::new(CachedWeightedRatio::new(query)),
            RatioKind::QuickRatio => Box::new(CachedQuickRatio::new(query)),
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatioKind {
    type Err = FuzzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratio" => Ok(RatioKind::Ratio),
            "partial_ratio" => Ok(RatioKind::PartialRatio),
            "token_sort_ratio" => Ok(RatioKind::TokenSortRatio),
            "partial_token_sort_ratio" => Ok(RatioKind::PartialTokenSortRatio),
            "token_set_ratio" => Ok(RatioKind::TokenSetRatio),
            "partial_token_set_ratio" => Ok(RatioKind::PartialTokenSetRatio),
            "token_ratio" => Ok(RatioKind::TokenRatio),
            "partial_token_ratio" => Ok(RatioKind::PartialTokenRatio),
            "weighted_ratio" | "wratio" => Ok(RatioKind::WeightedRatio),
            "quick_ratio" | "qratio" => Ok(RatioKind::QuickRatio),
            _ => Err(FuzzError::UnknownRatioKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(&str, &str); 5] = [
        ("New York Mets", "new york mets vs atlanta braves"),
        ("this is a test", "this is a test!"),
        ("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
        ("", "nonempty"),
        ("short", "a much longer string than the query is"),
    ];

    #[test]
    fn test_cached_matches_stateless_for_all_kinds() {
        for kind in RatioKind::ALL {
            for (query, choice) in PAIRS {
                let cached = kind.into_cached(query);
                for cutoff in [0.0, 50.0, 90.0] {
                    assert_eq!(
                        cached.score(choice, cutoff),
                        kind.score(query, choice, cutoff),
                        "kind={kind} query={query:?} choice={choice:?} cutoff={cutoff}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_cached_scorer_reuse() {
        let scorer = CachedTokenSetRatio::new("fuzzy was a bear");
        assert_eq!(scorer.score("fuzzy fuzzy was a bear", 0.0), 100.0);
        assert!(scorer.score("polar bear", 0.0) < 100.0);
        assert_eq!(scorer.kind(), RatioKind::TokenSetRatio);
        assert_eq!(scorer.query(), "fuzzy was a bear");
    }

    #[test]
    fn test_into_query_releases() {
        let scorer = CachedRatio::new("hello");
        assert_eq!(scorer.into_query(), "hello");
    }

    #[test]
    fn test_kind_roundtrip_strings() {
        for kind in RatioKind::ALL {
            assert_eq!(kind.as_str().parse::<RatioKind>().unwrap(), kind);
        }
        assert_eq!("wratio".parse::<RatioKind>().unwrap(), RatioKind::WeightedRatio);
        assert_eq!("qratio".parse::<RatioKind>().unwrap(), RatioKind::QuickRatio);
    }

    #[test]
    fn test_unknown_kind_errors() {
        let err = "levenshtein_ratio".parse::<RatioKind>().unwrap_err();
        assert!(err.to_string().contains("levenshtein_ratio"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RatioKind::PartialTokenSortRatio).unwrap();
        assert_eq!(json, "\"partial_token_sort_ratio\"");
        let kind: RatioKind = serde_json::from_str("\"weighted_ratio\"").unwrap();
        assert_eq!(kind, RatioKind::WeightedRatio);
    }
}
