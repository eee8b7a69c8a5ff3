//! Relevance scoring for catalog items.
//!
//! `score = term_frequency × boost × rating_factor`
//!
//! The term-frequency part is a fixed-weight approximation (no inverse
//! document frequency). The rating factor is a small multiplicative nudge
//! that favours better-rated items without overriding textual relevance.

use crate::types::{CatalogItem, MatchKind, ScoreBreakdown, ScoredResult};

/// Weight of each title token containing a query token.
pub const TITLE_TOKEN_WEIGHT: f64 = 2.0;

/// Weight of each description token containing a query token.
pub const DESCRIPTION_TOKEN_WEIGHT: f64 = 1.0;

/// Fraction of the weighted rating added to the multiplier.
pub const RATING_WEIGHT: f64 = 0.1;

impl MatchKind {
    /// Classify where the whole query matched (trimmed, case-insensitive).
    pub fn classify(item: &CatalogItem, query: &str) -> Self {
        let query = query.trim().to_lowercase();
        let title = item.title.trim().to_lowercase();

        if title == query {
            Self::ExactTitle
        } else if title.contains(&query) {
            Self::TitleContains
        } else if item.description.to_lowercase().contains(&query) {
            Self::DescriptionContains
        } else {
            Self::FuzzyOnly
        }
    }

    /// Score multiplier for this kind of match.
    pub fn boost(self) -> f64 {
        match self {
            Self::ExactTitle => 3.0,
            Self::TitleContains => 2.0,
            Self::DescriptionContains => 1.0,
            Self::FuzzyOnly => 0.5,
        }
    }
}

/// Sum over query tokens of the weighted number of title and description
/// tokens that contain it.
pub fn term_frequency_score(item: &CatalogItem, query: &str) -> f64 {
    let query = query.to_lowercase();
    let title = item.title.to_lowercase();
    let description = item.description.to_lowercase();

    query
        .split_whitespace()
        .map(|term| {
            let in_title = title.split_whitespace().filter(|t| t.contains(term)).count();
            let in_description = description
                .split_whitespace()
                .filter(|t| t.contains(term))
                .count();
            in_title as f64 * TITLE_TOKEN_WEIGHT + in_description as f64 * DESCRIPTION_TOKEN_WEIGHT
        })
        .sum()
}

/// Multiplier from where the query matched.
pub fn boost_factor(item: &CatalogItem, query: &str) -> f64 {
    MatchKind::classify(item, query).boost()
}

/// Quality multiplier from the item's weighted rating.
///
/// Negative or non-finite ratings contribute nothing.
pub fn rating_factor(item: &CatalogItem) -> f64 {
    let rating = if item.weighted_rating.is_finite() {
        item.weighted_rating.max(0.0)
    } else {
        0.0
    };
    1.0 + rating * RATING_WEIGHT
}

/// All factors of an item's score for `query`.
pub fn score_breakdown(item: &CatalogItem, query: &str) -> ScoreBreakdown {
    let match_kind = MatchKind::classify(item, query);
    ScoreBreakdown {
        term_frequency: term_frequency_score(item, query),
        match_kind,
        boost: match_kind.boost(),
        rating_factor: rating_factor(item),
    }
}

/// Relevance score of an item for `query` (higher is better).
pub fn score(item: &CatalogItem, query: &str) -> f64 {
    score_breakdown(item, query).total()
}

/// Score every candidate and sort by descending score.
///
/// The sort is stable: candidates with equal scores keep the order in which
/// they were retrieved.
pub fn rank(candidates: Vec<CatalogItem>, query: &str) -> Vec<ScoredResult> {
    let mut results: Vec<ScoredResult> = candidates
        .into_iter()
        .map(|item| {
            let breakdown = score_breakdown(&item, query);
            ScoredResult {
                score: breakdown.total(),
                breakdown,
                item,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
