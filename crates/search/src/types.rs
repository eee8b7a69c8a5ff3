//! Catalog items and the per-request result types built from them.

use serde::{Deserialize, Serialize};

/// Moderation state of a catalog item. Only approved items are searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A catalog listing as delivered by the store. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    pub is_active: bool,
    pub verification_status: VerificationStatus,
    /// Bayesian-smoothed average rating, conceptually >= 0
    #[serde(default)]
    pub weighted_rating: f64,
}

impl CatalogItem {
    /// Active and approved
    pub fn is_searchable(&self) -> bool {
        self.is_active && self.verification_status == VerificationStatus::Approved
    }
}

/// How the query matched an item, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Title equals the query
    ExactTitle,
    /// Title contains the query
    TitleContains,
    /// Description contains the query
    DescriptionContains,
    /// Only reached the candidate set through edit-distance matching
    FuzzyOnly,
}

/// The factors that were multiplied into a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub term_frequency: f64,
    pub match_kind: MatchKind,
    pub boost: f64,
    pub rating_factor: f64,
}

impl ScoreBreakdown {
    /// Product of all factors
    pub fn total(&self) -> f64 {
        self.term_frequency * self.boost * self.rating_factor
    }
}

/// A candidate together with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub item: CatalogItem,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// One page of a ranked result set.
///
/// Serializes to the HTTP shape `{ products, totalPages, currentPage, totalCount }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T = CatalogItem> {
    #[serde(rename = "products")]
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> SearchPage<T> {
    /// A well-formed page with no results.
    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            current_page: page,
        }
    }

    /// Cut page `page` (1-based) of size `limit` out of the full ranked set.
    ///
    /// Page 0 is treated as page 1. A zero limit yields no items and zero
    /// pages while still reporting the total count.
    pub fn from_ranked(ranked: Vec<T>, page: usize, limit: usize) -> Self {
        let page = page.max(1);
        let total_count = ranked.len();

        if limit == 0 {
            return Self {
                items: Vec::new(),
                total_count,
                total_pages: 0,
                current_page: page,
            };
        }

        let skip = (page - 1).saturating_mul(limit);
        let items = ranked.into_iter().skip(skip).take(limit).collect();

        Self {
            items,
            total_count,
            total_pages: total_count.div_ceil(limit),
            current_page: page,
        }
    }

    /// Convert the items, keeping the counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchPage<U> {
        SearchPage {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// An autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Query string of `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: default_page(),
            limit: default_search_limit(),
        }
    }
}

/// Query string of `GET /search/suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_suggest_limit")]
    pub limit: usize,
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            limit: default_suggest_limit(),
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_search_limit() -> usize {
    20
}

fn default_suggest_limit() -> usize {
    10
}
