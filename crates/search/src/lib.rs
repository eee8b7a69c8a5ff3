//! Catalog search and relevance ranking.
//!
//! This crate provides:
//! - Case-insensitive edit distance and fuzzy token matching
//! - Multi-signal relevance scoring (term frequency, match boost, rating)
//! - A two-phase search engine: indexed lookup with a bounded fuzzy fallback
//! - Title autocomplete
//! - An in-memory catalog store
//!
//! Without the default `engine` feature only the synchronous matcher,
//! scorer and catalog types are built; that is the surface the `wasm`
//! feature exposes.
//!
//! # Example
//!
//! ```
//! use catalog_search::{edit_distance, fuzzy_match};
//!
//! assert_eq!(edit_distance("Kitten", "sitting"), 3);
//! assert!(fuzzy_match("pashmnia", "Handwoven Nepali Pashmina Scarf", 2));
//! ```

#[cfg(feature = "engine")]
mod engine;
mod error;
mod matcher;
#[cfg(feature = "engine")]
mod memory;
mod relevance;
mod store;
#[cfg(feature = "engine")]
mod suggest;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "engine")]
pub use engine::SearchEngine;
pub use error::{Result, SearchError, StoreError, StoreResult};
pub use matcher::{edit_distance, fuzzy_match, DEFAULT_FUZZY_THRESHOLD, MIN_TOKEN_LEN};
#[cfg(feature = "engine")]
pub use memory::MemoryCatalog;
pub use relevance::{
    boost_factor, rank, rating_factor, score, score_breakdown, term_frequency_score,
    DESCRIPTION_TOKEN_WEIGHT, RATING_WEIGHT, TITLE_TOKEN_WEIGHT,
};
pub use store::{CatalogFilter, CatalogStore, TitleOrder};
#[cfg(feature = "engine")]
pub use suggest::SuggestionEngine;
pub use types::{
    CatalogItem, MatchKind, ScoreBreakdown, ScoredResult, SearchPage, SearchParams, SuggestParams,
    Suggestion, VerificationStatus,
};
