//! Autocomplete over item titles.

use crate::error::Result;
use crate::store::{CatalogFilter, CatalogStore, TitleOrder};
use crate::types::{Suggestion, SuggestParams};
use catalog_core::config::SuggestSettings;
use catalog_telemetry::{metrics, Timer};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Title suggestions for partially typed queries.
pub struct SuggestionEngine<S> {
    store: Arc<S>,
    settings: SuggestSettings,
}

impl<S> Clone for SuggestionEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            settings: self.settings.clone(),
        }
    }
}

impl<S: CatalogStore> SuggestionEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            settings: SuggestSettings::default(),
        }
    }

    pub fn with_settings(store: Arc<S>, settings: SuggestSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { store, settings })
    }

    pub fn settings(&self) -> &SuggestSettings {
        &self.settings
    }

    /// Up to `limit` suggestions whose titles contain `partial`.
    ///
    /// Titles are unique ignoring case; better-rated items win when the
    /// candidate list is truncated. Queries shorter than the configured
    /// minimum, and store failures, give an empty list.
    #[instrument(skip(self))]
    pub async fn suggest(&self, partial: &str, limit: usize) -> Vec<Suggestion> {
        let query = partial.trim();
        let limit = limit.min(self.settings.max_limit);

        metrics().increment("suggest.requests");

        if query.chars().count() < self.settings.min_query_len || limit == 0 {
            return Vec::new();
        }

        let _timer = Timer::start("suggest.latency_ms");

        let candidates = match self
            .store
            .title_prefix_or_contains(
                query,
                &CatalogFilter::searchable(),
                limit.saturating_mul(2),
                TitleOrder::WeightedRatingDesc,
            )
            .await
        {
            Ok(items) => items,
            Err(e) => {
                metrics().increment("suggest.store_degraded");
                warn!(error = %e, "Title lookup failed, returning no suggestions");
                return Vec::new();
            }
        };

        let needle = query.to_lowercase();
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = Vec::with_capacity(limit);

        for item in candidates {
            let title_lower = item.title.to_lowercase();
            if !title_lower.contains(&needle) || !seen.insert(title_lower) {
                continue;
            }

            suggestions.push(Suggestion {
                text: item.title,
                category: item.category,
            });

            if suggestions.len() == limit {
                break;
            }
        }

        debug!(count = suggestions.len(), "Suggestions collected");
        suggestions
    }

    /// Suggest using HTTP-style parameters.
    pub async fn suggest_params(&self, params: &SuggestParams) -> Vec<Suggestion> {
        self.suggest(&params.q, params.limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::memory::MemoryCatalog;
    use crate::types::{CatalogItem, VerificationStatus};

    fn item(id: &str, title: &str, category: &str, rating: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: Some(category.to_string()),
            price: 8.0,
            is_active: true,
            verification_status: VerificationStatus::Approved,
            weighted_rating: rating,
        }
    }

    fn engine() -> SuggestionEngine<MemoryCatalog> {
        SuggestionEngine::new(Arc::new(MemoryCatalog::new(vec![
            item("1", "Nepali Black Tea", "food", 4.0),
            item("2", "Handwoven Nepali Pashmina Scarf", "textiles", 4.5),
            item("3", "nepali black tea", "food", 3.0),
            item("4", "Singing Bowl", "crafts", 5.0),
            item("5", "Nepali Prayer Flags", "crafts", 2.0),
        ])))
    }

    #[tokio::test]
    async fn test_short_query_yields_nothing() {
        assert!(engine().suggest("a", 10).await.is_empty());
        assert!(engine().suggest("  n  ", 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_ordered_by_rating_and_deduplicated() {
        let suggestions = engine().suggest("nepali", 10).await;
        let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(
            texts,
            vec!["Handwoven Nepali Pashmina Scarf", "Nepali Black Tea", "Nepali Prayer Flags"]
        );
        assert_eq!(suggestions[0].category.as_deref(), Some("textiles"));
    }

    #[tokio::test]
    async fn test_suggestions_capped_at_limit() {
        let suggestions = engine().suggest("NEPALI", 2).await;
        assert_eq!(suggestions.len(), 2);
    }

    #[tokio::test]
    async fn test_suggestions_zero_limit() {
        assert!(engine().suggest("nepali", 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_params_default_limit() {
        let params: SuggestParams = serde_json::from_str(r#"{"q":"bowl"}"#).unwrap();
        let suggestions = engine().suggest_params(&params).await;
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, "Singing Bowl");
    }

    struct LooseStore;

    impl CatalogStore for LooseStore {
        async fn text_search(&self, _: &str, _: &CatalogFilter, _: usize) -> StoreResult<Vec<CatalogItem>> {
            Ok(Vec::new())
        }

        async fn scan_active(&self, _: &CatalogFilter, _: usize) -> StoreResult<Vec<CatalogItem>> {
            Ok(Vec::new())
        }

        async fn title_prefix_or_contains(
            &self,
            query: &str,
            _: &CatalogFilter,
            limit: usize,
            _: TitleOrder,
        ) -> StoreResult<Vec<CatalogItem>> {
            if query == "fail" {
                return Err(StoreError::Unavailable("offline".into()));
            }
            // Ignores the query, as a sloppy backend might.
            Ok(vec![item("x", "Thangka Painting", "art", 4.0), item("y", "Yak Cheese", "food", 3.0)]
                .into_iter()
                .take(limit)
                .collect())
        }
    }

    #[tokio::test]
    async fn test_titles_rechecked_against_query() {
        let engine = SuggestionEngine::new(Arc::new(LooseStore));
        let suggestions = engine.suggest("yak", 10).await;

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, "Yak Cheese");
    }

    #[tokio::test]
    async fn test_store_failure_yields_nothing() {
        let engine = SuggestionEngine::new(Arc::new(LooseStore));
        assert!(engine.suggest("fail", 10).await.is_empty());
    }
}
