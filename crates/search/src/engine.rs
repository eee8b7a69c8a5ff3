//! Two-phase catalog search: precise indexed lookup, bounded fuzzy fallback,
//! relevance ranking and pagination.

use crate::error::{Result, StoreError, StoreResult};
use crate::matcher::fuzzy_match;
use crate::relevance::rank;
use crate::store::{CatalogFilter, CatalogStore};
use crate::types::{CatalogItem, ScoredResult, SearchPage, SearchParams};
use catalog_core::config::SearchSettings;
use catalog_telemetry::{metrics, Timer};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Full-text search over a catalog store.
///
/// Stateless apart from its settings; clone it freely and call it from as
/// many tasks as needed.
///
/// ```
/// use catalog_search::{MemoryCatalog, SearchEngine};
/// use std::sync::Arc;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let catalog = MemoryCatalog::from_json_str(r#"[
///     {"id": "1", "title": "Handwoven Nepali Pashmina Scarf", "description": "warm wool scarf",
///      "isActive": true, "verificationStatus": "approved", "weightedRating": 4.5}
/// ]"#).unwrap();
///
/// let engine = SearchEngine::new(Arc::new(catalog));
/// let page = engine.search("pashmnia", 1, 20).await;
/// assert_eq!(page.total_count, 1);
/// # });
/// ```
pub struct SearchEngine<S> {
    store: Arc<S>,
    settings: SearchSettings,
}

impl<S> Clone for SearchEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            settings: self.settings.clone(),
        }
    }
}

impl<S: CatalogStore> SearchEngine<S> {
    /// Create an engine with default settings.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            settings: SearchSettings::default(),
        }
    }

    /// Create an engine with validated settings.
    pub fn with_settings(store: Arc<S>, settings: SearchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { store, settings })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Search and return one page of plain items.
    pub async fn search(&self, query: &str, page: usize, limit: usize) -> SearchPage {
        self.search_scored(query, page, limit)
            .await
            .map(|result| result.item)
    }

    /// Search using HTTP-style parameters.
    pub async fn search_params(&self, params: &SearchParams) -> SearchPage {
        self.search(&params.q, params.page, params.limit).await
    }

    /// Search and return one page with scores and their breakdown.
    #[instrument(skip(self), fields(candidates = tracing::field::Empty))]
    pub async fn search_scored(
        &self,
        query: &str,
        page: usize,
        limit: usize,
    ) -> SearchPage<ScoredResult> {
        let page = page.max(1);
        let limit = limit.min(self.settings.max_page_size);
        let query = query.trim();

        metrics().increment("search.requests");

        if query.is_empty() {
            metrics().increment("search.empty_query");
            return SearchPage::empty(page);
        }

        let _timer = Timer::start("search.latency_ms");
        let deadline = Instant::now() + self.settings.deadline();

        let candidates = self.retrieve(query, deadline).await;
        tracing::Span::current().record("candidates", candidates.len());

        let ranked = rank(candidates, query);
        SearchPage::from_ranked(ranked, page, limit)
    }

    /// Precise phase, then the fallback phase when it under-returns.
    async fn retrieve(&self, query: &str, deadline: Instant) -> Vec<CatalogItem> {
        let filter = CatalogFilter::searchable();

        let precise = match self
            .store
            .text_search(query, &filter, self.settings.precise_limit)
            .await
        {
            Ok(items) => items,
            Err(e) => {
                metrics().increment("search.store_degraded");
                warn!(error = %e, phase = "precise", "Text search failed, continuing without indexed results");
                Vec::new()
            }
        };

        let mut seen: HashSet<String> = HashSet::with_capacity(precise.len());
        let mut candidates: Vec<CatalogItem> = precise
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();

        debug!(precise = candidates.len(), "Precise phase complete");

        if candidates.len() >= self.settings.fallback_threshold {
            return candidates;
        }

        metrics().increment("search.fallback");

        match tokio::time::timeout_at(deadline, self.fuzzy_candidates(query, &filter)).await {
            Ok(Ok(fuzzy)) => {
                let before = candidates.len();
                candidates.extend(fuzzy.into_iter().filter(|item| seen.insert(item.id.clone())));
                debug!(added = candidates.len() - before, "Fallback phase complete");
            }
            Ok(Err(e)) => {
                metrics().increment("search.store_degraded");
                warn!(error = %e, phase = "fallback", "Catalog scan failed, returning indexed results only");
            }
            Err(_) => {
                metrics().increment("search.deadline_exceeded");
                let e = StoreError::Timeout(self.settings.deadline());
                warn!(error = %e, phase = "fallback", "Deadline exceeded, returning indexed results only");
            }
        }

        candidates
    }

    /// Bounded scan filtered through the fuzzy matcher, in scan order.
    async fn fuzzy_candidates(
        &self,
        query: &str,
        filter: &CatalogFilter,
    ) -> StoreResult<Vec<CatalogItem>> {
        let scanned = self
            .store
            .scan_active(filter, self.settings.fallback_scan_limit)
            .await?;
        let threshold = self.settings.fuzzy_threshold;

        let is_match = |item: &CatalogItem| {
            fuzzy_match(query, &item.title, threshold)
                || fuzzy_match(query, &item.description, threshold)
        };

        #[cfg(feature = "parallel")]
        let matched: Vec<CatalogItem> = {
            use rayon::prelude::*;
            scanned.into_par_iter().filter(|item| is_match(item)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let matched: Vec<CatalogItem> = scanned.into_iter().filter(|item| is_match(item)).collect();

        Ok(matched)
    }
}
