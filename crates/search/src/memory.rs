//! In-memory catalog store.
//!
//! Holds a snapshot of items and answers the three store lookups the way a
//! document database would: whole-word text search, a filtered scan in
//! insertion order, and a rating-ordered title lookup.

use crate::error::{Result, StoreError, StoreResult};
use crate::store::{CatalogFilter, CatalogStore, TitleOrder};
use crate::types::CatalogItem;
use catalog_core::ResultExt;
use std::collections::HashSet;
use std::path::Path;

/// A catalog held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    items: Vec<CatalogItem>,
    text_index: bool,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MemoryCatalog {
    /// Create a catalog with a text index.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            text_index: true,
        }
    }

    /// Parse a JSON array of catalog items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Load a JSON array of catalog items from disk.
    pub fn from_path(path: &Path) -> catalog_core::Result<Self> {
        if !path.exists() {
            return Err(catalog_core::Error::file_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .map_err(catalog_core::Error::from)
            .context(format!("While reading catalog {}", path.display()))?;
        let items: Vec<CatalogItem> = serde_json::from_str(&content)
            .map_err(|e| catalog_core::Error::catalog_parse(path, e.to_string()).with_source(e))?;

        tracing::debug!(path = %path.display(), items = items.len(), "Loaded catalog");
        Ok(Self::new(items))
    }

    /// Drop the text index so native text search fails, as a store without
    /// a search index does.
    #[must_use]
    pub fn without_text_index(mut self) -> Self {
        self.text_index = false;
        self
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn visible<'a>(&'a self, filter: &'a CatalogFilter) -> impl Iterator<Item = &'a CatalogItem> {
        self.items.iter().filter(move |item| filter.matches(item))
    }
}

impl FromIterator<CatalogItem> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Lowercased words with surrounding punctuation stripped.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}

impl CatalogStore for MemoryCatalog {
    async fn text_search(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
    ) -> StoreResult<Vec<CatalogItem>> {
        if !self.text_index {
            return Err(StoreError::IndexMissing(
                "in-memory catalog built without a text index".to_string(),
            ));
        }

        let terms: HashSet<String> = words(query).collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(usize, &CatalogItem)> = self
            .visible(filter)
            .filter_map(|item| {
                let item_words: HashSet<String> =
                    words(&item.title).chain(words(&item.description)).collect();
                let matched = terms.intersection(&item_words).count();
                (matched > 0).then_some((matched, item))
            })
            .collect();

        hits.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(hits.into_iter().take(limit).map(|(_, item)| item.clone()).collect())
    }

    async fn scan_active(
        &self,
        filter: &CatalogFilter,
        limit: usize,
    ) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.visible(filter).take(limit).cloned().collect())
    }

    async fn title_prefix_or_contains(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
        order: TitleOrder,
    ) -> StoreResult<Vec<CatalogItem>> {
        let needle = query.trim().to_lowercase();

        let mut matches: Vec<&CatalogItem> = self
            .visible(filter)
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect();

        match order {
            TitleOrder::WeightedRatingDesc => {
                matches.sort_by(|a, b| b.weighted_rating.total_cmp(&a.weighted_rating));
            }
        }

        Ok(matches.into_iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VerificationStatus;

    fn item(id: &str, title: &str, description: &str, rating: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: Some("crafts".to_string()),
            price: 12.0,
            is_active: true,
            verification_status: VerificationStatus::Approved,
            weighted_rating: rating,
        }
    }

    fn catalog() -> MemoryCatalog {
        let mut hidden = item("hidden", "Nepali Scarf", "inactive listing", 5.0);
        hidden.is_active = false;
        let mut pending = item("pending", "Nepali Scarf", "awaiting review", 5.0);
        pending.verification_status = VerificationStatus::Pending;

        [
            item("tea", "Nepali Black Tea", "organic tea leaves", 4.0),
            item("scarf", "Handwoven Nepali Pashmina Scarf", "warm wool scarf.", 4.5),
            hidden,
            pending,
            item("bowl", "Singing Bowl", "hand-hammered brass", 3.0),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_collected_catalog_keeps_order_and_index() {
        let store: MemoryCatalog = (1..=3)
            .map(|i| item(&i.to_string(), "Prayer Flags", "cotton flags", 1.0))
            .collect();

        assert_eq!(store.len(), 3);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(store
            .text_search("flags", &CatalogFilter::searchable(), 10)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_text_search_orders_by_matched_words() {
        let store = catalog();
        let results = store
            .text_search("Nepali scarf", &CatalogFilter::searchable(), 10)
            .await
            .unwrap();

        let ids: Vec<&str> = results.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["scarf", "tea"]);
    }

    #[tokio::test]
    async fn test_text_search_whole_words_only() {
        let store = catalog();
        let results = store
            .text_search("nepal", &CatalogFilter::searchable(), 10)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_text_search_without_index_fails() {
        let store = catalog().without_text_index();
        let err = store
            .text_search("scarf", &CatalogFilter::searchable(), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::IndexMissing(_)));
    }

    #[tokio::test]
    async fn test_scan_respects_filter_and_limit() {
        let store = catalog();
        let all = store.scan_active(&CatalogFilter::searchable(), 100).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(CatalogItem::is_searchable));

        let capped = store.scan_active(&CatalogFilter::searchable(), 2).await.unwrap();
        let ids: Vec<&str> = capped.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["tea", "scarf"]);
    }

    #[tokio::test]
    async fn test_title_lookup_orders_by_rating() {
        let store = catalog();
        let results = store
            .title_prefix_or_contains("NEP", &CatalogFilter::searchable(), 10, TitleOrder::default())
            .await
            .unwrap();

        let ids: Vec<&str> = results.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["scarf", "tea"]);
    }

    #[test]
    fn test_from_json_str() {
        let store = MemoryCatalog::from_json_str(
            r#"[{"id":"1","title":"Thangka Painting","isActive":true,"verificationStatus":"approved"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        assert!(MemoryCatalog::from_json_str("{").is_err());
    }

    #[test]
    fn test_from_path_directory_has_context() {
        let dir = std::env::temp_dir();
        let err = MemoryCatalog::from_path(&dir).unwrap_err();
        assert!(err.context.unwrap().contains("While reading catalog"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = MemoryCatalog::from_path(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_eq!(err.code, catalog_core::ErrorCode::FileNotFound);
    }
}
