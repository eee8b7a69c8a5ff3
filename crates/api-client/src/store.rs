//! [`CatalogStore`] backed by the remote catalog service.

use crate::client::CatalogClient;
use crate::config::ClientConfig;
use crate::endpoints::CatalogApi;
use crate::error::ApiResult;
use catalog_search::{CatalogFilter, CatalogItem, CatalogStore, StoreResult, TitleOrder};

/// Catalog store that forwards every lookup over HTTP.
///
/// Transport errors are translated into [`catalog_search::StoreError`] so
/// the engines can degrade gracefully.
#[derive(Clone)]
pub struct HttpCatalogStore {
    api: CatalogApi,
}

impl HttpCatalogStore {
    /// Wrap an existing client
    pub fn new(client: &CatalogClient) -> Self {
        Self { api: client.catalog() }
    }

    /// Build a client from `config` and wrap it
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(&CatalogClient::with_config(config)?))
    }
}

impl CatalogStore for HttpCatalogStore {
    async fn text_search(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
    ) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.api.search(query, filter, limit).await?)
    }

    async fn scan_active(&self, filter: &CatalogFilter, limit: usize) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.api.list(filter, limit).await?)
    }

    async fn title_prefix_or_contains(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
        order: TitleOrder,
    ) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.api.titles(query, filter, limit, order).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::retry::RetryConfig;
    use catalog_search::{SearchEngine, StoreError, SuggestionEngine};
    use std::sync::Arc;
    use std::time::Duration;

    /// Points at a port nothing listens on, with retries disabled.
    fn unreachable_store() -> HttpCatalogStore {
        let config = ClientConfig::development()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2))
            .with_retry(RetryConfig::no_retry());
        HttpCatalogStore::with_config(config).unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_store_error() {
        let store = unreachable_store();
        let result = store
            .text_search("scarf", &CatalogFilter::searchable(), 10)
            .await;

        assert!(matches!(
            result,
            Err(StoreError::Unavailable(_) | StoreError::Backend(_) | StoreError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_engines_degrade_when_service_is_down() {
        let store = Arc::new(unreachable_store());

        let page = SearchEngine::new(Arc::clone(&store)).search("scarf", 1, 20).await;
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());

        let suggestions = SuggestionEngine::new(store).suggest("scarf", 5).await;
        assert!(suggestions.is_empty());
    }
}
