//! The read-only catalog store capability consumed by the engines.

use crate::error::StoreResult;
use crate::types::{CatalogItem, VerificationStatus};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

/// Visibility filter applied by the store to every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    pub is_active: bool,
    pub verification_status: VerificationStatus,
}

impl CatalogFilter {
    /// Active and approved items only.
    pub const fn searchable() -> Self {
        Self {
            is_active: true,
            verification_status: VerificationStatus::Approved,
        }
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        item.is_active == self.is_active && item.verification_status == self.verification_status
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::searchable()
    }
}

/// Ordering for title lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TitleOrder {
    /// Highest weighted rating first
    #[default]
    WeightedRatingDesc,
}

impl TitleOrder {
    /// Wire form understood by the catalog service
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::WeightedRatingDesc => "weightedRating.desc",
        }
    }
}

/// Read access to the catalog.
///
/// Implementations own indexing and persistence; the engines only
/// post-process what these calls return.
pub trait CatalogStore: Send + Sync {
    /// Native indexed text search, best-effort ranked.
    ///
    /// May fail when the store has no text index.
    fn text_search(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send;

    /// Unranked bounded scan of items passing `filter`.
    fn scan_active(
        &self,
        filter: &CatalogFilter,
        limit: usize,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send;

    /// Items whose title starts with or contains `query`, case-insensitive.
    fn title_prefix_or_contains(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
        order: TitleOrder,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send;
}

impl<S: CatalogStore> CatalogStore for Arc<S> {
    fn text_search(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send {
        (**self).text_search(query, filter, limit)
    }

    fn scan_active(
        &self,
        filter: &CatalogFilter,
        limit: usize,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send {
        (**self).scan_active(filter, limit)
    }

    fn title_prefix_or_contains(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
        order: TitleOrder,
    ) -> impl Future<Output = StoreResult<Vec<CatalogItem>>> + Send {
        (**self).title_prefix_or_contains(query, filter, limit, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(active: bool, status: VerificationStatus) -> CatalogItem {
        CatalogItem {
            id: "x".into(),
            title: "Prayer Flags".into(),
            description: String::new(),
            category: None,
            price: 3.0,
            is_active: active,
            verification_status: status,
            weighted_rating: 0.0,
        }
    }

    #[test]
    fn test_searchable_filter() {
        let filter = CatalogFilter::searchable();
        assert!(filter.matches(&item(true, VerificationStatus::Approved)));
        assert!(!filter.matches(&item(false, VerificationStatus::Approved)));
        assert!(!filter.matches(&item(true, VerificationStatus::Pending)));
        assert!(!filter.matches(&item(true, VerificationStatus::Rejected)));
    }

    #[test]
    fn test_title_order_wire_value() {
        assert_eq!(TitleOrder::WeightedRatingDesc.as_query_value(), "weightedRating.desc");
    }
}
