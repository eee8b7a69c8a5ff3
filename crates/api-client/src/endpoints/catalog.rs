//! Catalog item endpoints
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "success": true, "data": [ ...items ], "error": null }
//! ```

use crate::client::CatalogClient;
use crate::error::{ApiError, ApiResult};
use catalog_search::{CatalogFilter, CatalogItem, TitleOrder};
use serde::{Deserialize, Serialize};

/// Catalog API interface
#[derive(Clone)]
pub struct CatalogApi {
    client: CatalogClient,
}

impl CatalogApi {
    /// Create a new catalog API interface
    pub(crate) fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Indexed full-text search
    ///
    /// GET /catalog-items/search?q=...
    pub async fn search(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
    ) -> ApiResult<Vec<CatalogItem>> {
        let mut params = filter_params(filter, limit);
        params.push(("q", query.to_string()));

        let response: ItemsResponse = self.client.get("catalog-items/search", &params).await?;
        response.into_items()
    }

    /// Unranked listing of items passing the filter
    ///
    /// GET /catalog-items
    pub async fn list(&self, filter: &CatalogFilter, limit: usize) -> ApiResult<Vec<CatalogItem>> {
        let params = filter_params(filter, limit);

        let response: ItemsResponse = self.client.get("catalog-items", &params).await?;
        response.into_items()
    }

    /// Title lookup for autocomplete
    ///
    /// GET /catalog-items/titles?q=...&orderBy=weightedRating.desc
    pub async fn titles(
        &self,
        query: &str,
        filter: &CatalogFilter,
        limit: usize,
        order: TitleOrder,
    ) -> ApiResult<Vec<CatalogItem>> {
        let mut params = filter_params(filter, limit);
        params.push(("q", query.to_string()));
        params.push(("orderBy", order.as_query_value().to_string()));

        let response: ItemsResponse = self.client.get("catalog-items/titles", &params).await?;
        response.into_items()
    }
}

fn filter_params(filter: &CatalogFilter, limit: usize) -> Vec<(&'static str, String)> {
    vec![
        ("isActive", filter.is_active.to_string()),
        ("verificationStatus", filter.verification_status.as_str().to_string()),
        ("limit", limit.to_string()),
    ]
}

/// Response envelope for item lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    /// Whether the request succeeded
    pub success: bool,
    /// Items, present on success
    #[serde(default)]
    pub data: Option<Vec<CatalogItem>>,
    /// Error details, present on failure
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Error details returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ItemsResponse {
    /// Unwrap the envelope into its items
    ///
    /// A successful response without `data` counts as an empty list.
    pub fn into_items(self) -> ApiResult<Vec<CatalogItem>> {
        if self.success {
            return Ok(self.data.unwrap_or_default());
        }

        let info = self.error.unwrap_or_else(|| ErrorInfo {
            code: "UNKNOWN".to_string(),
            message: "request failed without error details".to_string(),
        });
        Err(ApiError::Backend {
            code: info.code,
            message: info.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TEXT_INDEX_MISSING;
    use catalog_search::VerificationStatus;

    #[test]
    fn test_filter_params() {
        let params = filter_params(&CatalogFilter::searchable(), 40);
        assert_eq!(
            params,
            vec![
                ("isActive", "true".to_string()),
                ("verificationStatus", "approved".to_string()),
                ("limit", "40".to_string()),
            ]
        );
    }

    #[test]
    fn test_successful_envelope() {
        let json = r#"{
            "success": true,
            "data": [{
                "id": "p-1",
                "title": "Singing Bowl",
                "description": "hand hammered",
                "isActive": true,
                "verificationStatus": "approved",
                "weightedRating": 4.8
            }]
        }"#;

        let response: ItemsResponse = serde_json::from_str(json).unwrap();
        let items = response.into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Singing Bowl");
        assert_eq!(items[0].verification_status, VerificationStatus::Approved);
    }

    #[test]
    fn test_success_without_data_is_empty() {
        let response: ItemsResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.into_items().unwrap().is_empty());
    }

    #[test]
    fn test_failed_envelope_maps_to_backend_error() {
        let json = r#"{
            "success": false,
            "error": {"code": "TEXT_INDEX_MISSING", "message": "no text index"}
        }"#;

        let response: ItemsResponse = serde_json::from_str(json).unwrap();
        match response.into_items() {
            Err(ApiError::Backend { code, .. }) => assert_eq!(code, TEXT_INDEX_MISSING),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_failed_envelope_without_details() {
        let response: ItemsResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(
            response.into_items(),
            Err(ApiError::Backend { code, .. }) if code == "UNKNOWN"
        ));
    }
}
