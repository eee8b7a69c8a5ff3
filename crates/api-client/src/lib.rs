//! HTTP client for the remote catalog service
//!
//! This crate provides a resilient HTTP client for the catalog service and a
//! [`HttpCatalogStore`] that plugs it into the search and suggestion engines.
//!
//! # Features
//!
//! - **Environment-based configuration**: URL, key and timeout from env vars or the config file
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Circuit breaker**: Fail fast while the service is down
//! - **Request correlation**: Track requests with unique IDs for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_api_client::{ClientConfig, HttpCatalogStore};
//! use catalog_search::SearchEngine;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpCatalogStore::with_config(ClientConfig::from_env()?)?;
//!     let engine = SearchEngine::new(Arc::new(store));
//!
//!     let page = engine.search("pashmina scarf", 1, 20).await;
//!     println!("{} matches", page.total_count);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
mod store;

pub use client::CatalogClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use store::HttpCatalogStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::CatalogClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::CatalogApi;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::store::HttpCatalogStore;
}
