//! Endpoint-specific API implementations
//!
//! | Module | Backend path | Description |
//! |--------|--------------|-------------|
//! | `catalog` | `catalog-items`, `catalog-items/search`, `catalog-items/titles` | Read-only catalog lookups |

pub mod catalog;

pub use catalog::{CatalogApi, ErrorInfo, ItemsResponse};
