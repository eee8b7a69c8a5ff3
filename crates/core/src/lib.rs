//! Core utilities for catalog search
//!
//! This crate provides functionality shared by the engine, the store clients
//! and the command-line front end:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Resilience**: Retry policies and a circuit breaker for store calls
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("fallback scans up to {} items", config.schema.search.fallback_scan_limit);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, SearchSettings, SuggestSettings};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::retry::{CircuitBreaker, CircuitBreakerConfig, RetryConfig};
}
