//! Configuration schema definitions
//!
//! Every field carries a serde default so a partial TOML file only overrides
//! what it names.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub suggest: SuggestSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ConfigSchema {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.suggest.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

/// Retrieval, ranking and pagination parameters for full-text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Candidate cap for the indexed (precise) phase
    #[serde(default = "default_precise_limit")]
    pub precise_limit: usize,

    /// The fallback scan runs when the precise phase returns fewer candidates than this
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: usize,

    /// Candidate cap for the fallback scan
    #[serde(default = "default_fallback_scan_limit")]
    pub fallback_scan_limit: usize,

    /// Maximum edit distance accepted by the fuzzy matcher
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: usize,

    /// Page size used when the caller does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound for caller-provided page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Request deadline in milliseconds; bounds the fallback phase
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            precise_limit: default_precise_limit(),
            fallback_threshold: default_fallback_threshold(),
            fallback_scan_limit: default_fallback_scan_limit(),
            fuzzy_threshold: default_fuzzy_threshold(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            deadline_ms: default_deadline_ms(),
        }
    }
}

impl SearchSettings {
    /// Request deadline as a duration
    pub fn deadline(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.deadline_ms)
    }

    /// Reject settings that would make the engine return nothing
    pub fn validate(&self) -> Result<()> {
        if self.precise_limit == 0 {
            return Err(Error::invalid_config("search.precise_limit must be greater than zero"));
        }
        if self.fallback_scan_limit == 0 {
            return Err(Error::invalid_config(
                "search.fallback_scan_limit must be greater than zero",
            ));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(Error::invalid_config("search page sizes must be greater than zero"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(Error::invalid_config(format!(
                "search.default_page_size ({}) exceeds search.max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        if self.deadline_ms == 0 {
            return Err(Error::invalid_config("search.deadline_ms must be greater than zero"));
        }
        Ok(())
    }
}

fn default_precise_limit() -> usize {
    100
}

fn default_fallback_threshold() -> usize {
    20
}

fn default_fallback_scan_limit() -> usize {
    500
}

fn default_fuzzy_threshold() -> usize {
    2
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    100
}

fn default_deadline_ms() -> u64 {
    2000
}

/// Autocomplete parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestSettings {
    /// Partial queries shorter than this (after trimming) yield no suggestions
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Suggestion count used when the caller does not specify one
    #[serde(default = "default_suggest_limit")]
    pub default_limit: usize,

    /// Upper bound for caller-provided suggestion counts
    #[serde(default = "default_suggest_max_limit")]
    pub max_limit: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            default_limit: default_suggest_limit(),
            max_limit: default_suggest_max_limit(),
        }
    }
}

impl SuggestSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 || self.max_limit == 0 {
            return Err(Error::invalid_config("suggest limits must be greater than zero"));
        }
        if self.default_limit > self.max_limit {
            return Err(Error::invalid_config(format!(
                "suggest.default_limit ({}) exceeds suggest.max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }
}

fn default_min_query_len() -> usize {
    2
}

fn default_suggest_limit() -> usize {
    10
}

fn default_suggest_max_limit() -> usize {
    50
}

/// Named retry policies for store requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RetryProfile {
    /// No retries
    None,
    /// Short delays, for interactive use
    Quick,
    #[default]
    Standard,
    /// Longer delays and more attempts
    Patient,
}

/// Remote catalog store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Base URL of the catalog service; the `CATALOG_API_URL` env var wins when set
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub retry: RetryProfile,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            retry: RetryProfile::default(),
        }
    }
}

impl StoreSettings {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::invalid_config("store.timeout_secs must be greater than zero"));
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::invalid_config(format!(
                    "store.base_url must start with http:// or https:// (got {url})"
                )));
            }
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the compact human format
    #[serde(default)]
    pub json: bool,

    /// Also write daily-rotated log files into this directory
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            log_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let settings = SearchSettings::default();
        assert_eq!(settings.precise_limit, 100);
        assert_eq!(settings.fallback_threshold, 20);
        assert_eq!(settings.fallback_scan_limit, 500);
        assert_eq!(settings.fuzzy_threshold, 2);
        assert_eq!(settings.default_page_size, 20);
        assert_eq!(settings.deadline(), std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [search]
            fuzzy_threshold = 1

            [store]
            retry = "patient"
            "#,
        )
        .unwrap();

        assert_eq!(schema.search.fuzzy_threshold, 1);
        assert_eq!(schema.search.precise_limit, 100);
        assert_eq!(schema.suggest.min_query_len, 2);
        assert_eq!(schema.store.retry, RetryProfile::Patient);
        assert_eq!(schema.logging.level, "warn");
    }

    #[test]
    fn test_validation_rejects_zero_caps() {
        let mut schema = ConfigSchema::default();
        assert!(schema.validate().is_ok());

        schema.search.fallback_scan_limit = 0;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_page_size_above_max() {
        let settings = SearchSettings {
            default_page_size: 200,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_store_url() {
        let settings = StoreSettings {
            base_url: Some("catalog.internal".to_string()),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
