//! Configuration for the fetch client
//!
//! Mirrors the `[api]` section of the settings file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default DIP API base URL
pub const DEFAULT_BASE_URL: &str = "https://search.dip.bundestag.de/api/v1";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "DIP_API_KEY";

/// Endpoint whose date filter is `f.datum.*`; all others use `f.aktualisiert.*`
pub const DATED_ENDPOINT: &str = "drucksache";

/// Inclusive date window applied as API filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// End date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Configuration for the DIP client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API base URL, without trailing slash
    pub base_url: String,

    /// Endpoint name → path (e.g. `drucksache` → `/drucksache`)
    pub endpoints: BTreeMap<String, String>,

    /// Extra query parameters sent with every request
    pub request_params: BTreeMap<String, String>,

    /// Optional date filter
    pub date_range: DateRange,

    /// Pause between pages (milliseconds)
    /// Default: 1000
    pub page_delay_ms: u64,

    /// Wait after HTTP 429 before retrying (seconds)
    /// Default: 60
    pub rate_limit_wait_secs: u64,

    /// First backoff after a server error (milliseconds), doubled per retry
    /// Default: 1000
    pub retry_backoff_ms: u64,

    /// Consecutive retries allowed per page
    /// Default: 5
    pub max_retries: u32,

    /// Request timeout (seconds)
    /// Default: 30
    pub timeout_secs: u64,

    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let endpoints = [("drucksache", "/drucksache"), ("vorgang", "/vorgang")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request_params = [("format".to_string(), "json".to_string())].into();

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints,
            request_params,
            date_range: DateRange::default(),
            page_delay_ms: 1000,
            rate_limit_wait_secs: 60,
            retry_backoff_ms: 1000,
            max_retries: 5,
            timeout_secs: 30,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl FetchConfig {
    /// Pause between pages
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Wait after a rate-limit response
    pub fn rate_limit_wait(&self) -> Duration {
        Duration::from_secs(self.rate_limit_wait_secs)
    }

    /// Backoff before retry number `attempt` (1-based) after a server error
    pub fn server_error_backoff(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Query parameters for the first page of `endpoint`
    ///
    /// Starts from `request_params`, sets `cursor=*` unless given, and adds
    /// the date filter: `f.datum.*` for Drucksachen, `f.aktualisiert.*`
    /// for everything else.
    pub fn initial_params(&self, endpoint: &str) -> BTreeMap<String, String> {
        let mut params = self.request_params.clone();
        params
            .entry("cursor".to_string())
            .or_insert_with(|| "*".to_string());

        let field = if endpoint == DATED_ENDPOINT {
            "datum"
        } else {
            "aktualisiert"
        };
        if let Some(from) = &self.date_range.from {
            params.insert(format!("f.{}.start", field), from.clone());
        }
        if let Some(to) = &self.date_range.to {
            params.insert(format!("f.{}.end", field), to.clone());
        }
        params
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.endpoints.is_empty() {
            return Err("at least one endpoint must be configured".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env must not be empty".to_string());
        }
        Ok(())
    }
}
