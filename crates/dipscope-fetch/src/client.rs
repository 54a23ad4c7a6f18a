//! DIP API client
//!
//! Walks each configured endpoint page by page, following the API's
//! cursor, and hands every non-empty page to a [`PageSink`].
//!
//! Requests are strictly sequential. HTTP 429 waits `rate_limit_wait_secs`
//! and retries; HTTP 5xx retries with exponential backoff. Both count
//! against `max_retries` for the current page.

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::store::PageSink;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// Outcome of fetching one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReport {
    /// Endpoint name
    pub endpoint: String,

    /// Pages saved
    pub pages: usize,

    /// Documents across saved pages
    pub documents: usize,

    /// Why the endpoint stopped early, if it did
    pub error: Option<String>,
}

/// Outcome of a full fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// One entry per configured endpoint, in configuration order
    pub endpoints: Vec<EndpointReport>,
}

impl FetchReport {
    /// Pages saved across endpoints
    pub fn total_pages(&self) -> usize {
        self.endpoints.iter().map(|e| e.pages).sum()
    }

    /// Documents saved across endpoints
    pub fn total_documents(&self) -> usize {
        self.endpoints.iter().map(|e| e.documents).sum()
    }

    /// Whether any endpoint stopped with an error
    pub fn has_errors(&self) -> bool {
        self.endpoints.iter().any(|e| e.error.is_some())
    }
}

/// Client for the Bundestag DIP API
pub struct DipClient {
    config: FetchConfig,
    api_key: String,
    http: reqwest::Client,
}

impl DipClient {
    /// Create a client with an explicit API key
    pub fn new(config: FetchConfig, api_key: impl Into<String>) -> Result<Self, FetchError> {
        config.validate().map_err(FetchError::Config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            api_key: api_key.into(),
            http,
        })
    }

    /// Create a client reading the API key from `config.api_key_env`
    pub fn from_env(config: FetchConfig) -> Result<Self, FetchError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FetchError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    /// Client configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch every configured endpoint
    ///
    /// A failing endpoint is logged and recorded; the remaining endpoints
    /// are still fetched.
    pub async fn fetch_all<S: PageSink>(&self, sink: &mut S) -> FetchReport {
        let mut report = FetchReport::default();

        for (name, path) in &self.config.endpoints {
            let mut entry = EndpointReport {
                endpoint: name.clone(),
                pages: 0,
                documents: 0,
                error: None,
            };
            if let Err(e) = self.fetch_endpoint(name, path, sink, &mut entry).await {
                error!("Fetching {} failed: {}", name, e);
                entry.error = Some(e.to_string());
            }
            info!(
                "{}: {} pages, {} documents",
                name, entry.pages, entry.documents
            );
            report.endpoints.push(entry);
        }

        report
    }

    /// Fetch one endpoint until the cursor stops moving or a page is empty
    pub async fn fetch_endpoint<S: PageSink>(
        &self,
        name: &str,
        path: &str,
        sink: &mut S,
        report: &mut EndpointReport,
    ) -> Result<(), FetchError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut params = self.config.initial_params(name);
        let mut page = 1usize;

        loop {
            let body = self.get_page(name, &url, &params).await?;

            let documents = body
                .get("documents")
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0);
            if documents == 0 {
                info!("No further documents for {}", name);
                return Ok(());
            }

            sink.save_page(name, page, &body)?;
            report.pages += 1;
            report.documents += documents;
            info!("{}: page {} saved ({} documents)", name, page, documents);

            let next_cursor = body
                .get("cursor")
                .or_else(|| body.get("nextCursor"))
                .and_then(Value::as_str)
                .filter(|c| !c.is_empty());
            let Some(next_cursor) = next_cursor else {
                debug!("{}: no cursor in response, done", name);
                return Ok(());
            };
            if params.get("cursor").map(String::as_str) == Some(next_cursor) {
                debug!("{}: cursor unchanged, done", name);
                return Ok(());
            }

            params.insert("cursor".to_string(), next_cursor.to_string());
            page += 1;
            tokio::time::sleep(self.config.page_delay()).await;
        }
    }

    /// GET one page, retrying rate-limit and server errors
    async fn get_page(
        &self,
        endpoint: &str,
        url: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Value, FetchError> {
        let mut retries = 0u32;

        loop {
            let response = self
                .http
                .get(url)
                .header(reqwest::header::AUTHORIZATION, format!("ApiKey {}", self.api_key))
                .query(params)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                let text = response.text().await?;
                return serde_json::from_str(&text).map_err(|e| {
                    FetchError::InvalidResponse(format!("{}: {}", endpoint, e))
                });
            }

            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if !retryable {
                return Err(FetchError::UnexpectedStatus {
                    endpoint: endpoint.to_string(),
                    status: status.as_u16(),
                });
            }

            retries += 1;
            if retries > self.config.max_retries {
                return Err(FetchError::RetriesExhausted {
                    attempts: retries,
                    status: status.as_u16(),
                });
            }

            let wait = if status == StatusCode::TOO_MANY_REQUESTS {
                self.config.rate_limit_wait()
            } else {
                self.config.server_error_backoff(retries)
            };
            warn!(
                "{}: HTTP {}, retrying in {:?} ({}/{})",
                endpoint, status, wait, retries, self.config.max_retries
            );
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DipClient::new(FetchConfig::default(), "key").unwrap();
        assert_eq!(client.config().endpoints.len(), 2);
        assert_eq!(client.api_key, "key");
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = FetchConfig::default();
        config.api_key_env = "DIPSCOPE_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        let result = DipClient::from_env(config);
        assert!(matches!(result, Err(FetchError::MissingApiKey(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = FetchConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(
            DipClient::new(config, "key"),
            Err(FetchError::Config(_))
        ));
    }

    #[test]
    fn test_report_totals() {
        let report = FetchReport {
            endpoints: vec![
                EndpointReport {
                    endpoint: "drucksache".into(),
                    pages: 2,
                    documents: 150,
                    error: None,
                },
                EndpointReport {
                    endpoint: "vorgang".into(),
                    pages: 1,
                    documents: 10,
                    error: Some("boom".into()),
                },
            ],
        };
        assert_eq!(report.total_pages(), 3);
        assert_eq!(report.total_documents(), 160);
        assert!(report.has_errors());
    }
}
