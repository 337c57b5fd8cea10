//! YouTube Data API client.
//!
//! Small REST client with:
//! - API-key authentication
//! - Request and connect timeouts
//! - Observability (tracing spans, metrics)

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, Instrument};
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::metrics::record_request;
use crate::types::{SearchListResponse, VideoListResponse};

/// Public endpoint of the YouTube Data API.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

// =============================================================================
// Configuration
// =============================================================================

/// Catalog client configuration.
#[derive(Clone)]
pub struct CatalogConfig {
    /// API key; requests fail fast when absent
    pub api_key: Option<String>,
    /// API base URL (overridable for tests and proxies)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl CatalogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let timeout_secs: u64 = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let connect_timeout_secs: u64 = std::env::var("CATALOG_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Self {
            api_key,
            base_url: std::env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        }
    }

    /// Config pointing at `base_url` with the given key and default timeouts.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// YouTube Data API client.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("tunelink-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::from)?;

        Ok(Self { http, config })
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Fetch video resources by id (`videos.list`).
    ///
    /// `parts` is the comma-separated resource part list, e.g. `snippet,contentDetails`.
    pub async fn list_videos(&self, ids: &[&str], parts: &str) -> CatalogResult<VideoListResponse> {
        let ids = ids.join(",");
        self.get_json("videos.list", "videos", &[("part", parts), ("id", &ids)])
            .await
    }

    /// Search videos of one channel (`search.list`).
    pub async fn search_channel_videos(
        &self,
        query: &str,
        channel_id: &str,
        max_results: u32,
    ) -> CatalogResult<SearchListResponse> {
        let max_results = max_results.to_string();
        self.get_json(
            "search.list",
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("channelId", channel_id),
                ("maxResults", &max_results),
            ],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> CatalogResult<T> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CatalogError::MissingApiKey)?;

        let endpoint_url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let url = Url::parse_with_params(
            &endpoint_url,
            params.iter().copied().chain(std::iter::once(("key", api_key))),
        )?;

        self.execute_request(operation, async {
            let response = self.http.get(url).send().await?;
            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CatalogError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))
        })
        .await
    }

    async fn execute_request<T, F>(&self, operation: &str, fut: F) -> CatalogResult<T>
    where
        F: std::future::Future<Output = CatalogResult<T>>,
    {
        let span = info_span!("catalog_request", operation = %operation);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);
        debug!(operation = %operation, status, latency_ms, "Catalog request finished");

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        std::env::remove_var("YOUTUBE_API_KEY");
        std::env::remove_var("YOUTUBE_API_BASE_URL");
        std::env::remove_var("CATALOG_TIMEOUT_SECS");
        let config = CatalogConfig::from_env();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_config_blank_key_is_absent() {
        std::env::set_var("YOUTUBE_API_KEY", "  ");
        let config = CatalogConfig::from_env();
        assert!(config.api_key.is_none());
        std::env::remove_var("YOUTUBE_API_KEY");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = CatalogConfig::new("secret-key", DEFAULT_BASE_URL);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = CatalogClient::new(CatalogConfig::default()).unwrap();
        assert!(!client.has_api_key());
        let err = client.list_videos(&["abc"], "snippet").await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingApiKey));
    }
}
