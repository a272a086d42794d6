//! API Client
//!
//! Fetches PokeAPI resources through the response cache: every request
//! consults the cache first and populates it after a successful fetch,
//! keyed by the full request URL.

use std::time::Duration;

use tracing::debug;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

// == Api Client ==
/// HTTP client for the PokeAPI with response memoization.
#[derive(Debug)]
pub struct ApiClient {
    /// Underlying HTTP client
    http: reqwest::Client,
    /// Response cache keyed by request URL
    cache: ResponseCache,
    /// Base URL of the API (no trailing slash)
    base_url: String,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a new client from configuration.
    ///
    /// Spawns the cache's reaper task; must be called within a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(Duration::from_secs(config.cache_ttl_secs))?;

        Ok(Self {
            http: reqwest::Client::new(),
            cache,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    // == Fetch Bytes ==
    /// Returns the raw response body for `url`, from cache when possible.
    ///
    /// On a cache miss the body is fetched over HTTP, stored under the full
    /// URL, and returned. Non-success statuses are errors and are never
    /// cached, so a failed fetch is retried on the next call.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(payload) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(payload);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    // == Location Page ==
    /// Fetches one page of the location-area listing.
    ///
    /// `url` is either the listing root or a `next`/`previous` URL taken
    /// from a previously fetched page.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Area ==
    /// Fetches the encounter detail for a named location area.
    pub async fn location_area(&self, area: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == First Page URL ==
    /// Returns the URL of the first location-area page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Read access to the response cache, for inspection in tests.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}
