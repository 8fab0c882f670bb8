//! Skip-record source
//!
//! One inbound read: an ordered list of skip records for a location. No
//! pagination and no server-side filtering; everything downstream is
//! client-side. The fetch itself has no retry or cancellation; a calling
//! layer may add those.

use skiphire_types::{Error, Result, SkipRecord};
use tracing::debug;

/// Production endpoint for the by-location lookup
pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk";

/// Supplier of skip records for a location
pub trait SkipSource {
    fn fetch(&self, postcode: &str, area: &str) -> Result<Vec<SkipRecord>>;
}

/// HTTP client for the skips-by-location API
pub struct HttpSkipSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSkipSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpSkipSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SkipSource for HttpSkipSource {
    fn fetch(&self, postcode: &str, area: &str) -> Result<Vec<SkipRecord>> {
        let url = format!("{}/api/skips/by-location", self.base_url);
        debug!(url, postcode, area, "fetching skips");

        let response = self
            .client
            .get(&url)
            .query(&[("postcode", postcode), ("area", area)])
            .send()
            .map_err(|e| Error::SourceFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::SourceFetch(format!(
                "unexpected status {} from {}",
                response.status(),
                url
            )));
        }

        let skips: Vec<SkipRecord> = response
            .json()
            .map_err(|e| Error::SourceFetch(format!("malformed response: {}", e)))?;

        debug!(count = skips.len(), "fetched skips");
        Ok(skips)
    }
}

/// Fixed in-memory source for tests and offline use
#[derive(Debug, Clone, Default)]
pub struct StaticSkipSource {
    skips: Vec<SkipRecord>,
}

impl StaticSkipSource {
    pub fn new(skips: Vec<SkipRecord>) -> Self {
        Self { skips }
    }
}

impl SkipSource for StaticSkipSource {
    fn fetch(&self, _postcode: &str, _area: &str) -> Result<Vec<SkipRecord>> {
        Ok(self.skips.clone())
    }
}

/// A source that always fails, for exercising fetch-failure paths
#[derive(Debug, Clone, Default)]
pub struct FailingSkipSource;

impl SkipSource for FailingSkipSource {
    fn fetch(&self, _postcode: &str, _area: &str) -> Result<Vec<SkipRecord>> {
        Err(Error::SourceFetch("source unavailable".to_string()))
    }
}
