//! Upstream airport reference-data client
//!
//! Fetches the full airport list from the upstream API in a single request.
//! Transport and parse failures are logged and absorbed: callers always get a
//! (possibly empty) list of records and never an error.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::RawAirport;

/// Default upstream endpoint for airport reference data
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.qantas.com/flight/refData/airport";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when fetching upstream airport data
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A source of raw airport records
///
/// Implementations never fail: any failure is reported as an empty list.
/// Entries are `None` where the upstream array held `null`.
pub trait AirportSource {
    fn fetch_all(&self) -> impl Future<Output = Vec<Option<RawAirport>>> + Send;
}

/// Client for fetching airport records from the upstream API
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: Client,
    url: String,
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

impl UpstreamClient {
    /// Creates a new UpstreamClient for the given endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            url: url.into(),
        }
    }

    /// Creates a new UpstreamClient whose requests time out after `timeout`
    ///
    /// # Returns
    /// * `Ok(UpstreamClient)` - Client enforcing the timeout
    /// * `Err(UpstreamError)` - If the HTTP client cannot be built
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// The configured upstream endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and parses the airport list
    ///
    /// # Returns
    /// * `Ok(Vec)` - All records, with `None` for null array entries
    /// * `Err(UpstreamError)` - If the request, status or parsing fails
    pub async fn try_fetch_all(&self) -> Result<Vec<Option<RawAirport>>, UpstreamError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let airports: Option<Vec<Option<RawAirport>>> = serde_json::from_str(&text)?;

        match airports {
            Some(airports) => Ok(airports),
            None => {
                tracing::warn!("Received null response from upstream airport API");
                Ok(Vec::new())
            }
        }
    }
}

impl AirportSource for UpstreamClient {
    async fn fetch_all(&self) -> Vec<Option<RawAirport>> {
        tracing::info!(url = %self.url, "Fetching airport data from upstream API");
        match self.try_fetch_all().await {
            Ok(airports) => {
                tracing::info!("Successfully fetched {} airports", airports.len());
                airports
            }
            Err(e) => {
                tracing::error!(url = %self.url, "Error fetching upstream airport data: {}", e);
                Vec::new()
            }
        }
    }
}
