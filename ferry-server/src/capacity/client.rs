//! Capacity feed HTTP client.

use crate::domain::ScheduleSnapshot;
use crate::refresh::Producer;

use super::error::CapacityError;

/// Default base URL for the capacity feed.
const DEFAULT_BASE_URL: &str = "https://www.bcferriesapi.ca";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the capacity feed client.
#[derive(Debug, Clone)]
pub struct CapacityClientConfig {
    /// Base URL for the feed
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CapacityClientConfig {
    /// Create a config with the default feed endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a mirror deployment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for CapacityClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the sailing capacity feed.
///
/// Fetches the full schedule as one JSON document. There is no incremental
/// endpoint: every fetch returns a complete snapshot, which is what lets the
/// store replace its contents wholesale.
#[derive(Debug, Clone)]
pub struct CapacityClient {
    http: reqwest::Client,
    base_url: String,
}

impl CapacityClient {
    /// Create a new capacity feed client.
    pub fn new(config: CapacityClientConfig) -> Result<Self, CapacityError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the current schedule from the feed.
    pub async fn fetch_capacity(&self) -> Result<ScheduleSnapshot, CapacityError> {
        let url = format!("{}/v2/capacity", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CapacityError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CapacityError::Json {
            message: e.to_string(),
        })
    }
}

impl Producer for CapacityClient {
    fn fetch(
        &self,
    ) -> impl std::future::Future<Output = Result<ScheduleSnapshot, CapacityError>> + Send {
        self.fetch_capacity()
    }
}
