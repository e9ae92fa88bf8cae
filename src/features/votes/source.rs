use async_trait::async_trait;

use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::votes::error::FetchError;
use crate::features::votes::feed::Feed;

/// Raw relay response; status checks happen in the aggregator.
#[derive(Debug, Clone)]
pub struct RelayBody {
    pub status: u16,
    pub body: String,
}

impl RelayBody {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait RelaySource: Send + Sync {
    async fn fetch(&self, feed: &Feed) -> Result<RelayBody, FetchError>;
}

/// Calls the proxy relay over HTTP.
pub struct HttpRelayClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpRelayClient {
    pub fn new(
        base_url: impl Into<String>,
        disable_proxy: bool,
        timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let http_client = build_http_client(disable_proxy, timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(http_client, base_url))
    }

    pub fn with_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn url_for(&self, feed: &Feed) -> String {
        format!("{}{}", self.base_url, feed.relay_path())
    }
}

#[async_trait]
impl RelaySource for HttpRelayClient {
    async fn fetch(&self, feed: &Feed) -> Result<RelayBody, FetchError> {
        let chamber = feed.chamber();
        let response = self
            .http_client
            .get(self.url_for(feed))
            .send()
            .await
            .map_err(|err| FetchError::Network {
                chamber,
                message: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| FetchError::Network {
            chamber,
            message: format!("failed to read response body: {err}"),
        })?;

        Ok(RelayBody { status, body })
    }
}
