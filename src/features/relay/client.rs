use tracing::{error, warn};

use crate::config::{AppConfig, UpstreamConfig};
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::relay::dto::{JSON_CONTENT_TYPE, RelayedResponse, XML_CONTENT_TYPE};

const SENATE_MENU_PATH: &str = "/legislative/LIS/roll_call_lists";
const HOUSE_ROLLS_PATH: &str = "/evs";

/// One-shot passthrough to the Senate and House roll-call feeds.
pub struct UpstreamClient {
    upstream: UpstreamConfig,
    http_client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.http_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(http_client, config.upstream.clone()))
    }

    pub fn with_client(http_client: reqwest::Client, upstream: UpstreamConfig) -> Self {
        Self {
            upstream,
            http_client,
        }
    }

    pub fn senate_menu_url(&self, congress: u32, session: u8) -> String {
        format!(
            "{}{SENATE_MENU_PATH}/vote_menu_{congress}_{session}.json",
            self.upstream.senate_base_url
        )
    }

    pub fn house_rolls_url(&self, year: u32) -> String {
        format!("{}{HOUSE_ROLLS_PATH}/{year}/ROLLS.xml", self.upstream.house_base_url)
    }

    pub async fn get_senate_menu(
        &self,
        congress: u32,
        session: u8,
    ) -> Result<RelayedResponse, AppError> {
        let url = self.senate_menu_url(congress, session);
        self.forward(&url, "Senate vote menu", JSON_CONTENT_TYPE)
            .await
    }

    pub async fn get_house_rolls(&self, year: u32) -> Result<RelayedResponse, AppError> {
        let url = self.house_rolls_url(year);
        self.forward(&url, "House roll list", XML_CONTENT_TYPE)
            .await
    }

    async fn forward(
        &self,
        url: &str,
        label: &str,
        content_type: &'static str,
    ) -> Result<RelayedResponse, AppError> {
        let response = self.http_client.get(url).send().await.map_err(|err| {
            error!(target: "relay", url, error = %err, "upstream request failed");
            AppError::upstream(format!("failed to fetch {label}: {err}"))
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            error!(target: "relay", url, error = %err, "failed to read upstream body");
            AppError::upstream(format!("failed to read {label}: {err}"))
        })?;

        if !status.is_success() {
            warn!(target: "relay", url, status = status.as_u16(), "upstream returned non-success status");
        }

        Ok(RelayedResponse {
            status,
            content_type,
            body,
        })
    }
}
