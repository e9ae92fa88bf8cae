use std::sync::Arc;

use tracing::{info, warn};

use crate::features::settings::Settings;
use crate::features::votes::dto::Vote;
use crate::features::votes::error::FetchError;
use crate::features::votes::feed::Feed;
use crate::features::votes::helpers::snippet;
use crate::features::votes::source::RelaySource;

/// Fetches the selected chambers through the relay and merges them into one
/// list, newest first. Any failing chamber fails the whole fetch.
pub struct VoteAggregator {
    source: Arc<dyn RelaySource>,
}

impl VoteAggregator {
    pub fn new(source: Arc<dyn RelaySource>) -> Self {
        Self { source }
    }

    pub async fn fetch_votes(&self, settings: &Settings) -> Result<Vec<Vote>, FetchError> {
        if !settings.has_chamber() {
            return Err(FetchError::NoChamberSelected);
        }
        settings.validate().map_err(FetchError::InvalidSettings)?;

        let mut votes = Vec::new();
        for feed in &Feed::for_settings(settings) {
            let batch = self.fetch_feed(feed).await.inspect_err(|error| {
                warn!(target: "votes", %error, path = %feed.relay_path(), "vote fetch aborted");
            })?;
            info!(target: "votes", chamber = %feed.chamber(), count = batch.len(), "fetched votes");
            votes.extend(batch);
        }

        sort_votes(&mut votes);
        Ok(votes)
    }

    async fn fetch_feed(&self, feed: &Feed) -> Result<Vec<Vote>, FetchError> {
        let response = self.source.fetch(feed).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                chamber: feed.chamber(),
                status: response.status,
                snippet: snippet(&response.body),
            });
        }

        feed.parse(&response.body)
    }
}

/// Newest first; votes without a usable date go last. Stable, so equal
/// dates keep their fetch order.
pub fn sort_votes(votes: &mut [Vote]) {
    votes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
