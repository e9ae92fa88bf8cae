use std::sync::Arc;

use crate::features::relay::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(relay: Arc<UpstreamClient>) -> Self {
        Self { relay }
    }
}
