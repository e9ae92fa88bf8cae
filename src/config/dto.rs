use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub disable_proxy: bool,
    pub http_timeout_secs: u64,
    pub upstream: UpstreamConfig,
}

/// Base URLs of the government feeds the relay forwards to.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub senate_base_url: String,
    pub house_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub relay_url: String,
    pub settings_path: String,
    pub disable_proxy: bool,
    pub http_timeout_secs: u64,
}
