use std::env;

use crate::config::dto::{AppConfig, ClientConfig, UpstreamConfig};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "4200";
const DEFAULT_SENATE_BASE: &str = "https://www.senate.gov";
const DEFAULT_HOUSE_BASE: &str = "https://clerk.house.gov";
const DEFAULT_RELAY_URL: &str = "http://localhost:4200";
const DEFAULT_SETTINGS_PATH: &str = ".congress-votes";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("RELAY_PORT")
        .or_else(|_| env::var("PORT"))
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let upstream = UpstreamConfig {
        senate_base_url: base_url_env("SENATE_BASE_URL", DEFAULT_SENATE_BASE),
        house_base_url: base_url_env("HOUSE_BASE_URL", DEFAULT_HOUSE_BASE),
    };

    Ok(AppConfig {
        port,
        disable_proxy: parse_bool_env("RELAY_DISABLE_PROXY", false),
        http_timeout_secs: parse_u64_env("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        upstream,
    })
}

pub fn load_client_config() -> ClientConfig {
    dotenvy::dotenv().ok();

    ClientConfig {
        relay_url: base_url_env("VOTES_RELAY_URL", DEFAULT_RELAY_URL),
        settings_path: env::var("VOTES_SETTINGS_PATH")
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string()),
        disable_proxy: parse_bool_env("RELAY_DISABLE_PROXY", false),
        http_timeout_secs: parse_u64_env("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
    }
}

fn base_url_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn parse_u64_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
