#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use congress_votes::config::UpstreamConfig;
use congress_votes::core::http_client::build_http_client;
use congress_votes::features::relay::UpstreamClient;
use congress_votes::server::{AppState, build_router};

pub const SENATE_MENU: &str = r#"{"roll_calls":{"roll_call":[{"vote_number":5,"vote_date":"2024-03-01","issue":" HR1 ","question":" On Passage ","result":"Agreed to","counts":{"Yea":60,"Nay":40}}]}}"#;

pub const HOUSE_ROLLS: &str = "<rolls><rollcall-vote>\
    <action-date>2024-03-02</action-date><action-time>14:00</action-time>\
    <rollcall-num>10</rollcall-num><vote-question>On Agreeing</vote-question>\
    <vote-result>Passed</vote-result>\
    <totals-by-vote><yea-total>200</yea-total><nay-total>150</nay-total></totals-by-vote>\
    </rollcall-vote></rolls>";

/// A relay router whose Senate and House upstreams both point at `base_url`.
pub fn relay_app(base_url: &str) -> Router {
    let upstream = UpstreamConfig {
        senate_base_url: base_url.to_string(),
        house_base_url: base_url.to_string(),
    };
    let relay = UpstreamClient::with_client(test_http_client(), upstream);
    build_router(AppState::new(Arc::new(relay)))
}

/// Short timeout and no system proxy, so local stubs are reached directly.
pub fn test_http_client() -> reqwest::Client {
    build_http_client(true, 5).expect("http client")
}
