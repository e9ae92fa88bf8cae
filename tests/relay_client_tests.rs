//! The aggregator driven over HTTP: `HttpRelayClient` against a real relay
//! router, itself in front of stubbed government feeds.

mod common;

use std::sync::Arc;

use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{HOUSE_ROLLS, SENATE_MENU, relay_app, test_http_client};
use congress_votes::features::settings::Settings;
use congress_votes::features::votes::{
    Chamber, Feed, FetchError, HttpRelayClient, RelaySource, VoteAggregator,
};

/// Serves the relay on an ephemeral port and returns its base URL.
async fn spawn_relay(upstream_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = relay_app(upstream_url);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn stub(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn relay_client_reports_status_and_body() {
    let upstream = MockServer::start().await;
    stub(&upstream, "/evs/2023/ROLLS.xml", 503, "busy").await;
    let relay_url = spawn_relay(&upstream.uri()).await;

    let client = HttpRelayClient::with_client(test_http_client(), format!("{relay_url}/"));
    let response = client
        .fetch(&Feed::House { year: 2023 })
        .await
        .expect("response");

    assert_eq!(response.status, 503);
    assert_eq!(response.body, "busy");
    assert!(!response.is_success());
}

#[tokio::test]
async fn unreachable_relay_is_a_labelled_network_error() {
    let client = HttpRelayClient::with_client(test_http_client(), "http://127.0.0.1:1");

    let error = client
        .fetch(&Feed::Senate {
            congress: 118,
            session: 2,
        })
        .await
        .expect_err("network error");

    assert!(matches!(
        error,
        FetchError::Network {
            chamber: Chamber::Senate,
            ..
        }
    ));
    assert!(error.to_string().starts_with("Senate request failed: "));
}

#[tokio::test]
async fn fetches_and_merges_through_the_relay() {
    let upstream = MockServer::start().await;
    stub(
        &upstream,
        "/legislative/LIS/roll_call_lists/vote_menu_118_2.json",
        200,
        SENATE_MENU,
    )
    .await;
    stub(&upstream, "/evs/2024/ROLLS.xml", 200, HOUSE_ROLLS).await;
    let relay_url = spawn_relay(&upstream.uri()).await;

    let client = HttpRelayClient::with_client(test_http_client(), relay_url);
    let aggregator = VoteAggregator::new(Arc::new(client));

    let votes = aggregator
        .fetch_votes(&Settings::default())
        .await
        .expect("votes");

    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0].key, "h-2024-10");
    assert_eq!(votes[0].result, "Passed (200-150)");
    assert_eq!(votes[1].key, "s-118-2-5");
    assert_eq!(votes[1].title, "HR1: On Passage");
}

#[tokio::test]
async fn upstream_404_fails_the_whole_fetch() {
    let upstream = MockServer::start().await;
    stub(
        &upstream,
        "/legislative/LIS/roll_call_lists/vote_menu_118_2.json",
        200,
        SENATE_MENU,
    )
    .await;
    stub(&upstream, "/evs/2024/ROLLS.xml", 404, "Not Found").await;
    let relay_url = spawn_relay(&upstream.uri()).await;

    let client = HttpRelayClient::with_client(test_http_client(), relay_url);
    let aggregator = VoteAggregator::new(Arc::new(client));

    let error = aggregator
        .fetch_votes(&Settings::default())
        .await
        .expect_err("fatal");

    assert_eq!(
        error.to_string(),
        "House request failed with status 404: Not Found"
    );
}
