use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::features::relay::{handle_healthcheck, handle_house_rolls, handle_senate_menu};
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_healthcheck))
        .route("/api/senate/:congress/:session", get(handle_senate_menu))
        .route("/api/house/:year", get(handle_house_rolls))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
