use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::relay::dto::{HouseRollsPath, RelayedResponse, SenateMenuPath};
use crate::features::settings::FIRST_CONGRESS_YEAR;
use crate::server::AppState;

pub async fn handle_senate_menu(
    State(state): State<AppState>,
    Path(SenateMenuPath { congress, session }): Path<SenateMenuPath>,
) -> Result<RelayedResponse, AppError> {
    if congress == 0 {
        return Err(AppError::bad_request("congress must be at least 1".to_string()));
    }
    if !matches!(session, 1 | 2) {
        return Err(AppError::bad_request(format!(
            "session must be 1 or 2, received {session}"
        )));
    }

    state.relay.get_senate_menu(congress, session).await
}

pub async fn handle_house_rolls(
    State(state): State<AppState>,
    Path(HouseRollsPath { year }): Path<HouseRollsPath>,
) -> Result<RelayedResponse, AppError> {
    if year < FIRST_CONGRESS_YEAR {
        return Err(AppError::bad_request(format!(
            "year must be >= {FIRST_CONGRESS_YEAR}, received {year}"
        )));
    }

    state.relay.get_house_rolls(year).await
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
