//! Ranking over caller-supplied entities.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use kinerja_core::ranking::{RankingService, ScoredEntity};
use kinerja_shared::AppError;
use serde::Deserialize;

use super::error_response;
use crate::AppState;

/// Creates the ranking routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rankings", post(rank_entities))
}

/// Request body for ranking arbitrary entities.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Columns to rank, each independently.
    pub columns: Vec<String>,
    /// Entities with their scores.
    pub entities: Vec<ScoredEntity>,
}

/// POST `/rankings` - Rank entities per column and attach badges.
async fn rank_entities(State(state): State<AppState>, Json(payload): Json<RankRequest>) -> Response {
    if payload.columns.is_empty() {
        return error_response(&AppError::Validation(
            "at least one column is required".to_string(),
        ));
    }

    let table = RankingService::rank_table(&payload.entities, &payload.columns, &state.badges);
    Json(table).into_response()
}
