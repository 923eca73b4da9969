//! Pillar time-series and pillar ranking routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use kinerja_core::ranking::{RankingService, ScoredEntity};
use kinerja_shared::types::{Pillar, UnitId};
use serde::Deserialize;
use serde_json::json;

use super::{error_response, parse_pillar};
use crate::AppState;

/// Creates the pillar routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pillars/series", get(all_series))
        .route("/pillars/ranking", get(pillar_ranking))
        .route("/pillars/{pillar}/series", get(pillar_series))
}

/// Optional unit filter.
#[derive(Debug, Deserialize)]
pub struct UnitFilter {
    /// Restricts the series to one unit's observations.
    pub unit_id: Option<UnitId>,
}

/// GET `/pillars/{pillar}/series` - Dense pillar average series.
async fn pillar_series(
    State(state): State<AppState>,
    Path(pillar): Path<String>,
    Query(filter): Query<UnitFilter>,
) -> Response {
    let pillar = match parse_pillar(&pillar) {
        Ok(pillar) => pillar,
        Err(e) => return error_response(&e),
    };

    let index = state.observations.index(filter.unit_id);
    Json(json!({
        "pilar": pillar,
        "series": index.pillar_time_series(pillar),
    }))
    .into_response()
}

/// GET `/pillars/series` - Every pillar's series on the shared date axis.
async fn all_series(
    State(state): State<AppState>,
    Query(filter): Query<UnitFilter>,
) -> impl IntoResponse {
    let index = state.observations.index(filter.unit_id);
    Json(json!({ "series": index.all_pillar_series() }))
}

/// GET `/pillars/ranking` - Units ranked per pillar on their latest average.
async fn pillar_ranking(State(state): State<AppState>) -> impl IntoResponse {
    let entities: Vec<ScoredEntity> = state
        .observations
        .units()
        .into_iter()
        .map(|unit| {
            let index = state.observations.index(Some(unit));
            ScoredEntity::from_pillar_snapshot(state.unit_name(unit), &index)
        })
        .collect();
    let columns: Vec<String> = Pillar::ALL.iter().map(ToString::to_string).collect();

    Json(RankingService::rank_table(&entities, &columns, &state.badges))
}
