//! Indicator observation routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use kinerja_core::snapshot::IndicatorObservation;
use kinerja_shared::AppError;
use kinerja_shared::types::UnitId;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::{error_response, parse_date, parse_pillar};
use crate::AppState;

/// Creates the indicator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/units/{unit_id}/indicators",
            post(record_observation).get(list_observations),
        )
        .route("/indicators/{name}/latest", get(latest_indicator))
}

/// Request body for recording an observation.
#[derive(Debug, Deserialize)]
pub struct RecordObservationRequest {
    /// Indicator name.
    pub nama_indikator: String,
    /// Pillar tag (`BIGGER`, `SMARTER`, `BETTER`).
    pub pilar: String,
    /// Observation date, `YYYY-MM-DD`.
    pub tanggal: String,
    /// Target volume.
    pub target_volume: Decimal,
    /// Achieved volume.
    pub realisasi_volume: Decimal,
}

/// Query for an as-of lookup.
#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    /// As-of date, `YYYY-MM-DD`.
    pub date: String,
    /// Restricts the lookup to one unit's observations.
    pub unit_id: Option<UnitId>,
}

/// POST `/units/{unit_id}/indicators` - Record an indicator observation.
async fn record_observation(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
    Json(payload): Json<RecordObservationRequest>,
) -> Response {
    let pillar = match parse_pillar(&payload.pilar) {
        Ok(pillar) => pillar,
        Err(e) => return error_response(&e),
    };
    let date = match parse_date(&payload.tanggal) {
        Ok(date) => date,
        Err(e) => return error_response(&e),
    };

    let observation = IndicatorObservation {
        unit: unit_id,
        indicator: payload.nama_indikator,
        pillar,
        date,
        target: payload.target_volume,
        achieved: payload.realisasi_volume,
    };

    match state.observations.append(observation) {
        Ok(count) => (StatusCode::CREATED, Json(json!({ "observations": count }))).into_response(),
        Err(e) => {
            warn!(unit_id = %unit_id, error = %e, "Indicator observation rejected");
            error_response(&AppError::from(e))
        }
    }
}

/// GET `/units/{unit_id}/indicators` - Observations for one unit in input order.
async fn list_observations(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
) -> impl IntoResponse {
    Json(json!({ "observations": state.observations.observations(Some(unit_id)) }))
}

/// GET `/indicators/{name}/latest?date=YYYY-MM-DD` - Achievement ratio as of a date.
///
/// `capaian` is `null` when nothing was observed at or before the date.
async fn latest_indicator(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LatestQuery>,
) -> Response {
    let date = match parse_date(&query.date) {
        Ok(date) => date,
        Err(e) => return error_response(&e),
    };

    let index = state.observations.index(query.unit_id);
    let ratio = index.latest_as_of(&name, date);

    Json(json!({
        "nama_indikator": name,
        "tanggal": date,
        "unit_id": query.unit_id,
        "capaian": ratio,
    }))
    .into_response()
}
