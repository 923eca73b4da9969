//! Unit alias routes.
//!
//! Units sharing an alias (`nama_unit`) are summarised as one group.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use kinerja_shared::AppError;
use kinerja_shared::types::UnitId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::AppState;

/// Creates the unit routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/units", get(list_units))
        .route("/units/{unit_id}", put(register_unit))
}

/// Request body for registering a unit alias.
#[derive(Debug, Deserialize)]
pub struct RegisterUnitRequest {
    /// Display alias.
    pub nama_unit: String,
}

/// A registered unit.
#[derive(Debug, Serialize)]
pub struct UnitResponse {
    /// Unit identifier.
    pub unit_id: UnitId,
    /// Display alias.
    pub nama_unit: String,
}

/// PUT `/units/{unit_id}` - Register or rename a unit alias.
async fn register_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
    Json(payload): Json<RegisterUnitRequest>,
) -> Response {
    let name = payload.nama_unit.trim();
    if name.is_empty() {
        return error_response(&AppError::Validation(
            "nama_unit must not be empty".to_string(),
        ));
    }

    state.units.insert(unit_id, name.to_string());
    info!(unit_id = %unit_id, nama_unit = %name, "Unit alias registered");

    (
        StatusCode::OK,
        Json(UnitResponse {
            unit_id,
            nama_unit: name.to_string(),
        }),
    )
        .into_response()
}

/// GET `/units` - List registered aliases by unit id.
async fn list_units(State(state): State<AppState>) -> impl IntoResponse {
    let mut units: Vec<UnitResponse> = state
        .units
        .iter()
        .map(|entry| UnitResponse {
            unit_id: *entry.key(),
            nama_unit: entry.value().clone(),
        })
        .collect();
    units.sort_by_key(|u| u.unit_id);

    Json(json!({ "units": units }))
}
