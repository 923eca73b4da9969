//! Budget absorption routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use kinerja_core::ranking::{COLUMN_ABSORPTION, RankingService, ScoredEntity};
use kinerja_shared::AppError;
use kinerja_shared::types::UnitId;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::{error_response, parse_month};
use crate::AppState;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/units/{unit_id}/budget", get(get_unit_budget))
        .route("/units/{unit_id}/budget/records", get(list_unit_records))
        .route(
            "/units/{unit_id}/budget/{bulan}",
            put(upsert_budget).delete(delete_budget),
        )
        .route("/budget/summary", get(budget_summary))
        .route("/budget/ranking", get(budget_ranking))
}

/// Request body for recording a month's realisation.
#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    /// Annual budget ceiling.
    pub pagu_anggaran: Decimal,
    /// Expenditure realised in the month.
    pub realisasi_pengeluaran: Decimal,
}

/// PUT `/units/{unit_id}/budget/{bulan}` - Create or replace a month's record.
///
/// Responds with the unit's summary after the write.
async fn upsert_budget(
    State(state): State<AppState>,
    Path((unit_id, bulan)): Path<(UnitId, String)>,
    Json(payload): Json<UpsertBudgetRequest>,
) -> Response {
    let month = match parse_month(&bulan) {
        Ok(month) => month,
        Err(e) => return error_response(&e),
    };

    match state.budgets.upsert(
        unit_id,
        month,
        payload.pagu_anggaran,
        payload.realisasi_pengeluaran,
    ) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            warn!(unit_id = %unit_id, month = %month, error = %e, "Budget realisation rejected");
            error_response(&AppError::from(e))
        }
    }
}

/// DELETE `/units/{unit_id}/budget/{bulan}` - Remove a month's record.
async fn delete_budget(
    State(state): State<AppState>,
    Path((unit_id, bulan)): Path<(UnitId, String)>,
) -> Response {
    let month = match parse_month(&bulan) {
        Ok(month) => month,
        Err(e) => return error_response(&e),
    };

    match state.budgets.delete(unit_id, month) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(&AppError::from(e)),
    }
}

/// GET `/units/{unit_id}/budget` - Absorption summary for one unit.
async fn get_unit_budget(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
) -> impl IntoResponse {
    Json(state.budgets.summarize(unit_id))
}

/// GET `/units/{unit_id}/budget/records` - Raw monthly records.
async fn list_unit_records(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
) -> impl IntoResponse {
    Json(json!({ "records": state.budgets.records(unit_id) }))
}

/// GET `/budget/summary` - Summaries for every unit group, keyed by alias.
async fn budget_summary(State(state): State<AppState>) -> impl IntoResponse {
    let summaries = state.budgets.summarize_all(|unit| state.unit_name(unit));
    Json(json!({ "units": summaries }))
}

/// GET `/budget/ranking` - Unit groups ranked by absorption, with badges.
async fn budget_ranking(State(state): State<AppState>) -> impl IntoResponse {
    let summaries = state.budgets.summarize_all(|unit| state.unit_name(unit));
    let entities = ScoredEntity::from_summaries(&summaries);
    let table =
        RankingService::rank_table(&entities, &[COLUMN_ABSORPTION.to_string()], &state.badges);
    Json(table)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, decimal, send};
    use axum::http::StatusCode;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn realisation(ceiling: i64, spent: i64) -> Option<serde_json::Value> {
        Some(json!({ "pagu_anggaran": ceiling, "realisasi_pengeluaran": spent }))
    }

    #[tokio::test]
    async fn test_resubmitted_month_replaces_previous() {
        let app = app();

        send(&app, "PUT", "/api/v1/units/1/budget/Januari", realisation(1000, 100)).await;
        send(&app, "PUT", "/api/v1/units/1/budget/Februari", realisation(1000, 200)).await;
        let (status, _) =
            send(&app, "PUT", "/api/v1/units/1/budget/Januari", realisation(1000, 150)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/api/v1/units/1/budget", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["pagu_anggaran"]), dec!(1000));
        assert_eq!(decimal(&body["total_realisasi"]), dec!(350));
        assert_eq!(decimal(&body["sisa_anggaran"]), dec!(650));
        assert_eq!(decimal(&body["capaian_realisasi"]), dec!(35));

        let rows = body["detail_per_bulan"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["bulan"], "Januari");
        assert_eq!(decimal(&rows[0]["capaian_realisasi"]), dec!(15));
        assert_eq!(decimal(&rows[0]["capaian_realisasi_kumulatif"]), dec!(15));
        assert_eq!(rows[1]["bulan"], "Februari");
        assert_eq!(decimal(&rows[1]["realisasi_kumulatif"]), dec!(350));
        assert_eq!(decimal(&rows[1]["capaian_realisasi_kumulatif"]), dec!(35));

        let (_, body) = send(&app, "GET", "/api/v1/units/1/budget/records", None).await;
        assert_eq!(body["records"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_unit_reads_zero_summary() {
        let app = app();

        let (status, body) = send(&app, "GET", "/api/v1/units/42/budget", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total_realisasi"]), dec!(0));
        assert_eq!(body["detail_per_bulan"], json!([]));
    }

    #[tokio::test]
    async fn test_upsert_rejections() {
        let app = app();

        let (status, body) =
            send(&app, "PUT", "/api/v1/units/1/budget/January", realisation(1000, 1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let (status, body) =
            send(&app, "PUT", "/api/v1/units/1/budget/Maret", realisation(100, 101)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let (status, _) =
            send(&app, "PUT", "/api/v1/units/1/budget/Maret", realisation(-1, 0)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, "GET", "/api/v1/units/1/budget", None).await;
        assert_eq!(body["detail_per_bulan"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_record() {
        let app = app();
        send(&app, "PUT", "/api/v1/units/1/budget/Januari", realisation(1000, 100)).await;
        send(&app, "PUT", "/api/v1/units/1/budget/Februari", realisation(1000, 200)).await;

        let (status, body) = send(&app, "DELETE", "/api/v1/units/1/budget/Januari", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total_realisasi"]), dec!(200));

        let (status, body) = send(&app, "DELETE", "/api/v1/units/1/budget/Januari", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary_groups_by_alias() {
        let app = app();
        send(&app, "PUT", "/api/v1/units/1", Some(json!({ "nama_unit": "Dinas A" }))).await;
        send(&app, "PUT", "/api/v1/units/2", Some(json!({ "nama_unit": "Dinas B" }))).await;
        send(&app, "PUT", "/api/v1/units/1/budget/Januari", realisation(1000, 100)).await;
        send(&app, "PUT", "/api/v1/units/2/budget/Januari", realisation(200, 100)).await;

        let (status, body) = send(&app, "GET", "/api/v1/budget/summary", None).await;
        assert_eq!(status, StatusCode::OK);

        let units = body["units"].as_array().unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0]["nama_unit"], "Dinas A");
        assert_eq!(decimal(&units[0]["capaian_realisasi"]), dec!(10));
        assert_eq!(units[1]["nama_unit"], "Dinas B");
        assert_eq!(decimal(&units[1]["capaian_realisasi"]), dec!(50));
    }

    #[tokio::test]
    async fn test_budget_ranking_badges() {
        let app = app();
        send(&app, "PUT", "/api/v1/units/1", Some(json!({ "nama_unit": "Dinas A" }))).await;
        send(&app, "PUT", "/api/v1/units/2", Some(json!({ "nama_unit": "Dinas B" }))).await;
        send(&app, "PUT", "/api/v1/units/1/budget/Januari", realisation(1000, 100)).await;
        send(&app, "PUT", "/api/v1/units/2/budget/Januari", realisation(200, 100)).await;

        let (status, body) = send(&app, "GET", "/api/v1/budget/ranking", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entity_count"], 2);

        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows[0]["nama"], "Dinas A");
        assert_eq!(rows[0]["ranks"]["capaian_realisasi"]["rank"], 2);
        assert_eq!(rows[0]["ranks"]["capaian_realisasi"]["badge"], "silver");
        assert_eq!(rows[1]["ranks"]["capaian_realisasi"]["rank"], 1);
        assert_eq!(rows[1]["ranks"]["capaian_realisasi"]["badge"], "gold");
    }
}
