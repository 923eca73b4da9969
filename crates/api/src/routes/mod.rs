//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use kinerja_shared::{AppError, AppResult};
use kinerja_shared::types::{Month, Pillar};
use serde_json::json;

use crate::AppState;

pub mod budgets;
pub mod health;
pub mod indicators;
pub mod pillars;
pub mod rankings;
pub mod units;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(units::routes())
        .merge(budgets::routes())
        .merge(indicators::routes())
        .merge(pillars::routes())
        .merge(rankings::routes())
}

/// Renders an `AppError` as `{"error": code, "message": text}`.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

pub(crate) fn parse_month(raw: &str) -> AppResult<Month> {
    raw.parse().map_err(AppError::Validation)
}

pub(crate) fn parse_pillar(raw: &str) -> AppResult<Pillar> {
    raw.parse().map_err(AppError::Validation)
}

/// Parses an ISO `YYYY-MM-DD` date.
pub(crate) fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date: {raw}, expected YYYY-MM-DD")))
}
