//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the aggregation engines
//! - Shared application state
//! - JSON error responses

pub mod routes;

use std::sync::Arc;

use axum::Router;
use dashmap::DashMap;
use kinerja_core::absorption::BudgetAggregator;
use kinerja_core::ranking::BadgePolicy;
use kinerja_core::snapshot::ObservationLog;
use kinerja_shared::types::UnitId;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Monthly budget records and absorption summaries.
    pub budgets: Arc<BudgetAggregator>,
    /// Indicator observations.
    pub observations: Arc<ObservationLog>,
    /// Display alias per unit (`nama_unit`).
    pub units: Arc<DashMap<UnitId, String>>,
    /// Badge policy applied to every ranking.
    pub badges: BadgePolicy,
}

impl AppState {
    /// Creates empty in-memory state.
    #[must_use]
    pub fn new(badges: BadgePolicy) -> Self {
        Self {
            budgets: Arc::new(BudgetAggregator::in_memory()),
            observations: Arc::new(ObservationLog::new()),
            units: Arc::new(DashMap::new()),
            badges,
        }
    }

    /// Registered alias for `unit`, or a name derived from its id.
    ///
    /// Units sharing an alias are grouped together in summaries.
    #[must_use]
    pub fn unit_name(&self, unit: UnitId) -> String {
        self.units
            .get(&unit)
            .map_or_else(|| format!("Unit {unit}"), |name| name.value().clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
