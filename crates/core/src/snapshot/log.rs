//! Append-only observation log with cached snapshot indexes.
//!
//! Indexes are cached per `(unit filter, log version)` with Moka, so repeated
//! reads between writes reuse the same index.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use std::time::Duration;

use kinerja_shared::types::UnitId;
use moka::sync::Cache;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::SnapshotError;
use super::index::SnapshotIndex;
use super::types::IndicatorObservation;

/// Default cache capacity (number of indexes).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Default time-to-live for cached indexes (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

type IndexKey = (Option<UnitId>, u64);

#[derive(Default)]
struct LogState {
    observations: Vec<IndicatorObservation>,
    version: u64,
}

/// Thread-safe, append-only store of indicator observations.
pub struct ObservationLog {
    state: RwLock<LogState>,
    cache: Cache<IndexKey, Arc<SnapshotIndex>>,
}

impl ObservationLog {
    /// Creates an empty log with default cache settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates an empty log with a custom index cache.
    #[must_use]
    pub fn with_cache_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            state: RwLock::new(LogState::default()),
            cache,
        }
    }

    /// Appends an observation and returns the new log length.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::EmptyIndicatorName` for a blank indicator name
    /// and `SnapshotError::NegativeVolume` for a negative target or achieved
    /// volume.
    pub fn append(&self, mut observation: IndicatorObservation) -> Result<usize, SnapshotError> {
        let trimmed = observation.indicator.trim();
        if trimmed.is_empty() {
            return Err(SnapshotError::EmptyIndicatorName);
        }
        if trimmed.len() != observation.indicator.len() {
            observation.indicator = trimmed.to_string();
        }
        if observation.target < Decimal::ZERO {
            return Err(SnapshotError::NegativeVolume {
                field: "target_volume",
            });
        }
        if observation.achieved < Decimal::ZERO {
            return Err(SnapshotError::NegativeVolume {
                field: "realisasi_volume",
            });
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        debug!(
            unit_id = %observation.unit,
            indicator = %observation.indicator,
            date = %observation.date,
            "Indicator observation recorded"
        );
        state.observations.push(observation);
        state.version += 1;
        Ok(state.observations.len())
    }

    /// Snapshot index over all units, or over one unit's observations.
    pub fn index(&self, unit: Option<UnitId>) -> Arc<SnapshotIndex> {
        let state = self.read();
        self.cache.get_with((unit, state.version), || {
            debug!(unit_id = ?unit, version = state.version, "Building snapshot index");
            Arc::new(SnapshotIndex::build(
                state
                    .observations
                    .iter()
                    .filter(|o| unit.is_none_or(|u| o.unit == u)),
            ))
        })
    }

    /// Copy of the observations, optionally for one unit, in input order.
    pub fn observations(&self, unit: Option<UnitId>) -> Vec<IndicatorObservation> {
        self.read()
            .observations
            .iter()
            .filter(|o| unit.is_none_or(|u| o.unit == u))
            .cloned()
            .collect()
    }

    /// Units with at least one observation, ascending.
    pub fn units(&self) -> BTreeSet<UnitId> {
        self.read().observations.iter().map(|o| o.unit).collect()
    }

    /// Number of observations recorded.
    pub fn len(&self) -> usize {
        self.read().observations.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, LogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ObservationLog {
    fn default() -> Self {
        Self::new()
    }
}
