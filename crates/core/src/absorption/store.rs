//! Storage seam for monthly budget records.
//!
//! Persistence belongs to the surrounding application; the engine only needs
//! keyed upsert/remove with per-key serialization and consistent reads.

use std::collections::BTreeMap;

use dashmap::DashMap;
use kinerja_shared::types::{Month, UnitId};

use super::types::MonthlyBudgetRecord;

/// Record storage used by [`super::BudgetAggregator`].
///
/// Implementations must serialize writes to the same `(unit, month)` key so
/// that "update if exists, else create" cannot produce duplicates, and must
/// never expose a partially written record to readers.
pub trait BudgetStore: Send + Sync {
    /// Inserts or replaces the record for its `(unit, month)` key.
    ///
    /// Returns the unit's records as they stand right after the write.
    fn put(&self, record: MonthlyBudgetRecord) -> Vec<MonthlyBudgetRecord>;

    /// Removes the record for `(unit, month)`.
    ///
    /// Returns the unit's remaining records, or `None` if nothing was stored
    /// under that key.
    fn remove(&self, unit: UnitId, month: Month) -> Option<Vec<MonthlyBudgetRecord>>;

    /// Returns a snapshot of every record for `unit`.
    fn records(&self, unit: UnitId) -> Vec<MonthlyBudgetRecord>;

    /// Returns a snapshot of every stored record.
    fn all_records(&self) -> Vec<MonthlyBudgetRecord>;
}

/// In-memory store keyed by unit, one ordered month map per unit.
///
/// Writes hold the unit's shard lock for the whole read-modify-write, which
/// serializes concurrent upserts to the same key. Reads clone under a shared
/// guard.
#[derive(Debug, Default)]
pub struct InMemoryBudgetStore {
    units: DashMap<UnitId, BTreeMap<Month, MonthlyBudgetRecord>>,
}

impl InMemoryBudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for InMemoryBudgetStore {
    fn put(&self, record: MonthlyBudgetRecord) -> Vec<MonthlyBudgetRecord> {
        let mut months = self.units.entry(record.unit).or_default();
        months.insert(record.month, record);
        months.values().cloned().collect()
    }

    fn remove(&self, unit: UnitId, month: Month) -> Option<Vec<MonthlyBudgetRecord>> {
        let mut months = self.units.get_mut(&unit)?;
        months.remove(&month)?;
        Some(months.values().cloned().collect())
    }

    fn records(&self, unit: UnitId) -> Vec<MonthlyBudgetRecord> {
        self.units
            .get(&unit)
            .map(|months| months.values().cloned().collect())
            .unwrap_or_default()
    }

    fn all_records(&self) -> Vec<MonthlyBudgetRecord> {
        self.units
            .iter()
            .flat_map(|entry| entry.value().values().cloned().collect::<Vec<_>>())
            .collect()
    }
}
