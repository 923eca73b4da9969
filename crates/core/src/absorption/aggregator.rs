//! Budget absorption aggregator over a record store.

use kinerja_shared::types::{Month, UnitId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::AbsorptionError;
use super::service::AbsorptionService;
use super::store::{BudgetStore, InMemoryBudgetStore};
use super::types::{BudgetSummary, MonthlyBudgetRecord, UnitSummary};

/// Maintains and reports monthly and cumulative absorption per unit.
pub struct BudgetAggregator<S = InMemoryBudgetStore> {
    store: S,
}

impl BudgetAggregator<InMemoryBudgetStore> {
    /// Creates an aggregator backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(InMemoryBudgetStore::new())
    }
}

impl Default for BudgetAggregator<InMemoryBudgetStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: BudgetStore> BudgetAggregator<S> {
    /// Creates an aggregator backed by `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes or replaces the record for `(unit, month)` and returns the
    /// unit's summary after the write.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either amount is negative or if the
    /// expenditure exceeds the ceiling. Nothing is written in that case.
    pub fn upsert(
        &self,
        unit: UnitId,
        month: Month,
        budget_ceiling: Decimal,
        expenditure: Decimal,
    ) -> Result<BudgetSummary, AbsorptionError> {
        AbsorptionService::validate(budget_ceiling, expenditure)?;

        let records = self.store.put(MonthlyBudgetRecord::new(
            unit,
            month,
            budget_ceiling,
            expenditure,
        ));

        info!(
            unit_id = %unit,
            month = %month,
            pagu_anggaran = %budget_ceiling,
            realisasi_pengeluaran = %expenditure,
            "Budget realisation recorded"
        );

        Ok(AbsorptionService::summarize_records(&records))
    }

    /// Deletes the record for `(unit, month)` and returns the unit's summary
    /// after the delete.
    ///
    /// # Errors
    ///
    /// Returns `AbsorptionError::RecordNotFound` if the unit has no record for
    /// that month.
    pub fn delete(&self, unit: UnitId, month: Month) -> Result<BudgetSummary, AbsorptionError> {
        let records = self
            .store
            .remove(unit, month)
            .ok_or(AbsorptionError::RecordNotFound { unit, month })?;

        info!(unit_id = %unit, month = %month, "Budget realisation deleted");

        Ok(AbsorptionService::summarize_records(&records))
    }

    /// Summary for one unit. A unit with no records yields a zero summary.
    pub fn summarize(&self, unit: UnitId) -> BudgetSummary {
        let records = self.store.records(unit);
        debug!(unit_id = %unit, records = records.len(), "Summarizing unit budget");
        AbsorptionService::summarize_records(&records)
    }

    /// The unit's records in canonical month order.
    pub fn records(&self, unit: UnitId) -> Vec<MonthlyBudgetRecord> {
        let mut records = self.store.records(unit);
        records.sort_by_key(|r| r.month);
        records
    }

    /// Cross-unit summaries grouped by `group_key`.
    ///
    /// Units whose keys collide are merged into one group. A merged group
    /// keeps a single ceiling (its earliest record's, not the sum over
    /// units) and lists a shared month once per unit, so its absorption can
    /// exceed 100%. Passing the display
    /// alias reproduces the dashboard's cross-unit view; passing the unit id
    /// keeps every unit separate.
    pub fn summarize_all<F>(&self, group_key: F) -> Vec<UnitSummary>
    where
        F: Fn(UnitId) -> String,
    {
        let records = self.store.all_records();
        debug!(records = records.len(), "Summarizing all units");
        AbsorptionService::summarize_groups(records, group_key)
    }
}
