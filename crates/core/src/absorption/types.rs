//! Budget absorption data types.
//!
//! Field names on the wire are the persisted contract names consumed by the
//! reporting layer and must not change.

use kinerja_shared::types::{Month, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of budget realisation for a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudgetRecord {
    /// Owning unit.
    #[serde(rename = "unit_id")]
    pub unit: UnitId,
    /// Canonical month.
    #[serde(rename = "bulan")]
    pub month: Month,
    /// Budget ceiling for the fiscal period.
    #[serde(rename = "pagu_anggaran")]
    pub budget_ceiling: Decimal,
    /// Expenditure realised in this month.
    #[serde(rename = "realisasi_pengeluaran")]
    pub expenditure: Decimal,
}

impl MonthlyBudgetRecord {
    /// Creates a record.
    #[must_use]
    pub const fn new(
        unit: UnitId,
        month: Month,
        budget_ceiling: Decimal,
        expenditure: Decimal,
    ) -> Self {
        Self {
            unit,
            month,
            budget_ceiling,
            expenditure,
        }
    }
}

/// Per-month absorption detail row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAbsorption {
    /// Canonical month.
    #[serde(rename = "bulan")]
    pub month: Month,
    /// Ceiling recorded for this month.
    #[serde(rename = "pagu_anggaran")]
    pub budget_ceiling: Decimal,
    /// Expenditure realised in this month.
    #[serde(rename = "realisasi_pengeluaran")]
    pub realized: Decimal,
    /// This month's realisation as a percentage of its ceiling (2 dp).
    #[serde(rename = "capaian_realisasi")]
    pub absorption: Decimal,
    /// Running total of realisation up to and including this month.
    #[serde(rename = "realisasi_kumulatif")]
    pub cumulative_realized: Decimal,
    /// Running total as a percentage of the unit ceiling (2 dp).
    #[serde(rename = "capaian_realisasi_kumulatif")]
    pub cumulative_absorption: Decimal,
}

/// Absorption summary for one unit (or one merged group of units).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Budget ceiling.
    #[serde(rename = "pagu_anggaran")]
    pub budget_ceiling: Decimal,
    /// Sum of expenditure across all months.
    #[serde(rename = "total_realisasi")]
    pub total_realized: Decimal,
    /// Ceiling minus total realisation; negative when overspent.
    #[serde(rename = "sisa_anggaran")]
    pub remaining: Decimal,
    /// Overall absorption percentage (2 dp).
    #[serde(rename = "capaian_realisasi")]
    pub absorption: Decimal,
    /// Detail rows in canonical month order.
    #[serde(rename = "detail_per_bulan")]
    pub monthly: Vec<MonthlyAbsorption>,
}

/// Summary for one reporting group in the cross-unit view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    /// Grouping key, normally the unit display name.
    #[serde(rename = "nama_unit")]
    pub group: String,
    /// Units merged into this group.
    #[serde(rename = "unit_ids")]
    pub units: Vec<UnitId>,
    /// Summary over the merged records.
    #[serde(flatten)]
    pub summary: BudgetSummary,
}
