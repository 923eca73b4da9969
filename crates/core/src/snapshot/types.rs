//! Snapshot data types.

use chrono::NaiveDate;
use kinerja_shared::types::{Pillar, UnitId, safe_ratio};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated target/achievement pair for one indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorObservation {
    /// Reporting unit.
    #[serde(rename = "unit_id")]
    pub unit: UnitId,
    /// Indicator name; observations with the same name form one history.
    #[serde(rename = "nama_indikator")]
    pub indicator: String,
    /// Pillar tag.
    #[serde(rename = "pilar")]
    pub pillar: Pillar,
    /// Observation date.
    #[serde(rename = "tanggal")]
    pub date: NaiveDate,
    /// Target volume, may be zero.
    #[serde(rename = "target_volume")]
    pub target: Decimal,
    /// Achieved volume, may be zero or exceed the target.
    #[serde(rename = "realisasi_volume")]
    pub achieved: Decimal,
}

impl IndicatorObservation {
    /// Achievement ratio in percent; zero when the target is zero.
    ///
    /// Not clamped: over-achievement reports above 100.
    #[must_use]
    pub fn ratio(&self) -> Decimal {
        safe_ratio(self.achieved, self.target)
    }
}

/// One point of a derived series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Date on the shared axis.
    pub period: NaiveDate,
    /// Averaged achievement ratio, whole percentage points.
    pub value: Decimal,
}
