//! Ranking data types.

use std::collections::BTreeMap;

use kinerja_shared::types::Pillar;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::badge::Badge;
use crate::absorption::UnitSummary;
use crate::snapshot::SnapshotIndex;

/// Score column holding overall budget absorption.
pub const COLUMN_ABSORPTION: &str = "capaian_realisasi";

/// Score column holding total realisation.
pub const COLUMN_TOTAL_REALIZED: &str = "total_realisasi";

/// A named entity carrying named scores.
///
/// A column that is absent, or present as `null`, ranks below every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredEntity {
    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Score per column.
    #[serde(default)]
    pub scores: BTreeMap<String, Option<Decimal>>,
}

impl ScoredEntity {
    /// Creates an entity with no scores.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Builder-style score setter.
    #[must_use]
    pub fn with_score(mut self, column: impl Into<String>, value: Option<Decimal>) -> Self {
        self.scores.insert(column.into(), value);
        self
    }

    /// Value in `column`, `None` when absent.
    #[must_use]
    pub fn score(&self, column: &str) -> Option<Decimal> {
        self.scores.get(column).copied().flatten()
    }

    /// One entity per budget group, scored on absorption and total realisation.
    #[must_use]
    pub fn from_summaries(summaries: &[UnitSummary]) -> Vec<Self> {
        summaries
            .iter()
            .map(|s| {
                Self::new(s.group.clone())
                    .with_score(COLUMN_ABSORPTION, Some(s.summary.absorption))
                    .with_score(COLUMN_TOTAL_REALIZED, Some(s.summary.total_realized))
            })
            .collect()
    }

    /// An entity scored per pillar on the last point of its pillar series.
    ///
    /// Pillars with no indicators in `index` are left missing rather than 0.
    #[must_use]
    pub fn from_pillar_snapshot(name: impl Into<String>, index: &SnapshotIndex) -> Self {
        Pillar::ALL
            .into_iter()
            .fold(Self::new(name), |entity, pillar| {
                let value = if index.indicators(pillar).next().is_none() {
                    None
                } else {
                    index.pillar_time_series(pillar).last().map(|p| p.value)
                };
                entity.with_score(pillar.to_string(), value)
            })
    }
}

/// Rank and badge for one entity in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCell {
    /// Value that was ranked.
    pub value: Option<Decimal>,
    /// 1-based rank, 1 = highest.
    pub rank: usize,
    /// Badge under the active policy.
    pub badge: Badge,
}

/// One entity's ranks across columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Cell per ranked column.
    pub ranks: BTreeMap<String, RankCell>,
}

/// Ranks for every requested column, rows in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    /// Ranked columns in request order.
    pub columns: Vec<String>,
    /// Number of entities ranked; the badge policy depends on it.
    pub entity_count: usize,
    /// Rows in input order.
    pub rows: Vec<RankedEntity>,
}
