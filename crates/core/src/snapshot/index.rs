//! Per-indicator as-of index.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use kinerja_shared::types::{Pillar, round_percent};
use rust_decimal::Decimal;

use super::types::{IndicatorObservation, SeriesPoint};

#[derive(Debug, Clone)]
struct IndicatorHistory {
    pillar: Pillar,
    ratios: BTreeMap<NaiveDate, Decimal>,
}

impl IndicatorHistory {
    fn latest_as_of(&self, date: NaiveDate) -> Option<Decimal> {
        self.ratios
            .range(..=date)
            .next_back()
            .map(|(_, ratio)| *ratio)
    }
}

/// Sorted index of observation histories keyed by indicator name.
///
/// Building costs O(n log n); each as-of lookup is O(log n).
#[derive(Debug, Clone, Default)]
pub struct SnapshotIndex {
    indicators: BTreeMap<String, IndicatorHistory>,
    dates: BTreeSet<NaiveDate>,
}

impl SnapshotIndex {
    /// Builds the index from observations in input order.
    ///
    /// Input need not be sorted. Two observations of one indicator on the
    /// same date resolve to the one appearing later in the input. An
    /// indicator's pillar is the tag on its last observation in the input.
    pub fn build<'a, I>(observations: I) -> Self
    where
        I: IntoIterator<Item = &'a IndicatorObservation>,
    {
        let mut index = Self::default();

        for obs in observations {
            index.dates.insert(obs.date);
            let history = index
                .indicators
                .entry(obs.indicator.clone())
                .or_insert_with(|| IndicatorHistory {
                    pillar: obs.pillar,
                    ratios: BTreeMap::new(),
                });
            history.pillar = obs.pillar;
            history.ratios.insert(obs.date, obs.ratio());
        }

        index
    }

    /// Most recent achievement ratio for `indicator` at or before `date`.
    ///
    /// `None` when the indicator is unknown or has no observation that early.
    pub fn latest_as_of(&self, indicator: &str, date: NaiveDate) -> Option<Decimal> {
        self.indicators.get(indicator)?.latest_as_of(date)
    }

    /// Every distinct observation date in the indexed set, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Indicator names tagged with `pillar`.
    pub fn indicators(&self, pillar: Pillar) -> impl Iterator<Item = &str> + '_ {
        self.indicators
            .iter()
            .filter(move |(_, h)| h.pillar == pillar)
            .map(|(name, _)| name.as_str())
    }

    /// Pillar average over the full date axis.
    ///
    /// One point per distinct date anywhere in the set, so every pillar's
    /// series lines up for overlaid charts. At each date the pillar's
    /// indicators with a defined ratio are averaged; undefined ones are left
    /// out. With none defined the point is still emitted with value 0. The
    /// running sum saturates, so saturated ratios cannot overflow it.
    pub fn pillar_time_series(&self, pillar: Pillar) -> Vec<SeriesPoint> {
        let members: Vec<&IndicatorHistory> = self
            .indicators
            .values()
            .filter(|h| h.pillar == pillar)
            .collect();

        self.dates
            .iter()
            .map(|&date| {
                let (sum, count) = members
                    .iter()
                    .filter_map(|h| h.latest_as_of(date))
                    .fold((Decimal::ZERO, 0u32), |(sum, count), ratio| {
                        (sum.saturating_add(ratio), count + 1)
                    });

                let value = if count == 0 {
                    Decimal::ZERO
                } else {
                    round_percent(sum / Decimal::from(count), 0)
                };

                SeriesPoint {
                    period: date,
                    value,
                }
            })
            .collect()
    }

    /// Series for every pillar on the shared date axis.
    pub fn all_pillar_series(&self) -> BTreeMap<Pillar, Vec<SeriesPoint>> {
        Pillar::ALL
            .into_iter()
            .map(|pillar| (pillar, self.pillar_time_series(pillar)))
            .collect()
    }
}
