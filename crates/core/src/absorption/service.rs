//! Absorption calculations and write validation.

use std::collections::BTreeMap;

use kinerja_shared::types::{UnitId, round_percent, safe_ratio};
use rust_decimal::Decimal;

use super::error::AbsorptionError;
use super::types::{BudgetSummary, MonthlyAbsorption, MonthlyBudgetRecord, UnitSummary};

/// Decimal places for absorption percentages.
const PERCENT_DP: u32 = 2;

/// Budget absorption service for business logic.
pub struct AbsorptionService;

impl AbsorptionService {
    /// Validate a record before it is written.
    ///
    /// # Errors
    ///
    /// Returns `AbsorptionError::NegativeCeiling` or
    /// `AbsorptionError::NegativeRealization` for negative amounts, and
    /// `AbsorptionError::RealizationExceedsCeiling` if expenditure is larger
    /// than the ceiling.
    pub fn validate(budget_ceiling: Decimal, expenditure: Decimal) -> Result<(), AbsorptionError> {
        if budget_ceiling < Decimal::ZERO {
            return Err(AbsorptionError::NegativeCeiling);
        }

        if expenditure < Decimal::ZERO {
            return Err(AbsorptionError::NegativeRealization);
        }

        if expenditure > budget_ceiling {
            return Err(AbsorptionError::RealizationExceedsCeiling {
                expenditure,
                ceiling: budget_ceiling,
            });
        }

        Ok(())
    }

    /// Summarize a set of records as if they belonged to one unit.
    ///
    /// Records are ordered by canonical month before anything is accumulated,
    /// so submission order never affects the cumulative figures. The ceiling
    /// is taken from the first record after ordering; ceilings are not
    /// cross-checked between months. An empty slice yields a zero summary.
    ///
    /// Totals saturate at `Decimal::MAX` instead of overflowing, so any set
    /// of records that passed `validate` can be summarized.
    #[must_use]
    pub fn summarize_records(records: &[MonthlyBudgetRecord]) -> BudgetSummary {
        let mut ordered: Vec<&MonthlyBudgetRecord> = records.iter().collect();
        ordered.sort_by_key(|r| r.month);

        let Some(first) = ordered.first() else {
            return BudgetSummary::default();
        };

        let ceiling = first.budget_ceiling;
        let total_realized = ordered
            .iter()
            .fold(Decimal::ZERO, |sum, r| sum.saturating_add(r.expenditure));

        let mut cumulative = Decimal::ZERO;
        let monthly = ordered
            .iter()
            .map(|r| {
                cumulative = cumulative.saturating_add(r.expenditure);
                MonthlyAbsorption {
                    month: r.month,
                    budget_ceiling: r.budget_ceiling,
                    realized: r.expenditure,
                    absorption: round_percent(
                        safe_ratio(r.expenditure, r.budget_ceiling),
                        PERCENT_DP,
                    ),
                    cumulative_realized: cumulative,
                    cumulative_absorption: round_percent(
                        safe_ratio(cumulative, ceiling),
                        PERCENT_DP,
                    ),
                }
            })
            .collect();

        BudgetSummary {
            budget_ceiling: ceiling,
            total_realized,
            remaining: ceiling.saturating_sub(total_realized),
            absorption: round_percent(safe_ratio(total_realized, ceiling), PERCENT_DP),
            monthly,
        }
    }

    /// Summarize records grouped by a caller-supplied key.
    ///
    /// Units mapping to the same key are merged into one group and summarized
    /// together: the group's ceiling is the first record's ceiling (not the
    /// sum over member units), and a month reported by several units appears
    /// once per unit in `monthly`. Groups come back sorted by key.
    pub fn summarize_groups<I, F>(records: I, group_key: F) -> Vec<UnitSummary>
    where
        I: IntoIterator<Item = MonthlyBudgetRecord>,
        F: Fn(UnitId) -> String,
    {
        let mut groups: BTreeMap<String, (Vec<UnitId>, Vec<MonthlyBudgetRecord>)> =
            BTreeMap::new();

        for record in records {
            let (units, grouped) = groups.entry(group_key(record.unit)).or_default();
            if !units.contains(&record.unit) {
                units.push(record.unit);
            }
            grouped.push(record);
        }

        groups
            .into_iter()
            .map(|(group, (mut units, grouped))| {
                units.sort_unstable();
                UnitSummary {
                    group,
                    units,
                    summary: Self::summarize_records(&grouped),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinerja_shared::types::Month;
    use rust_decimal_macros::dec;

    fn record(unit: i64, month: Month, ceiling: Decimal, spent: Decimal) -> MonthlyBudgetRecord {
        MonthlyBudgetRecord::new(UnitId::new(unit), month, ceiling, spent)
    }

    #[test]
    fn test_validate_accepts_within_ceiling() {
        assert!(AbsorptionService::validate(dec!(1000), dec!(1000)).is_ok());
        assert!(AbsorptionService::validate(dec!(1000), dec!(0)).is_ok());
        assert!(AbsorptionService::validate(dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn test_validate_rejects_overspend() {
        let err = AbsorptionService::validate(dec!(1000), dec!(1000.01)).unwrap_err();
        assert!(matches!(
            err,
            AbsorptionError::RealizationExceedsCeiling { .. }
        ));
        assert_eq!(err.to_string(), "realization exceeds ceiling");
    }

    #[test]
    fn test_validate_rejects_negative() {
        assert!(matches!(
            AbsorptionService::validate(dec!(-1), dec!(0)),
            Err(AbsorptionError::NegativeCeiling)
        ));
        assert!(matches!(
            AbsorptionService::validate(dec!(10), dec!(-1)),
            Err(AbsorptionError::NegativeRealization)
        ));
    }

    #[test]
    fn test_summary_empty() {
        let summary = AbsorptionService::summarize_records(&[]);
        assert_eq!(summary, BudgetSummary::default());
        assert!(summary.monthly.is_empty());
        assert_eq!(summary.absorption, Decimal::ZERO);
    }

    #[test]
    fn test_summary_orders_by_canonical_month() {
        let records = vec![
            record(1, Month::Maret, dec!(1000), dec!(300)),
            record(1, Month::Januari, dec!(1000), dec!(100)),
            record(1, Month::Februari, dec!(1000), dec!(200)),
        ];

        let summary = AbsorptionService::summarize_records(&records);

        let months: Vec<Month> = summary.monthly.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![Month::Januari, Month::Februari, Month::Maret]);
        assert_eq!(summary.monthly[0].cumulative_absorption, dec!(10.00));
        assert_eq!(summary.monthly[1].cumulative_absorption, dec!(30.00));
        assert_eq!(summary.monthly[2].cumulative_absorption, dec!(60.00));
        assert_eq!(summary.monthly[2].cumulative_realized, dec!(600));
        assert_eq!(summary.total_realized, dec!(600));
        assert_eq!(summary.remaining, dec!(400));
        assert_eq!(summary.absorption, dec!(60.00));
    }

    #[test]
    fn test_summary_zero_ceiling_is_zero_percent() {
        let records = vec![record(1, Month::Januari, dec!(0), dec!(0))];

        let summary = AbsorptionService::summarize_records(&records);

        assert_eq!(summary.absorption, Decimal::ZERO);
        assert_eq!(summary.monthly[0].absorption, Decimal::ZERO);
        assert_eq!(summary.monthly[0].cumulative_absorption, Decimal::ZERO);
    }

    #[test]
    fn test_summary_rounds_to_two_places() {
        let records = vec![record(1, Month::Januari, dec!(3), dec!(1))];

        let summary = AbsorptionService::summarize_records(&records);

        assert_eq!(summary.absorption, dec!(33.33));
        assert_eq!(summary.monthly[0].absorption, dec!(33.33));
    }

    #[test]
    fn test_summary_remaining_not_clamped() {
        // Bypassed write validation: the engine reports what it sees.
        let records = vec![
            record(1, Month::Januari, dec!(100), dec!(80)),
            record(1, Month::Februari, dec!(100), dec!(70)),
        ];

        let summary = AbsorptionService::summarize_records(&records);

        assert_eq!(summary.remaining, dec!(-50));
        assert_eq!(summary.absorption, dec!(150.00));
    }

    #[test]
    fn test_summary_ceiling_from_first_month() {
        let records = vec![
            record(1, Month::Februari, dec!(2000), dec!(100)),
            record(1, Month::Januari, dec!(1000), dec!(100)),
        ];

        let summary = AbsorptionService::summarize_records(&records);

        assert_eq!(summary.budget_ceiling, dec!(1000));
        assert_eq!(summary.monthly[1].absorption, dec!(5.00));
        assert_eq!(summary.monthly[1].cumulative_absorption, dec!(20.00));
    }

    #[test]
    fn test_groups_merge_shared_alias() {
        let records = vec![
            record(1, Month::Januari, dec!(1000), dec!(100)),
            record(2, Month::Februari, dec!(1000), dec!(200)),
            record(3, Month::Januari, dec!(500), dec!(50)),
        ];

        let groups = AbsorptionService::summarize_groups(records, |unit| {
            if unit.into_inner() == 3 {
                "Dinas B".to_string()
            } else {
                "Dinas A".to_string()
            }
        });

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "Dinas A");
        assert_eq!(groups[0].units, vec![UnitId::new(1), UnitId::new(2)]);
        assert_eq!(groups[0].summary.total_realized, dec!(300));
        assert_eq!(groups[0].summary.absorption, dec!(30.00));
        assert_eq!(groups[1].group, "Dinas B");
        assert_eq!(groups[1].summary.absorption, dec!(10.00));
    }

    #[test]
    fn test_summary_saturates_on_huge_totals() {
        let records = vec![
            record(1, Month::Januari, Decimal::MAX, Decimal::MAX),
            record(1, Month::Februari, Decimal::MAX, Decimal::MAX),
        ];

        let summary = AbsorptionService::summarize_records(&records);

        assert_eq!(summary.total_realized, Decimal::MAX);
        assert_eq!(summary.remaining, Decimal::ZERO);
        assert_eq!(summary.monthly[1].cumulative_realized, Decimal::MAX);
        assert_eq!(summary.absorption, dec!(100));
    }

    #[test]
    fn test_groups_merge_keeps_first_ceiling_and_repeats_months() {
        let records = vec![
            record(1, Month::Januari, dec!(100), dec!(80)),
            record(2, Month::Januari, dec!(100), dec!(70)),
        ];

        let groups = AbsorptionService::summarize_groups(records, |_| "Dinas".to_string());

        let summary = &groups[0].summary;
        assert_eq!(summary.budget_ceiling, dec!(100));
        assert_eq!(summary.monthly.len(), 2);
        assert_eq!(summary.absorption, dec!(150.00));
    }

    #[test]
    fn test_groups_by_identifier_keep_units_apart() {
        let records = vec![
            record(1, Month::Januari, dec!(1000), dec!(100)),
            record(2, Month::Januari, dec!(1000), dec!(200)),
        ];

        let groups = AbsorptionService::summarize_groups(records, |unit| unit.to_string());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].summary.total_realized, dec!(100));
        assert_eq!(groups[1].summary.total_realized, dec!(200));
    }
}
