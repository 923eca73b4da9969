//! Ranking service.

use std::collections::BTreeMap;

use super::badge::BadgePolicy;
use super::types::{RankCell, RankTable, RankedEntity, ScoredEntity};

/// Stateless ranking operations.
pub struct RankingService;

impl RankingService {
    /// 1-based rank of each entity in `column`, in input order.
    ///
    /// Higher values rank first; missing values rank after every present
    /// one. Ties are broken by input order, so equal values receive
    /// consecutive distinct ranks rather than a shared one.
    #[must_use]
    pub fn rank(entities: &[ScoredEntity], column: &str) -> Vec<usize> {
        let mut order: Vec<usize> = (0..entities.len()).collect();
        // `Option` orders `None` below every `Some`, and the sort is stable.
        order.sort_by(|&a, &b| {
            entities[b]
                .score(column)
                .cmp(&entities[a].score(column))
        });

        let mut ranks = vec![0; entities.len()];
        for (position, index) in order.into_iter().enumerate() {
            ranks[index] = position + 1;
        }
        ranks
    }

    /// Ranks every column independently and attaches badges.
    ///
    /// Duplicate column names are ranked once.
    #[must_use]
    pub fn rank_table(
        entities: &[ScoredEntity],
        columns: &[String],
        policy: &BadgePolicy,
    ) -> RankTable {
        let mut columns_seen: Vec<String> = Vec::with_capacity(columns.len());
        for column in columns {
            if !columns_seen.contains(column) {
                columns_seen.push(column.clone());
            }
        }

        let count = entities.len();
        let mut rows: Vec<RankedEntity> = entities
            .iter()
            .map(|e| RankedEntity {
                name: e.name.clone(),
                ranks: BTreeMap::new(),
            })
            .collect();

        for column in &columns_seen {
            let ranks = Self::rank(entities, column);
            for ((row, entity), rank) in rows.iter_mut().zip(entities).zip(ranks) {
                let value = entity.score(column);
                row.ranks.insert(
                    column.clone(),
                    RankCell {
                        value,
                        rank,
                        badge: policy.badge(rank, value, count),
                    },
                );
            }
        }

        RankTable {
            columns: columns_seen,
            entity_count: count,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::absorption::{BudgetSummary, UnitSummary};
    use crate::ranking::badge::Badge;
    use crate::ranking::types::{COLUMN_ABSORPTION, COLUMN_TOTAL_REALIZED};
    use kinerja_shared::types::UnitId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entity(name: &str, value: Option<Decimal>) -> ScoredEntity {
        ScoredEntity::new(name).with_score("nilai", value)
    }

    #[test]
    fn test_rank_ties_consecutive_missing_last() {
        let entities = vec![
            entity("A", Some(dec!(10))),
            entity("B", Some(dec!(30))),
            entity("C", Some(dec!(30))),
            entity("D", Some(dec!(5))),
            entity("E", None),
        ];

        assert_eq!(RankingService::rank(&entities, "nilai"), vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn test_rank_unknown_column_keeps_input_order() {
        let entities = vec![entity("A", Some(dec!(1))), entity("B", Some(dec!(2)))];

        assert_eq!(RankingService::rank(&entities, "lain"), vec![1, 2]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(RankingService::rank(&[], "nilai").is_empty());
    }

    #[test]
    fn test_rank_negative_values() {
        let entities = vec![
            entity("A", Some(dec!(-5))),
            entity("B", None),
            entity("C", Some(dec!(-1))),
        ];

        assert_eq!(RankingService::rank(&entities, "nilai"), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_table_badges() {
        let entities = vec![
            entity("A", Some(dec!(10))),
            entity("B", Some(dec!(30))),
            entity("C", Some(dec!(30))),
            entity("D", Some(dec!(5))),
            entity("E", None),
        ];

        let table =
            RankingService::rank_table(&entities, &["nilai".to_string()], &BadgePolicy::default());

        let badges: Vec<Badge> = table.rows.iter().map(|r| r.ranks["nilai"].badge).collect();
        assert_eq!(
            badges,
            vec![
                Badge::Bronze,
                Badge::Gold,
                Badge::Silver,
                Badge::Neutral,
                Badge::Warning,
            ]
        );
        assert_eq!(table.entity_count, 5);
        assert_eq!(table.rows[4].ranks["nilai"].value, None);
    }

    #[test]
    fn test_rank_table_columns_independent() {
        let entities = vec![
            ScoredEntity::new("A")
                .with_score("x", Some(dec!(1)))
                .with_score("y", Some(dec!(9))),
            ScoredEntity::new("B")
                .with_score("x", Some(dec!(2)))
                .with_score("y", Some(dec!(3))),
        ];
        let columns = vec!["x".to_string(), "y".to_string(), "x".to_string()];

        let table = RankingService::rank_table(&entities, &columns, &BadgePolicy::default());

        assert_eq!(table.columns, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(table.rows[0].ranks["x"].rank, 2);
        assert_eq!(table.rows[0].ranks["y"].rank, 1);
        assert_eq!(table.rows[1].ranks["x"].rank, 1);
        assert_eq!(table.rows[1].ranks["y"].rank, 2);
    }

    #[test]
    fn test_from_summaries_scores_absorption() {
        let summaries = vec![
            UnitSummary {
                group: "Dinas A".to_string(),
                units: vec![UnitId::new(1)],
                summary: BudgetSummary {
                    absorption: dec!(35.00),
                    total_realized: dec!(350),
                    ..BudgetSummary::default()
                },
            },
            UnitSummary {
                group: "Dinas B".to_string(),
                units: vec![UnitId::new(2)],
                summary: BudgetSummary {
                    absorption: dec!(80.00),
                    total_realized: dec!(80),
                    ..BudgetSummary::default()
                },
            },
        ];

        let entities = ScoredEntity::from_summaries(&summaries);

        assert_eq!(entities[0].score(COLUMN_ABSORPTION), Some(dec!(35.00)));
        assert_eq!(entities[0].score(COLUMN_TOTAL_REALIZED), Some(dec!(350)));
        assert_eq!(RankingService::rank(&entities, COLUMN_ABSORPTION), vec![2, 1]);
        assert_eq!(RankingService::rank(&entities, COLUMN_TOTAL_REALIZED), vec![1, 2]);
    }
}
