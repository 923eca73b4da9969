//! Badge policy applied on top of ranks.

use kinerja_shared::config::BadgeConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Badge rendered next to a ranked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Rank 1.
    Gold,
    /// Rank 2.
    Silver,
    /// Rank 3.
    Bronze,
    /// Zero or missing value, or one of the bottom ranks.
    Warning,
    /// No badge.
    Neutral,
}

/// Maps `(rank, value, entity count)` to a badge.
///
/// Depends on the entity count, so badges must be recomputed whenever the
/// ranked set changes size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePolicy {
    /// Top ranks receiving a medal, at most 3.
    pub top_count: usize,
    /// Entity count from which the last two ranks are warned instead of one.
    pub two_bottom_from: usize,
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self::from(BadgeConfig::default())
    }
}

impl From<BadgeConfig> for BadgePolicy {
    fn from(config: BadgeConfig) -> Self {
        Self {
            top_count: config.top_count.min(3),
            two_bottom_from: config.two_bottom_from,
        }
    }
}

impl BadgePolicy {
    /// How many of the last ranks get a warning for `entity_count` entities.
    ///
    /// Never overlaps the medal ranks.
    #[must_use]
    pub fn bottom_count(&self, entity_count: usize) -> usize {
        let wanted = if entity_count <= self.top_count {
            0
        } else if entity_count < self.two_bottom_from {
            1
        } else {
            2
        };
        wanted.min(entity_count.saturating_sub(self.top_count))
    }

    /// Badge for an entity at `rank` with `value` among `entity_count`.
    #[must_use]
    pub fn badge(&self, rank: usize, value: Option<Decimal>, entity_count: usize) -> Badge {
        if value.is_none_or(|v| v.is_zero()) {
            return Badge::Warning;
        }

        match rank {
            1 if self.top_count >= 1 => return Badge::Gold,
            2 if self.top_count >= 2 => return Badge::Silver,
            3 if self.top_count >= 3 => return Badge::Bronze,
            _ => {}
        }

        if rank > entity_count.saturating_sub(self.bottom_count(entity_count)) {
            Badge::Warning
        } else {
            Badge::Neutral
        }
    }
}
