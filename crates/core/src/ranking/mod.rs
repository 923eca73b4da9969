//! Cross-entity ranking and badge assignment.

pub mod badge;
pub mod service;
pub mod types;


pub use badge::{Badge, BadgePolicy};
pub use service::RankingService;
pub use types::{
    COLUMN_ABSORPTION, COLUMN_TOTAL_REALIZED, RankCell, RankTable, RankedEntity, ScoredEntity,
};
