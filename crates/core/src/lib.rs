//! Core aggregation logic for Kinerja.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `absorption` - Monthly budget absorption and cumulative realisation
//! - `snapshot` - Point-in-time indicator lookups and pillar series
//! - `ranking` - Cross-entity ranking with badge assignment

pub mod absorption;
pub mod ranking;
pub mod snapshot;
