//! Shared types, errors, and configuration for Kinerja.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for organisational units
//! - The canonical month and pillar vocabularies
//! - Percentage helpers with the division-by-zero-as-zero convention
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
