//! Snapshot error types.

use kinerja_shared::AppError;
use thiserror::Error;

/// Errors raised when recording indicator observations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Indicator name is blank.
    #[error("indicator name cannot be empty")]
    EmptyIndicatorName,

    /// Target or achieved volume is negative.
    #[error("{field} cannot be negative")]
    NegativeVolume {
        /// Offending field.
        field: &'static str,
    },
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        Self::Validation(err.to_string())
    }
}
