//! Budget absorption error types.

use kinerja_shared::AppError;
use kinerja_shared::types::{Month, UnitId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget absorption errors.
#[derive(Debug, Error)]
pub enum AbsorptionError {
    /// Expenditure is larger than the budget ceiling.
    #[error("realization exceeds ceiling")]
    RealizationExceedsCeiling {
        /// Submitted expenditure.
        expenditure: Decimal,
        /// Submitted ceiling.
        ceiling: Decimal,
    },

    /// Budget ceiling cannot be negative.
    #[error("budget ceiling cannot be negative")]
    NegativeCeiling,

    /// Expenditure cannot be negative.
    #[error("realization cannot be negative")]
    NegativeRealization,

    /// No record exists for the targeted unit and month.
    #[error("no budget record for unit {unit} in {month}")]
    RecordNotFound {
        /// Unit the request was scoped to.
        unit: UnitId,
        /// Month that was targeted.
        month: Month,
    },
}

impl From<AbsorptionError> for AppError {
    fn from(err: AbsorptionError) -> Self {
        match err {
            AbsorptionError::RecordNotFound { .. } => Self::NotFound(err.to_string()),
            AbsorptionError::RealizationExceedsCeiling { .. }
            | AbsorptionError::NegativeCeiling
            | AbsorptionError::NegativeRealization => Self::Validation(err.to_string()),
        }
    }
}
