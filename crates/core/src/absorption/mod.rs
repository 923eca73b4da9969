//! Budget absorption: monthly and cumulative realisation against a ceiling.

pub mod aggregator;
pub mod error;
pub mod service;
pub mod store;
pub mod types;


pub use aggregator::BudgetAggregator;
pub use error::AbsorptionError;
pub use service::AbsorptionService;
pub use store::{BudgetStore, InMemoryBudgetStore};
pub use types::{BudgetSummary, MonthlyAbsorption, MonthlyBudgetRecord, UnitSummary};
