//! Common types used across the application.

pub mod id;
pub mod month;
pub mod percent;
pub mod pillar;

pub use id::*;
pub use month::Month;
pub use percent::{round_percent, safe_ratio};
pub use pillar::Pillar;
