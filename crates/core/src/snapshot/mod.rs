//! Point-in-time indicator snapshots and pillar time series.
//!
//! Observations arrive at irregular, indicator-specific cadences. The index
//! answers "latest known achievement as of date D" as a step function over
//! real observations; nothing is interpolated.

pub mod error;
pub mod index;
pub mod log;
pub mod types;


pub use error::SnapshotError;
pub use index::SnapshotIndex;
pub use log::ObservationLog;
pub use types::{IndicatorObservation, SeriesPoint};
