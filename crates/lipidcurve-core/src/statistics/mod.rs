//! Summary statistics for raw readings.
//!
//! Used to estimate distribution parameters from observed cholesterol
//! readings before they are fed into the curve analysis.

mod readings;

pub use readings::{ReadingStats, ReadingSummary};
