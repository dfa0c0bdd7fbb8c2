//! Density curve construction.
//!
//! - **Grid** (`grid`): evenly spaced sample points, endpoints included
//! - **Curve** (`curve`): Gaussian density over the grid and the CDF split at a threshold

mod curve;
mod grid;

pub use curve::{build_curve, DistributionAnalyzer};
pub use grid::linspace;
