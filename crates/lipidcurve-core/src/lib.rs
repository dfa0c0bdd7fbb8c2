//! Core computation for population cholesterol distribution charts.
//!
//! This crate turns a `(mean, standard deviation, threshold)` triple into a
//! sampled Gaussian density curve together with the fraction of the
//! population on either side of the threshold. It is designed to work in
//! `no_std` environments with only an allocator, so the numbers can be
//! reproduced anywhere independent of a plotting library.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls and ANSI colors in the
//!   formatted summaries (via the `colored` crate).
//!
//! # Usage
//!
//! ```
//! use lipidcurve_core::{DistributionAnalyzer, DistributionParameters, GridRange};
//!
//! let params = DistributionParameters::new(200.0, 40.0, 184.0);
//! let curve = DistributionAnalyzer::new()
//!     .sample_count(1000)
//!     .grid(GridRange::symmetric(4.0))
//!     .build_curve(&params)
//!     .unwrap();
//!
//! assert_eq!(curve.len(), 1000);
//! assert!((curve.below_threshold_fraction + curve.above_threshold_fraction - 1.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod analysis;
pub mod colors;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod math;
pub mod result;
pub mod statistics;
pub mod types;

// Re-export commonly used items at crate root
pub use analysis::{build_curve, linspace, DistributionAnalyzer};
pub use error::InvalidParameterError;
pub use result::DistributionCurve;
pub use statistics::{ReadingStats, ReadingSummary};
pub use types::{DistributionParameters, GridRange};
