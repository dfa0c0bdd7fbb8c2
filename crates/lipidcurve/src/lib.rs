//! # lipidcurve
//!
//! Chart the assumed population distribution of total cholesterol around a
//! threshold.
//!
//! Given a mean, a standard deviation and a threshold (all in mg/dL), this
//! crate models the population as a normal distribution and produces:
//! - A sampled density curve over a configurable grid
//! - The fraction of the population at or below the threshold, and above it
//! - An SVG chart with both regions shaded and the threshold annotated
//!
//! The numbers come from `lipidcurve-core`, which has no plotting
//! dependencies and works without `std`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lipidcurve::{CholesterolChart, SvgRenderer};
//!
//! let curve = CholesterolChart::nhanes().run(&SvgRenderer::new())?;
//! println!("{:.1}% below threshold", curve.percent_below());
//! # Ok::<(), lipidcurve::Error>(())
//! ```
//!
//! ## Parameters from data
//!
//! ```no_run
//! use lipidcurve::{CholesterolChart, ReadingsCsvSource};
//!
//! let curve = CholesterolChart::nhanes()
//!     .with_source(ReadingsCsvSource::new("readings.csv").has_header(true))?
//!     .analyze()?;
//! # Ok::<(), lipidcurve::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod chart;
mod config;
mod error;

// Functional modules
pub mod output;
pub mod source;

// Re-exports for public API
pub use chart::CholesterolChart;
pub use config::Config;
pub use error::{Error, Result};
pub use output::{ChartError, ChartRenderer, ChartStyle, Rgb, SvgRenderer};
pub use source::{
    FixedSource, ParameterSource, ReadingsCsvSource, SourceError, SourcedParameters,
};

// Re-export core types
pub use lipidcurve_core::{
    build_curve, constants, linspace, DistributionAnalyzer, DistributionCurve,
    DistributionParameters, GridRange, InvalidParameterError,
};
