//! Gaussian density curve with a threshold split.
//!
//! The CDF at the threshold uses the closed-form erf relation
//! `Φ(z) = ½(1 + erf(z/√2))` rather than integrating the sampled density,
//! so results are deterministic and independent of the grid.

extern crate alloc;

use alloc::vec::Vec;

use super::grid::linspace;
use crate::constants::{DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use crate::error::InvalidParameterError;
use crate::math;
use crate::result::DistributionCurve;
use crate::types::{DistributionParameters, GridRange};

/// Builds [`DistributionCurve`]s for a fixed grid policy.
///
/// Defaults to 1000 points spanning `mean ± 4σ`.
///
/// # Example
///
/// ```
/// use lipidcurve_core::{DistributionAnalyzer, DistributionParameters, GridRange};
///
/// let curve = DistributionAnalyzer::new()
///     .grid(GridRange::fixed_window())
///     .build_curve(&DistributionParameters::fixed_window_reference())
///     .unwrap();
///
/// assert_eq!(curve.x_values[0], 100.0);
/// assert_eq!(curve.x_values[curve.len() - 1], 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionAnalyzer {
    sample_count: usize,
    grid: GridRange,
}

impl Default for DistributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionAnalyzer {
    /// Create an analyzer with the default grid (1000 points, `mean ± 4σ`).
    pub fn new() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            grid: GridRange::default(),
        }
    }

    /// Set the number of grid points.
    ///
    /// Validated when a curve is built; fewer than 2 is an error.
    pub fn sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    /// Set the grid range policy.
    pub fn grid(mut self, grid: GridRange) -> Self {
        self.grid = grid;
        self
    }

    /// Configured number of grid points.
    pub fn configured_sample_count(&self) -> usize {
        self.sample_count
    }

    /// Configured grid range policy.
    pub fn configured_grid(&self) -> GridRange {
        self.grid
    }

    /// Build the curve for `params`.
    ///
    /// # Errors
    ///
    /// See [`build_curve`].
    pub fn build_curve(
        &self,
        params: &DistributionParameters,
    ) -> Result<DistributionCurve, InvalidParameterError> {
        build_curve(params, self.sample_count, self.grid)
    }
}

/// Sample the density of `N(mean, std_dev²)` on `sample_count` evenly spaced
/// points and split the population at `params.threshold()`.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] if `std_dev <= 0`, `sample_count < 2`,
/// the mean or threshold is non-finite, or the grid range is empty.
pub fn build_curve(
    params: &DistributionParameters,
    sample_count: usize,
    grid: GridRange,
) -> Result<DistributionCurve, InvalidParameterError> {
    params.validate()?;
    if sample_count < MIN_SAMPLE_COUNT {
        return Err(InvalidParameterError::TooFewSamples { sample_count });
    }
    let (lower, upper) = grid.bounds(params)?;

    let mean = params.mean();
    let std_dev = params.std_dev();

    let x_values = linspace(lower, upper, sample_count);
    let density_values: Vec<f64> = x_values
        .iter()
        .map(|&x| math::normal_pdf(x, mean, std_dev))
        .collect();

    let below_threshold_fraction = math::normal_cdf_at(params.threshold(), mean, std_dev);
    let above_threshold_fraction = 1.0 - below_threshold_fraction;
    let density_at_threshold = math::normal_pdf(params.threshold(), mean, std_dev);

    Ok(DistributionCurve {
        params: *params,
        grid,
        x_values,
        density_values,
        below_threshold_fraction,
        above_threshold_fraction,
        density_at_threshold,
    })
}
