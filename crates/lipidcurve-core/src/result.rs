//! The sampled density curve handed to renderers.

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::types::{DistributionParameters, GridRange};

/// A Gaussian density sampled on an evenly spaced grid, split at a threshold.
///
/// Produced by [`crate::build_curve`]. `x_values` is strictly increasing and
/// has the same length as `density_values`. The two fractions sum to 1
/// within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCurve {
    /// Parameters the curve was built from.
    pub params: DistributionParameters,

    /// Grid policy the curve was built with.
    pub grid: GridRange,

    /// Grid points, evenly spaced and inclusive of both endpoints.
    pub x_values: Vec<f64>,

    /// Density at each grid point (same length as `x_values`, each >= 0).
    pub density_values: Vec<f64>,

    /// P(X <= threshold), computed in closed form via erf.
    pub below_threshold_fraction: f64,

    /// P(X > threshold) = 1 - `below_threshold_fraction`.
    pub above_threshold_fraction: f64,

    /// Density at the threshold, used to place the annotation arrow.
    pub density_at_threshold: f64,
}

impl DistributionCurve {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Whether the curve has no points (never true for a built curve).
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Threshold the curve was split at.
    pub fn threshold(&self) -> f64 {
        self.params.threshold()
    }

    /// Share of the population at or below the threshold, in percent.
    pub fn percent_below(&self) -> f64 {
        self.below_threshold_fraction * 100.0
    }

    /// Share of the population above the threshold, in percent.
    pub fn percent_above(&self) -> f64 {
        self.above_threshold_fraction * 100.0
    }

    /// Index of the largest density value.
    ///
    /// Ties resolve to the earliest index.
    pub fn peak_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.density_values.iter().enumerate() {
            match best {
                Some((_, b)) if d <= b => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Grid point and density at the peak.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.peak_index()
            .map(|i| (self.x_values[i], self.density_values[i]))
    }

    /// Largest density value on the grid (0 for an empty curve).
    pub fn max_density(&self) -> f64 {
        self.density_values.iter().copied().fold(0.0, f64::max)
    }

    /// First grid index whose x lies strictly above the threshold.
    ///
    /// Points `[..split_index]` form the at-or-below region and
    /// `[split_index..]` the above region.
    pub fn split_index(&self) -> usize {
        let threshold = self.threshold();
        self.x_values.partition_point(|&x| x <= threshold)
    }

    /// `(x, density)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scaled_points(1.0)
    }

    /// `(x, density * scale)` pairs.
    ///
    /// A scale of 100 expresses the density as percent of the population
    /// per mg/dL.
    pub fn scaled_points(&self, scale: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .zip(&self.density_values)
            .map(move |(&x, &d)| (x, d * scale))
    }

    /// Points at or below the threshold, scaled.
    pub fn below_points(&self, scale: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scaled_points(scale).take(self.split_index())
    }

    /// Points strictly above the threshold, scaled.
    pub fn above_points(&self, scale: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scaled_points(scale).skip(self.split_index())
    }
}
