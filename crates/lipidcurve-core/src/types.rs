//! Input types for curve construction.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RANGE_WIDTH_STD_DEVS, FIXED_WINDOW_LOWER_MG_DL, FIXED_WINDOW_STD_DEV_MG_DL,
    FIXED_WINDOW_UPPER_MG_DL, REFERENCE_MEAN_MG_DL, REFERENCE_STD_DEV_MG_DL,
    REFERENCE_THRESHOLD_MG_DL,
};
use crate::error::InvalidParameterError;

/// Parameters of the assumed normal distribution plus the threshold to split at.
///
/// Immutable once constructed. Construction does not validate; invalid
/// values are reported by [`DistributionParameters::validate`] and by
/// [`crate::build_curve`], which calls it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    mean: f64,
    std_dev: f64,
    threshold: f64,
}

impl DistributionParameters {
    /// Create parameters from a mean, standard deviation and threshold.
    pub const fn new(mean: f64, std_dev: f64, threshold: f64) -> Self {
        Self {
            mean,
            std_dev,
            threshold,
        }
    }

    /// 200 ± 40 mg/dL with the 184 mg/dL threshold.
    pub const fn nhanes_reference() -> Self {
        Self::new(
            REFERENCE_MEAN_MG_DL,
            REFERENCE_STD_DEV_MG_DL,
            REFERENCE_THRESHOLD_MG_DL,
        )
    }

    /// 200 ± 35 mg/dL with the 184 mg/dL threshold.
    pub const fn fixed_window_reference() -> Self {
        Self::new(
            REFERENCE_MEAN_MG_DL,
            FIXED_WINDOW_STD_DEV_MG_DL,
            REFERENCE_THRESHOLD_MG_DL,
        )
    }

    /// Distribution mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Distribution standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Threshold at which the population is split.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Standardised threshold `(threshold - mean) / std_dev`.
    pub fn z_score(&self) -> f64 {
        (self.threshold - self.mean) / self.std_dev
    }

    /// Return a copy with a different threshold.
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    /// Check that the parameters describe a proper normal distribution.
    ///
    /// `std_dev` must be strictly positive (NaN is rejected), and the mean
    /// and threshold must be finite.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        // `!(x > 0)` also catches NaN
        if !(self.std_dev > 0.0) || !self.std_dev.is_finite() {
            return Err(InvalidParameterError::NonPositiveStdDev {
                std_dev: self.std_dev,
            });
        }
        if !self.mean.is_finite() {
            return Err(InvalidParameterError::NonFiniteParameter {
                name: "mean",
                value: self.mean,
            });
        }
        if !self.threshold.is_finite() {
            return Err(InvalidParameterError::NonFiniteParameter {
                name: "threshold",
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for DistributionParameters {
    fn default() -> Self {
        Self::nhanes_reference()
    }
}

/// How the sampling grid's extent is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridRange {
    /// `mean ± width_in_std_devs · std_dev`.
    SymmetricStdMultiple {
        /// Half-width of the grid in standard deviations.
        width_in_std_devs: f64,
    },

    /// A literal `[lower, upper]` range, independent of the parameters.
    FixedLiteral {
        /// First grid point.
        lower: f64,
        /// Last grid point.
        upper: f64,
    },
}

impl GridRange {
    /// Symmetric grid spanning `mean ± width_in_std_devs · std_dev`.
    pub const fn symmetric(width_in_std_devs: f64) -> Self {
        Self::SymmetricStdMultiple { width_in_std_devs }
    }

    /// Fixed grid spanning `[lower, upper]`.
    pub const fn fixed(lower: f64, upper: f64) -> Self {
        Self::FixedLiteral { lower, upper }
    }

    /// The 100–300 mg/dL window.
    pub const fn fixed_window() -> Self {
        Self::fixed(FIXED_WINDOW_LOWER_MG_DL, FIXED_WINDOW_UPPER_MG_DL)
    }

    /// Resolve the grid endpoints for the given parameters.
    ///
    /// Fails if the resulting range is empty, reversed or non-finite.
    pub fn bounds(
        &self,
        params: &DistributionParameters,
    ) -> Result<(f64, f64), InvalidParameterError> {
        let (lower, upper) = match *self {
            Self::SymmetricStdMultiple { width_in_std_devs } => {
                let half = width_in_std_devs * params.std_dev();
                (params.mean() - half, params.mean() + half)
            }
            Self::FixedLiteral { lower, upper } => (lower, upper),
        };

        if !lower.is_finite() || !upper.is_finite() || !(lower < upper) {
            return Err(InvalidParameterError::InvalidGridRange { lower, upper });
        }
        Ok((lower, upper))
    }
}

impl Default for GridRange {
    fn default() -> Self {
        Self::symmetric(DEFAULT_RANGE_WIDTH_STD_DEVS)
    }
}

impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymmetricStdMultiple { width_in_std_devs } => {
                write!(f, "mean \u{00B1} {}\u{03C3}", width_in_std_devs)
            }
            Self::FixedLiteral { lower, upper } => write!(f, "[{}, {}]", lower, upper),
        }
    }
}
