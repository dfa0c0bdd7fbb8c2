//! Error type for curve construction.

use core::fmt;

/// Error returned when curve parameters make the computation meaningless.
///
/// There is nothing to recover from: the caller supplied a standard
/// deviation, grid or sample count for which no density curve exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidParameterError {
    /// Standard deviation is zero, negative or NaN.
    NonPositiveStdDev {
        /// The rejected standard deviation.
        std_dev: f64,
    },

    /// Fewer than two grid points were requested.
    ///
    /// An evenly spaced grid including both endpoints needs at least two.
    TooFewSamples {
        /// The rejected sample count.
        sample_count: usize,
    },

    /// Mean or threshold is NaN or infinite.
    NonFiniteParameter {
        /// Which parameter was rejected ("mean" or "threshold").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The grid range is empty, reversed or non-finite.
    InvalidGridRange {
        /// Lower bound of the rejected range.
        lower: f64,
        /// Upper bound of the rejected range.
        upper: f64,
    },
}

impl fmt::Display for InvalidParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveStdDev { std_dev } => {
                write!(f, "standard deviation must be > 0, got {}", std_dev)
            }
            Self::TooFewSamples { sample_count } => write!(
                f,
                "sample count must be >= 2 to span a range, got {}",
                sample_count
            ),
            Self::NonFiniteParameter { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            Self::InvalidGridRange { lower, upper } => write!(
                f,
                "grid range must be finite with lower < upper, got [{}, {}]",
                lower, upper
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidParameterError {}
