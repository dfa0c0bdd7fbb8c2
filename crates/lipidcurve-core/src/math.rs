//! Math functions for no_std compatibility.
//!
//! In no_std mode, f64 doesn't have transcendental methods like sqrt, exp or erf.
//! This module provides these functions using libm, so results are identical
//! with and without the `std` feature.

use crate::constants::FRAC_1_SQRT_2PI;

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Exponential (e^x).
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Error function.
#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Round to nearest integer.
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

/// Absolute value.
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Square (x^2).
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Standard normal CDF: Φ(x) = (1 + erf(x/√2)) / 2
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x * core::f64::consts::FRAC_1_SQRT_2))
}

/// Gaussian density with the given mean and standard deviation:
/// `exp(-(x-μ)² / 2σ²) / (σ√(2π))`.
///
/// `std_dev` must be positive; callers validate it up front.
#[inline]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    FRAC_1_SQRT_2PI / std_dev * exp(-0.5 * sq(z))
}

/// Gaussian CDF with the given mean and standard deviation, via erf.
#[inline]
pub fn normal_cdf_at(x: f64, mean: f64, std_dev: f64) -> f64 {
    normal_cdf((x - mean) / std_dev)
}
