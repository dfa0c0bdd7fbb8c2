//! Constants shared by the analysis and the chart presets.

/// 1/√(2π), the normalising factor of the standard normal density.
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

// =============================================================================
// Reference population (total cholesterol, 55-year-old US males)
// =============================================================================

/// Reference mean total cholesterol in mg/dL.
pub const REFERENCE_MEAN_MG_DL: f64 = 200.0;

/// Standard deviation used by the symmetric ±4σ chart, in mg/dL.
pub const REFERENCE_STD_DEV_MG_DL: f64 = 40.0;

/// Standard deviation used by the fixed-window chart, in mg/dL.
pub const FIXED_WINDOW_STD_DEV_MG_DL: f64 = 35.0;

/// Threshold annotated on both charts, in mg/dL.
pub const REFERENCE_THRESHOLD_MG_DL: f64 = 184.0;

// =============================================================================
// Sampling grid defaults
// =============================================================================

/// Default number of grid points.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Minimum number of grid points for an evenly spaced grid.
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Default half-width of the symmetric grid, in standard deviations.
pub const DEFAULT_RANGE_WIDTH_STD_DEVS: f64 = 4.0;

/// Lower bound of the fixed-window grid, in mg/dL.
pub const FIXED_WINDOW_LOWER_MG_DL: f64 = 100.0;

/// Upper bound of the fixed-window grid, in mg/dL.
pub const FIXED_WINDOW_UPPER_MG_DL: f64 = 300.0;
