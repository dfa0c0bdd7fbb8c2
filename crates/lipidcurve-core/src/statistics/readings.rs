//! Streaming mean and spread of cholesterol readings.
//!
//! Readings are folded in one at a time (Welford's update), so a source can
//! parse a file line by line without holding every value.

use crate::math;
use crate::types::DistributionParameters;

/// Running mean, spread and range of a stream of readings in mg/dL.
///
/// # Example
///
/// ```
/// use lipidcurve_core::statistics::ReadingStats;
///
/// let stats: ReadingStats = [180.0, 195.0, 200.0, 210.0, 215.0].into_iter().collect();
/// let summary = stats.summary();
/// assert_eq!(summary.count, 5);
/// assert!((summary.mean - 200.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadingStats {
    count: usize,
    mean: f64,
    // Sum of squared deviations from the running mean
    sum_sq_dev: f64,
    range: Option<(f64, f64)>,
}

impl ReadingStats {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one reading.
    pub fn push(&mut self, mg_dl: f64) {
        self.count += 1;
        let before = mg_dl - self.mean;
        self.mean += before / self.count as f64;
        self.sum_sq_dev += before * (mg_dl - self.mean);

        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(mg_dl), hi.max(mg_dl)),
            None => (mg_dl, mg_dl),
        });
    }

    /// Number of readings seen.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True before the first reading.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the readings so far (0 when empty).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance with the n - 1 denominator; 0 below two readings.
    pub fn sample_variance(&self) -> f64 {
        match self.count {
            0 | 1 => 0.0,
            n => self.sum_sq_dev / (n - 1) as f64,
        }
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    /// Lowest and highest reading, if any.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Freeze the current state.
    pub fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            count: self.count,
            mean: self.mean,
            std_dev: self.std_dev(),
            range: self.range,
        }
    }
}

impl Extend<f64> for ReadingStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.push(x));
    }
}

impl FromIterator<f64> for ReadingStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Frozen result of a [`ReadingStats`] pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingSummary {
    /// Number of readings.
    pub count: usize,
    /// Mean reading in mg/dL.
    pub mean: f64,
    /// Sample standard deviation in mg/dL.
    pub std_dev: f64,
    /// Lowest and highest reading, `None` when there were none.
    pub range: Option<(f64, f64)>,
}

impl ReadingSummary {
    /// Parameters centered on this summary, split at `threshold`.
    pub fn to_parameters(&self, threshold: f64) -> DistributionParameters {
        DistributionParameters::new(self.mean, self.std_dev, threshold)
    }
}
