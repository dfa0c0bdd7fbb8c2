//! Configuration for a cholesterol distribution chart.

use std::path::PathBuf;

use lipidcurve_core::constants::DEFAULT_SAMPLE_COUNT;
use lipidcurve_core::{DistributionAnalyzer, DistributionParameters, GridRange};
use serde::{Deserialize, Serialize};

use crate::output::ChartStyle;

/// Everything needed to compute and draw one chart.
///
/// The two presets reproduce the two reference charts; both are equally
/// valid and differ only in spread, grid policy and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // =========================================================================
    // Computation
    // =========================================================================
    /// Mean, standard deviation and threshold.
    ///
    /// Default: 200 ± 40 mg/dL, threshold 184 mg/dL.
    pub params: DistributionParameters,

    /// Number of grid points. Must be >= 2.
    ///
    /// Default: 1000.
    pub sample_count: usize,

    /// How the grid's extent is chosen.
    ///
    /// Default: mean ± 4σ.
    pub grid: GridRange,

    // =========================================================================
    // Presentation
    // =========================================================================
    /// Chart appearance.
    pub style: ChartStyle,

    /// Where the chart is written.
    ///
    /// Default: `cholesterol_distribution.svg`.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::nhanes()
    }
}

impl Config {
    /// 200 ± 40 mg/dL over mean ± 4σ, plotted as percent of population.
    pub fn nhanes() -> Self {
        Self {
            params: DistributionParameters::nhanes_reference(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            grid: GridRange::default(),
            style: ChartStyle::nhanes(),
            output: PathBuf::from("cholesterol_distribution.svg"),
        }
    }

    /// 200 ± 35 mg/dL over the fixed 100–300 mg/dL window, plotted as raw density.
    pub fn fixed_window() -> Self {
        Self {
            params: DistributionParameters::fixed_window_reference(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            grid: GridRange::fixed_window(),
            style: ChartStyle::fixed_window(),
            output: PathBuf::from("cholesterol_distribution_fixed_window.svg"),
        }
    }

    /// Analyzer configured with this config's grid settings.
    pub fn analyzer(&self) -> DistributionAnalyzer {
        DistributionAnalyzer::new()
            .sample_count(self.sample_count)
            .grid(self.grid)
    }
}
