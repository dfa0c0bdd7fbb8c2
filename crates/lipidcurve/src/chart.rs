//! Main `CholesterolChart` entry point and builder.

use std::path::{Path, PathBuf};

use lipidcurve_core::{DistributionCurve, DistributionParameters, GridRange};

use crate::config::Config;
use crate::error::Result;
use crate::output::{format_compact, ChartRenderer, ChartStyle};
use crate::source::{ParameterSource, SourcedParameters};

/// Computes a distribution curve and hands it to a renderer.
///
/// Nothing happens until [`analyze`](Self::analyze) or [`run`](Self::run)
/// is called.
///
/// # Example
///
/// ```no_run
/// use lipidcurve::{CholesterolChart, SvgRenderer};
///
/// let curve = CholesterolChart::nhanes()
///     .output("chart.svg")
///     .run(&SvgRenderer::new())?;
/// println!("{:.1}% below 184 mg/dL", curve.percent_below());
/// # Ok::<(), lipidcurve::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CholesterolChart {
    config: Config,
    sourced: Option<SourcedParameters>,
}

impl Default for CholesterolChart {
    fn default() -> Self {
        Self::new()
    }
}

impl CholesterolChart {
    /// Create with default configuration (the ±4σ reference chart).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            sourced: None,
        }
    }

    /// 200 ± 40 mg/dL over mean ± 4σ, percent-of-population axis.
    pub fn nhanes() -> Self {
        Self::with_config(Config::nhanes())
    }

    /// 200 ± 35 mg/dL over 100–300 mg/dL, raw density axis.
    pub fn fixed_window() -> Self {
        Self::with_config(Config::fixed_window())
    }

    /// Set mean, standard deviation and threshold.
    pub fn params(mut self, params: DistributionParameters) -> Self {
        self.config.params = params;
        self.sourced = None;
        self
    }

    /// Set the threshold, keeping mean and standard deviation.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.params = self.config.params.with_threshold(threshold);
        self
    }

    /// Set the number of grid points.
    pub fn sample_count(mut self, n: usize) -> Self {
        self.config.sample_count = n;
        self
    }

    /// Set the grid range policy.
    pub fn grid(mut self, grid: GridRange) -> Self {
        self.config.grid = grid;
        self
    }

    /// Set the chart style.
    pub fn style(mut self, style: ChartStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Set the output path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    /// Take mean and standard deviation from `source`, keeping the threshold.
    ///
    /// # Errors
    ///
    /// Propagates the source's error; the chart is left unchanged.
    pub fn with_source<S: ParameterSource>(self, source: S) -> Result<Self> {
        let sourced = source.fetch()?;
        Ok(self.apply_sourced(source.name(), sourced))
    }

    /// Like [`with_source`](Self::with_source), but keeps the current
    /// parameters if the source fails. The failure is logged, not dropped.
    pub fn with_source_or_fallback<S: ParameterSource>(self, source: S) -> Self {
        match source.fetch() {
            Ok(sourced) => self.apply_sourced(source.name(), sourced),
            Err(e) => {
                tracing::warn!(
                    "parameter source '{}' failed ({}); falling back to mean {} / sd {}",
                    source.name(),
                    e,
                    self.config.params.mean(),
                    self.config.params.std_dev()
                );
                self
            }
        }
    }

    fn apply_sourced(mut self, name: &str, sourced: SourcedParameters) -> Self {
        tracing::info!(
            "using parameters from '{}': mean {:.2}, sd {:.2}",
            name,
            sourced.mean,
            sourced.std_dev
        );
        self.config.params = sourced
            .clone()
            .into_parameters(self.config.params.threshold());
        self.sourced = Some(sourced);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parameters obtained from a source, if one was applied.
    pub fn sourced(&self) -> Option<&SourcedParameters> {
        self.sourced.as_ref()
    }

    /// Output path the chart will be written to.
    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Compute the curve without rendering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidParameter`] for a non-positive standard
    /// deviation, fewer than two grid points, or an empty grid range.
    pub fn analyze(&self) -> Result<DistributionCurve> {
        let curve = self.config.analyzer().build_curve(&self.config.params)?;
        tracing::debug!(
            "built {} point curve over [{}, {}]: {}",
            curve.len(),
            curve.x_values[0],
            curve.x_values[curve.len() - 1],
            format_compact(&curve)
        );
        Ok(curve)
    }

    /// Compute the curve, render it to the configured output, and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or rendering fails.
    pub fn run<R: ChartRenderer + ?Sized>(&self, renderer: &R) -> Result<DistributionCurve> {
        let curve = self.analyze()?;
        renderer.render(&curve, &self.config.style, &self.config.output)?;
        Ok(curve)
    }
}
