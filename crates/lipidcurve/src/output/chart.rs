//! Chart rendering for distribution curves.
//!
//! [`ChartRenderer`] is the seam between the computation and a plotting
//! library. [`SvgRenderer`] draws with the [`plotters`] SVG backend, which
//! needs no system fonts and works in headless environments.

use std::fs;
use std::path::Path;

use lipidcurve_core::formatting::{above_label, below_label, threshold_label};
use lipidcurve_core::DistributionCurve;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The drawing area could not be created or cleared.
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    /// Axes or coordinate system could not be configured.
    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    /// Series, annotations or the final file write failed.
    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    /// The output directory could not be created.
    #[error("failed to prepare output location: {0}")]
    FileSave(#[from] std::io::Error),

    /// The curve or style cannot be drawn.
    #[error("invalid chart data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure blue.
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    /// CSS `lightblue`.
    pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);
    /// CSS `lightcoral`.
    pub const LIGHT_CORAL: Rgb = Rgb(240, 128, 128);
    /// CSS `green`.
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    /// Pure red.
    pub const RED: Rgb = Rgb(255, 0, 0);

    fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

/// Presentation settings for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Chart title.
    pub title: String,

    /// X axis label.
    pub x_label: String,

    /// Y axis label.
    pub y_label: String,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Factor applied to densities before plotting.
    ///
    /// 100 plots percent of the population per mg/dL; 1 plots raw density.
    pub density_scale: f64,

    /// Gap between the threshold marker and its label, in plotted y units.
    pub annotation_offset: f64,

    /// Curve line color.
    pub line_color: Rgb,

    /// Fill for the at-or-below-threshold region.
    pub below_color: Rgb,

    /// Fill for the above-threshold region.
    pub above_color: Rgb,

    /// Opacity of the region fills, in `[0, 1]`.
    pub fill_opacity: f64,

    /// Draw "Below 184: 34.5%" / "Above 184: 65.5%" at mean ∓ 2σ.
    pub show_percent_labels: bool,

    /// Draw a dashed vertical line at the mean.
    pub show_mean_line: bool,

    /// Draw a series legend.
    pub show_legend: bool,

    /// Draw grid lines.
    pub show_grid: bool,
}

impl ChartStyle {
    /// Percent-of-population chart spanning mean ± 4σ, with percentage
    /// labels and a mean marker.
    pub fn nhanes() -> Self {
        Self {
            title: "Distribution of Total Cholesterol Levels in 55-Year-Old US Males".to_string(),
            x_label: "Total Cholesterol (mg/dL)".to_string(),
            y_label: "Percentage of Population (%)".to_string(),
            width: 1200,
            height: 600,
            density_scale: 100.0,
            annotation_offset: 0.5,
            line_color: Rgb::BLUE,
            below_color: Rgb::LIGHT_BLUE,
            above_color: Rgb::LIGHT_CORAL,
            fill_opacity: 0.5,
            show_percent_labels: true,
            show_mean_line: true,
            show_legend: false,
            show_grid: true,
        }
    }

    /// Raw-density chart over the fixed 100–300 mg/dL window, with a legend.
    pub fn fixed_window() -> Self {
        Self {
            title: "Estimated Distribution of Total Cholesterol Levels in 55-Year-Old U.S. Males"
                .to_string(),
            x_label: "Total Cholesterol (mg/dL)".to_string(),
            y_label: "Probability Density".to_string(),
            width: 1000,
            height: 600,
            density_scale: 1.0,
            annotation_offset: 0.0005,
            line_color: Rgb::BLUE,
            below_color: Rgb::GREEN,
            above_color: Rgb::RED,
            fill_opacity: 0.5,
            show_percent_labels: false,
            show_mean_line: false,
            show_legend: true,
            show_grid: true,
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the image size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::nhanes()
    }
}

/// Draws a curve and writes it to `path`.
pub trait ChartRenderer {
    /// Render `curve` with `style` into `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] if the curve cannot be drawn or saved.
    fn render(&self, curve: &DistributionCurve, style: &ChartStyle, path: &Path) -> Result<()>;
}

/// Renders charts as SVG files with [`plotters`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create an SVG renderer.
    pub fn new() -> Self {
        Self
    }
}

fn validate(curve: &DistributionCurve, style: &ChartStyle) -> Result<()> {
    if curve.len() < 2 {
        return Err(ChartError::InvalidData(format!(
            "curve needs at least 2 points, got {}",
            curve.len()
        )));
    }
    if curve.density_values.len() != curve.x_values.len() {
        return Err(ChartError::InvalidData(format!(
            "{} x values but {} densities",
            curve.x_values.len(),
            curve.density_values.len()
        )));
    }
    if style.width == 0 || style.height == 0 {
        return Err(ChartError::InvalidData(format!(
            "image size must be non-zero, got {}x{}",
            style.width, style.height
        )));
    }
    if !(style.density_scale > 0.0) || !(0.0..=1.0).contains(&style.fill_opacity) {
        return Err(ChartError::InvalidData(
            "density_scale must be > 0 and fill_opacity in [0, 1]".to_string(),
        ));
    }
    Ok(())
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, curve: &DistributionCurve, style: &ChartStyle, path: &Path) -> Result<()> {
        validate(curve, style)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

        let scale = style.density_scale;
        let x_min = curve.x_values[0];
        let x_max = curve.x_values[curve.len() - 1];
        let peak = curve.max_density() * scale;
        let threshold = curve.threshold();
        let marker_y = curve.density_at_threshold * scale;
        let label_y = marker_y + style.annotation_offset;
        let y_max = peak.max(label_y) * 1.15;
        if !(y_max > 0.0) || !y_max.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "no visible density on the grid (peak {})",
                peak
            )));
        }

        let mut chart = ChartBuilder::on(&root)
            .caption(&style.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .label_style(("sans-serif", 14));
        if style.show_grid {
            mesh.light_line_style(BLACK.mix(0.04))
                .bold_line_style(BLACK.mix(0.12));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        // Both regions share the point on the threshold so the fills meet
        let in_range = (x_min..=x_max).contains(&threshold);
        let boundary = in_range.then_some((threshold, marker_y));

        let below_fill = style.below_color.to_plotters().mix(style.fill_opacity);
        let below: Vec<(f64, f64)> = curve.below_points(scale).chain(boundary).collect();
        if below.len() >= 2 {
            let anno = chart
                .draw_series(AreaSeries::new(below, 0.0, below_fill))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            if style.show_legend {
                anno.label(format!("Cholesterol \u{2264} {}", threshold_label(curve)))
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 20, y + 5)], below_fill.filled())
                    });
            }
        }

        let above_fill = style.above_color.to_plotters().mix(style.fill_opacity);
        let above: Vec<(f64, f64)> = boundary.into_iter().chain(curve.above_points(scale)).collect();
        if above.len() >= 2 {
            let anno = chart
                .draw_series(AreaSeries::new(above, 0.0, above_fill))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            if style.show_legend {
                anno.label(format!("Cholesterol > {}", threshold_label(curve)))
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 20, y + 5)], above_fill.filled())
                    });
            }
        }

        let line_color = style.line_color.to_plotters();
        let anno = chart
            .draw_series(LineSeries::new(
                curve.scaled_points(scale),
                line_color.stroke_width(2),
            ))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
        if style.show_legend {
            anno.label("Cholesterol Distribution").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });
        }

        let mean = curve.params.mean();
        if style.show_mean_line && (x_min..=x_max).contains(&mean) {
            let dash = y_max / 60.0;
            let mean_color = RED.mix(0.5);
            chart
                .draw_series((0..30).map(|i| {
                    let y0 = i as f64 * 2.0 * dash;
                    PathElement::new(vec![(mean, y0), (mean, y0 + dash)], mean_color)
                }))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    "Mean",
                    (mean, peak * 0.9),
                    ("sans-serif", 14)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Right, VPos::Top)),
                )))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }

        if in_range {
            let head_h = y_max * 0.03;
            let head_w = (x_max - x_min) * 0.006;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(threshold, label_y), (threshold, marker_y + head_h)],
                    BLACK.stroke_width(2),
                )))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            chart
                .draw_series(std::iter::once(Polygon::new(
                    vec![
                        (threshold, marker_y),
                        (threshold - head_w, marker_y + head_h),
                        (threshold + head_w, marker_y + head_h),
                    ],
                    BLACK.filled(),
                )))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    threshold_label(curve),
                    (threshold, label_y),
                    ("sans-serif", 16)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        } else {
            tracing::debug!(
                "threshold {} outside grid [{}, {}], skipping annotation",
                threshold,
                x_min,
                x_max
            );
        }

        if style.show_percent_labels {
            let sd = curve.params.std_dev();
            let y = peak * 0.8;
            let font = ("sans-serif", 16)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            let labels = [
                (below_label(curve), (mean - 2.0 * sd).clamp(x_min, x_max)),
                (above_label(curve), (mean + 2.0 * sd).clamp(x_min, x_max)),
            ];
            chart
                .draw_series(
                    labels
                        .into_iter()
                        .map(|(text, x)| Text::new(text, (x, y), font.clone())),
                )
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }

        if style.show_legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", 14))
                .draw()
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }

        root.present()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
        tracing::info!("wrote chart to {}", path.display());

        Ok(())
    }
}
