//! Tests for the `CholesterolChart` entry point.

use std::cell::Cell;
use std::io::Write;
use std::path::Path;

use lipidcurve::{
    ChartError, ChartRenderer, ChartStyle, CholesterolChart, Config, DistributionCurve,
    DistributionParameters, Error, GridRange, ReadingsCsvSource, SvgRenderer,
};
use tempfile::{tempdir, NamedTempFile};

/// Counts calls and remembers the last curve length.
#[derive(Default)]
struct CountingRenderer {
    calls: Cell<usize>,
    last_len: Cell<usize>,
}

impl ChartRenderer for CountingRenderer {
    fn render(
        &self,
        curve: &DistributionCurve,
        _style: &ChartStyle,
        _path: &Path,
    ) -> Result<(), ChartError> {
        self.calls.set(self.calls.get() + 1);
        self.last_len.set(curve.len());
        Ok(())
    }
}

struct BrokenRenderer;

impl ChartRenderer for BrokenRenderer {
    fn render(
        &self,
        _curve: &DistributionCurve,
        _style: &ChartStyle,
        _path: &Path,
    ) -> Result<(), ChartError> {
        Err(ChartError::Drawing("backend unavailable".to_string()))
    }
}

#[test]
fn analyze_does_not_render() {
    let renderer = CountingRenderer::default();
    let chart = CholesterolChart::nhanes();
    let _ = chart.analyze().unwrap();
    assert_eq!(renderer.calls.get(), 0);
}

#[test]
fn run_returns_rendered_curve() {
    let renderer = CountingRenderer::default();
    let curve = CholesterolChart::nhanes()
        .sample_count(250)
        .run(&renderer)
        .unwrap();

    assert_eq!(renderer.calls.get(), 1);
    assert_eq!(renderer.last_len.get(), 250);
    assert_eq!(curve.len(), 250);
}

#[test]
fn renderer_error_surfaces() {
    let err = CholesterolChart::nhanes().run(&BrokenRenderer).unwrap_err();
    assert!(matches!(err, Error::Chart(_)));
    assert!(err.to_string().contains("backend unavailable"));
}

#[test]
fn dyn_renderer_accepted() {
    let renderer: Box<dyn ChartRenderer> = Box::new(CountingRenderer::default());
    assert!(CholesterolChart::nhanes().run(renderer.as_ref()).is_ok());
}

#[test]
fn builder_overrides_preset() {
    let chart = CholesterolChart::fixed_window()
        .params(DistributionParameters::new(190.0, 30.0, 200.0))
        .grid(GridRange::symmetric(3.0))
        .sample_count(7);

    let curve = chart.analyze().unwrap();
    assert_eq!(curve.len(), 7);
    assert_eq!(curve.x_values[0], 100.0);
    assert_eq!(curve.x_values[6], 280.0);
}

#[test]
fn config_round_trips_into_chart() {
    let mut config = Config::fixed_window();
    config.sample_count = 11;
    let chart = CholesterolChart::with_config(config.clone());
    assert_eq!(chart.config(), &config);
    assert_eq!(chart.analyze().unwrap().len(), 11);
}

#[test]
fn csv_source_drives_curve() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"160\n200\n240\n").unwrap();
    file.flush().unwrap();

    let chart = CholesterolChart::nhanes()
        .with_source(ReadingsCsvSource::new(file.path()))
        .unwrap();
    let curve = chart.analyze().unwrap();

    assert!((curve.params.mean() - 200.0).abs() < 1e-9);
    assert!((curve.params.std_dev() - 40.0).abs() < 1e-9);
    assert_eq!(curve.threshold(), 184.0);
    assert_eq!(chart.sourced().unwrap().sample_count, Some(3));
}

#[test]
fn missing_csv_falls_back_to_preset() {
    let chart = CholesterolChart::nhanes()
        .with_source_or_fallback(ReadingsCsvSource::new("/nonexistent/readings.csv"));

    assert_eq!(
        chart.config().params,
        DistributionParameters::nhanes_reference()
    );
    assert!(chart.sourced().is_none());
    assert!(chart.analyze().is_ok());
}

#[test]
fn missing_csv_without_fallback_fails() {
    let err = CholesterolChart::nhanes()
        .with_source(ReadingsCsvSource::new("/nonexistent/readings.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::Source(_)));
}

#[test]
fn svg_renderer_writes_configured_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("charts").join("nhanes.svg");

    let chart = CholesterolChart::nhanes().output(&path);
    chart.run(&SvgRenderer::new()).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Total Cholesterol"));
    assert!(svg.contains("184 mg/dL"));
}
