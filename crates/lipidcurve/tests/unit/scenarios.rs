//! Reference scenarios for the distribution curve.

use lipidcurve::{
    build_curve, DistributionAnalyzer, DistributionParameters, GridRange, InvalidParameterError,
};

// Φ(-0.4)
const PHI_MINUS_0_4: f64 = 0.344_578_258_389_676;

// =============================================================================
// REFERENCE CHARTS
// =============================================================================

#[test]
fn reference_chart_below_fraction() {
    let curve = DistributionAnalyzer::new()
        .build_curve(&DistributionParameters::nhanes_reference())
        .unwrap();

    assert_eq!(curve.len(), 1000);
    assert!((curve.below_threshold_fraction - PHI_MINUS_0_4).abs() < 1e-6);
    assert!((curve.above_threshold_fraction - (1.0 - PHI_MINUS_0_4)).abs() < 1e-6);
    assert_eq!(format!("{:.1}", curve.percent_below()), "34.5");
    assert_eq!(format!("{:.1}", curve.percent_above()), "65.5");
}

#[test]
fn reference_chart_grid_spans_four_std_devs() {
    let curve = build_curve(
        &DistributionParameters::nhanes_reference(),
        1000,
        GridRange::symmetric(4.0),
    )
    .unwrap();

    assert_eq!(curve.x_values[0], 40.0);
    assert_eq!(curve.x_values[999], 360.0);
}

#[test]
fn fixed_window_grid_endpoints() {
    let curve = build_curve(
        &DistributionParameters::fixed_window_reference(),
        1000,
        GridRange::fixed(100.0, 300.0),
    )
    .unwrap();

    assert_eq!(curve.x_values[0], 100.0);
    assert_eq!(curve.x_values[curve.len() - 1], 300.0);
    // Fractions come from the closed form, not the truncated grid
    let sum = curve.below_threshold_fraction + curve.above_threshold_fraction;
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn density_at_threshold_matches_closed_form() {
    let curve = build_curve(
        &DistributionParameters::nhanes_reference(),
        10,
        GridRange::default(),
    )
    .unwrap();

    let z: f64 = -0.4;
    let expected = (-0.5 * z * z).exp() / (40.0 * (2.0 * std::f64::consts::PI).sqrt());
    assert!((curve.density_at_threshold - expected).abs() < 1e-15);
}

// =============================================================================
// REJECTED INPUTS
// =============================================================================

#[test]
fn zero_std_dev_rejected() {
    let err = build_curve(
        &DistributionParameters::new(200.0, 0.0, 184.0),
        1000,
        GridRange::default(),
    )
    .unwrap_err();
    assert!(matches!(err, InvalidParameterError::NonPositiveStdDev { .. }));
}

#[test]
fn negative_std_dev_rejected() {
    let err = build_curve(
        &DistributionParameters::new(200.0, -40.0, 184.0),
        1000,
        GridRange::default(),
    )
    .unwrap_err();
    assert!(matches!(err, InvalidParameterError::NonPositiveStdDev { .. }));
}

#[test]
fn single_sample_rejected() {
    let err = build_curve(
        &DistributionParameters::nhanes_reference(),
        1,
        GridRange::default(),
    )
    .unwrap_err();
    assert_eq!(err, InvalidParameterError::TooFewSamples { sample_count: 1 });
}

#[test]
fn inverted_fixed_range_rejected() {
    let err = build_curve(
        &DistributionParameters::nhanes_reference(),
        100,
        GridRange::fixed(300.0, 100.0),
    )
    .unwrap_err();
    assert!(matches!(err, InvalidParameterError::InvalidGridRange { .. }));
}

#[test]
fn error_messages_name_the_value() {
    let err = build_curve(
        &DistributionParameters::new(200.0, -1.5, 184.0),
        100,
        GridRange::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("-1.5"));
}

// =============================================================================
// EXTREME THRESHOLDS
// =============================================================================

#[test]
fn threshold_far_below_mean() {
    let curve = build_curve(
        &DistributionParameters::new(200.0, 40.0, -1000.0),
        100,
        GridRange::default(),
    )
    .unwrap();
    assert!(curve.below_threshold_fraction < 1e-12);
    assert!(curve.above_threshold_fraction > 1.0 - 1e-12);
    assert_eq!(curve.split_index(), 0);
}

#[test]
fn threshold_far_above_mean() {
    let curve = build_curve(
        &DistributionParameters::new(200.0, 40.0, 1000.0),
        100,
        GridRange::default(),
    )
    .unwrap();
    assert!(curve.above_threshold_fraction < 1e-12);
    assert_eq!(curve.split_index(), curve.len());
}
