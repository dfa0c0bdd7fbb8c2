//! Tests for JSON and terminal output.

use lipidcurve::output::{format_compact, format_summary, to_json, to_json_pretty};
use lipidcurve::{CholesterolChart, DistributionCurve, FixedSource};

fn reference_curve() -> DistributionCurve {
    CholesterolChart::nhanes().analyze().unwrap()
}

#[test]
fn json_round_trips() {
    let curve = reference_curve();
    let json = to_json(&curve).unwrap();
    let back: DistributionCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(back, curve);
}

#[test]
fn json_exposes_fractions() {
    let json = to_json_pretty(&reference_curve()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let below = value["below_threshold_fraction"].as_f64().unwrap();
    let above = value["above_threshold_fraction"].as_f64().unwrap();
    assert!((below + above - 1.0).abs() < 1e-12);
    assert_eq!(value["x_values"].as_array().unwrap().len(), 1000);
    assert_eq!(value["params"]["threshold"], 184.0);
}

#[test]
fn summary_lists_both_regions() {
    colored::control::set_override(false);
    let text = format_summary(&reference_curve(), None);
    assert!(text.contains("Below 184"));
    assert!(text.contains("34.5%"));
    assert!(text.contains("Above 184"));
    assert!(text.contains("65.5%"));
    assert!(text.contains("mg/dL"));
}

#[test]
fn summary_names_source() {
    colored::control::set_override(false);
    let chart = CholesterolChart::nhanes()
        .with_source(FixedSource::new(200.0, 40.0).named("clinic-2024"))
        .unwrap();
    let text = format_summary(&chart.analyze().unwrap(), chart.sourced());
    assert!(text.contains("Source: clinic-2024 (literal constants)"));
}

#[test]
fn compact_line() {
    let line = format_compact(&reference_curve());
    assert!(line.contains("34.5% below"));
    assert!(line.contains("65.5% above 184"));
}
