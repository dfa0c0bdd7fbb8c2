//! Tests for parameter sources.

use std::io::Write;

use lipidcurve::{FixedSource, ParameterSource, ReadingsCsvSource, SourceError};
use tempfile::NamedTempFile;

fn readings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn fixed_source_reports_literals() {
    let sourced = FixedSource::nhanes_reference().fetch().unwrap();
    assert_eq!(sourced.mean, 200.0);
    assert_eq!(sourced.std_dev, 40.0);
    assert_eq!(sourced.sample_count, None);
}

#[test]
fn boxed_sources_are_interchangeable() {
    let file = readings_file("180\n220\n");
    let sources: Vec<Box<dyn ParameterSource>> = vec![
        Box::new(FixedSource::fixed_window_reference()),
        Box::new(ReadingsCsvSource::new(file.path())),
    ];

    let means: Vec<f64> = sources.iter().map(|s| s.fetch().unwrap().mean).collect();
    assert_eq!(means, vec![200.0, 200.0]);
}

#[test]
fn csv_mean_and_sample_std_dev() {
    // 160, 200, 240: mean 200, sample variance 1600
    let file = readings_file("160\n200\n240\n");
    let sourced = ReadingsCsvSource::new(file.path()).fetch().unwrap();

    assert!((sourced.mean - 200.0).abs() < 1e-9);
    assert!((sourced.std_dev - 40.0).abs() < 1e-9);
    assert_eq!(sourced.sample_count, Some(3));
}

#[test]
fn csv_header_column_and_comments() {
    let file = readings_file(
        "# exported readings\n\
         id,total_chol,hdl\n\
         1,150,50\n\
         \n\
         2,250,40\n",
    );
    let sourced = ReadingsCsvSource::new(file.path())
        .has_header(true)
        .column(1)
        .fetch()
        .unwrap();

    assert!((sourced.mean - 200.0).abs() < 1e-9);
    assert_eq!(sourced.sample_count, Some(2));
    assert!(sourced.provenance.ends_with(
        file.path()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
    ));
}

#[test]
fn csv_semicolon_delimiter() {
    let file = readings_file("a;190\nb;210\n");
    let sourced = ReadingsCsvSource::new(file.path())
        .delimiter(';')
        .column(1)
        .fetch()
        .unwrap();
    assert!((sourced.mean - 200.0).abs() < 1e-9);
}

#[test]
fn csv_missing_file() {
    let err = ReadingsCsvSource::new("/nonexistent/readings.csv")
        .fetch()
        .unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/readings.csv"));
}

#[test]
fn csv_invalid_reading_reports_line() {
    let file = readings_file("200\nhigh\n");
    let err = ReadingsCsvSource::new(file.path()).fetch().unwrap_err();
    match err {
        SourceError::InvalidReading { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, "high");
        }
        other => panic!("expected InvalidReading, got {:?}", other),
    }
}

#[test]
fn csv_negative_reading_rejected() {
    let file = readings_file("200\n-5\n");
    let err = ReadingsCsvSource::new(file.path()).fetch().unwrap_err();
    assert!(matches!(err, SourceError::InvalidReading { line: 2, .. }));
}

#[test]
fn csv_missing_column() {
    let file = readings_file("200\n");
    let err = ReadingsCsvSource::new(file.path())
        .column(2)
        .fetch()
        .unwrap_err();
    assert!(matches!(err, SourceError::Parse { line: 1, .. }));
}

#[test]
fn csv_single_reading_insufficient() {
    let file = readings_file("200\n");
    let err = ReadingsCsvSource::new(file.path()).fetch().unwrap_err();
    assert!(matches!(
        err,
        SourceError::InsufficientReadings { got: 1, min: 2 }
    ));
}

#[test]
fn csv_identical_readings_zero_variance() {
    let file = readings_file("200\n200\n200\n");
    let err = ReadingsCsvSource::new(file.path()).fetch().unwrap_err();
    assert!(matches!(err, SourceError::ZeroVariance { .. }));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn csv_matches_two_pass_estimate(
            readings in prop::collection::vec(80.0f64..400.0, 2..60)
        ) {
            prop_assume!(readings.iter().any(|&r| r != readings[0]));

            let content: String = readings.iter().map(|r| format!("{}\n", r)).collect();
            let file = readings_file(&content);
            let sourced = ReadingsCsvSource::new(file.path()).fetch().unwrap();

            let n = readings.len() as f64;
            let mean = readings.iter().sum::<f64>() / n;
            let var = readings.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

            prop_assert!((sourced.mean - mean).abs() < 1e-9);
            prop_assert!((sourced.std_dev - var.sqrt()).abs() < 1e-7);
            prop_assert_eq!(sourced.sample_count, Some(readings.len()));
        }
    }
}
