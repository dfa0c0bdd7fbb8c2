//! CSV file parsing for cholesterol readings.
//!
//! One reading (mg/dL) per line, optionally preceded by a header and
//! optionally one column among several.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use lipidcurve_core::{ReadingStats, ReadingSummary};

use super::{ParameterSource, SourceError, SourcedParameters};

/// Minimum number of readings needed for a sample standard deviation.
const MIN_READINGS: usize = 2;

/// Estimates mean and standard deviation from a CSV of readings.
///
/// # Example file content
/// ```csv
/// patient,total_cholesterol
/// p001,212
/// p002,187.5
/// # excluded: fasting sample missing
/// p004,241
/// ```
///
/// Loaded with `ReadingsCsvSource::new(path).has_header(true).column(1)`.
/// Blank lines and lines starting with `#` are skipped. The standard
/// deviation is the sample (n-1) estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingsCsvSource {
    path: PathBuf,
    has_header: bool,
    column: usize,
    delimiter: char,
}

impl ReadingsCsvSource {
    /// Read the first column of `path`, no header, comma-delimited.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            has_header: false,
            column: 0,
            delimiter: ',',
        }
    }

    /// Whether the first data line is a header (skip it).
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Zero-based column holding the reading.
    pub fn column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file and accumulate summary statistics.
    ///
    /// # Errors
    /// Returns `SourceError` if the file cannot be read, a line lacks the
    /// column, or a reading is not a finite non-negative number.
    pub fn read_stats(&self) -> Result<ReadingSummary, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut stats = ReadingStats::new();
        let mut header_pending = self.has_header;

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            let field = line
                .split(self.delimiter)
                .nth(self.column)
                .ok_or_else(|| SourceError::Parse {
                    line: line_num + 1,
                    message: format!(
                        "expected at least {} columns, got {}",
                        self.column + 1,
                        line.split(self.delimiter).count()
                    ),
                })?
                .trim();

            let value: f64 = field.parse().map_err(|_| SourceError::InvalidReading {
                line: line_num + 1,
                value: field.to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(SourceError::InvalidReading {
                    line: line_num + 1,
                    value: field.to_string(),
                });
            }

            stats.push(value);
        }

        let summary = stats.summary();
        tracing::debug!(
            "read {} readings from {} (mean {:.2}, sd {:.2})",
            summary.count,
            self.path.display(),
            summary.mean,
            summary.std_dev
        );
        Ok(summary)
    }
}

impl ParameterSource for ReadingsCsvSource {
    fn name(&self) -> &str {
        "readings-csv"
    }

    fn fetch(&self) -> Result<SourcedParameters, SourceError> {
        let summary = self.read_stats()?;

        if summary.count < MIN_READINGS {
            return Err(SourceError::InsufficientReadings {
                got: summary.count,
                min: MIN_READINGS,
            });
        }
        if !(summary.std_dev > 0.0) {
            return Err(SourceError::ZeroVariance {
                value: summary.mean,
            });
        }

        Ok(SourcedParameters {
            mean: summary.mean,
            std_dev: summary.std_dev,
            sample_count: Some(summary.count),
            provenance: self.path.display().to_string(),
        })
    }
}
