//! Sources for the distribution's mean and standard deviation.
//!
//! A [`ParameterSource`] produces a mean and standard deviation that are
//! combined with a threshold to form [`DistributionParameters`]. Sources are
//! optional: a chart built from literal constants never touches this module.
//!
//! # Available Sources
//!
//! - [`FixedSource`]: literal constants (the reference populations)
//! - [`ReadingsCsvSource`]: sample mean and standard deviation of a local CSV
//!   of total-cholesterol readings
//!
//! # Example
//!
//! ```ignore
//! use lipidcurve::source::{ParameterSource, ReadingsCsvSource};
//!
//! let sourced = ReadingsCsvSource::new("readings.csv").has_header(true).fetch()?;
//! let params = sourced.into_parameters(184.0);
//! ```

mod csv;

pub use csv::ReadingsCsvSource;

use std::path::PathBuf;

use lipidcurve_core::constants::{
    FIXED_WINDOW_STD_DEV_MG_DL, REFERENCE_MEAN_MG_DL, REFERENCE_STD_DEV_MG_DL,
};
use lipidcurve_core::DistributionParameters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while obtaining parameters from a source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// IO error reading a file.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A line did not have the expected shape.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// A reading was not a finite, non-negative number.
    #[error("invalid reading at line {line}: '{value}'")]
    InvalidReading {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The invalid value string.
        value: String,
    },

    /// Too few readings to estimate a standard deviation.
    #[error("insufficient readings: got {got}, need at least {min}")]
    InsufficientReadings {
        /// Number of readings found.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// All readings were identical, so the standard deviation is zero.
    #[error("readings have zero variance (all equal to {value})")]
    ZeroVariance {
        /// The repeated value.
        value: f64,
    },
}

/// Mean and standard deviation produced by a [`ParameterSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedParameters {
    /// Estimated mean.
    pub mean: f64,

    /// Estimated standard deviation.
    pub std_dev: f64,

    /// Number of readings the estimate is based on, when known.
    pub sample_count: Option<usize>,

    /// Where the numbers came from (source name, file path, ...).
    pub provenance: String,
}

impl SourcedParameters {
    /// Combine with a threshold into distribution parameters.
    pub fn into_parameters(self, threshold: f64) -> DistributionParameters {
        DistributionParameters::new(self.mean, self.std_dev, threshold)
    }
}

/// Something that can supply a mean and standard deviation.
pub trait ParameterSource {
    /// Short human-readable name used in logs.
    fn name(&self) -> &str;

    /// Obtain the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the source cannot produce usable numbers.
    fn fetch(&self) -> Result<SourcedParameters, SourceError>;
}

/// Literal mean and standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSource {
    name: String,
    mean: f64,
    std_dev: f64,
}

impl FixedSource {
    /// Create a source that always returns `mean` and `std_dev`.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            name: "fixed".to_string(),
            mean,
            std_dev,
        }
    }

    /// 200 ± 40 mg/dL.
    pub fn nhanes_reference() -> Self {
        Self::new(REFERENCE_MEAN_MG_DL, REFERENCE_STD_DEV_MG_DL).named("nhanes-reference")
    }

    /// 200 ± 35 mg/dL.
    pub fn fixed_window_reference() -> Self {
        Self::new(REFERENCE_MEAN_MG_DL, FIXED_WINDOW_STD_DEV_MG_DL).named("fixed-window-reference")
    }

    /// Set the name reported in logs and provenance.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ParameterSource for FixedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<SourcedParameters, SourceError> {
        Ok(SourcedParameters {
            mean: self.mean,
            std_dev: self.std_dev,
            sample_count: None,
            provenance: self.name.clone(),
        })
    }
}

impl<S: ParameterSource + ?Sized> ParameterSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self) -> Result<SourcedParameters, SourceError> {
        (**self).fetch()
    }
}

impl<S: ParameterSource + ?Sized> ParameterSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self) -> Result<SourcedParameters, SourceError> {
        (**self).fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_reference_values() {
        let sourced = FixedSource::nhanes_reference().fetch().unwrap();
        assert_eq!(sourced.mean, 200.0);
        assert_eq!(sourced.std_dev, 40.0);
        assert_eq!(sourced.sample_count, None);
        assert_eq!(sourced.provenance, "nhanes-reference");

        let sourced = FixedSource::fixed_window_reference().fetch().unwrap();
        assert_eq!(sourced.std_dev, 35.0);
    }

    #[test]
    fn test_into_parameters() {
        let params = FixedSource::new(190.0, 30.0)
            .fetch()
            .unwrap()
            .into_parameters(184.0);
        assert_eq!(params, DistributionParameters::new(190.0, 30.0, 184.0));
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn ParameterSource> = Box::new(FixedSource::new(1.0, 2.0).named("boxed"));
        assert_eq!(source.name(), "boxed");
        assert_eq!(source.fetch().unwrap().std_dev, 2.0);
    }

    #[test]
    fn test_error_messages() {
        let err = SourceError::InsufficientReadings { got: 1, min: 2 };
        assert_eq!(err.to_string(), "insufficient readings: got 1, need at least 2");

        let err = SourceError::InvalidReading {
            line: 3,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid reading at line 3: 'abc'");
    }
}
