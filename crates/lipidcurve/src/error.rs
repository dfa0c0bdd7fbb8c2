//! Top-level error type.

use lipidcurve_core::InvalidParameterError;
use thiserror::Error;

use crate::output::ChartError;
use crate::source::SourceError;

/// Errors from building, sourcing or rendering a chart.
#[derive(Error, Debug)]
pub enum Error {
    /// Distribution parameters or grid settings are unusable.
    #[error("invalid parameters: {0}")]
    InvalidParameter(#[from] InvalidParameterError),

    /// A parameter source failed to produce a mean and standard deviation.
    #[error("parameter source failed: {0}")]
    Source(#[from] SourceError),

    /// The renderer failed to draw or save the chart.
    #[error("chart rendering failed: {0}")]
    Chart(#[from] ChartError),

    /// Curve serialization failed.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
