//! JSON serialization for distribution curves.

use lipidcurve_core::DistributionCurve;

/// Serialize a curve to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (non-finite values are written
/// as `null`, so this should not happen for a built curve).
pub fn to_json(curve: &DistributionCurve) -> Result<String, serde_json::Error> {
    serde_json::to_string(curve)
}

/// Serialize a curve to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(curve: &DistributionCurve) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(curve)
}
