//! Terminal output formatting with colors.
//!
//! The layout lives in `lipidcurve-core`; colors come from the `colored`
//! crate, which respects `NO_COLOR` and TTY detection.

use colored::Colorize;
use lipidcurve_core::DistributionCurve;

use crate::source::SourcedParameters;

/// Format a curve for human-readable terminal output.
///
/// When the parameters came from a [`crate::source::ParameterSource`], pass
/// them as `sourced` to append where the mean and standard deviation came from.
pub fn format_summary(curve: &DistributionCurve, sourced: Option<&SourcedParameters>) -> String {
    let mut out = lipidcurve_core::formatting::format_summary_plain(curve);

    if let Some(sourced) = sourced {
        let count = match sourced.sample_count {
            Some(n) => format!("{} readings", n),
            None => "literal constants".to_string(),
        };
        out.push_str(&format!(
            "\n  {} {} ({})",
            "Source:".dimmed(),
            sourced.provenance.cyan(),
            count
        ));
    }

    out
}

/// One-line summary for logs and progress output.
pub fn format_compact(curve: &DistributionCurve) -> String {
    lipidcurve_core::formatting::format_compact(curve)
}
