//! Formatting helpers for curve summaries and chart labels.
//!
//! When the `std` feature is enabled, summaries include ANSI color codes
//! (via the `colored` crate). Without `std`, output is plain text. The label
//! helpers never add colors, so renderers can use them directly.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::colors::{bold, bold_cyan, dim, green, red};
use crate::math;
use crate::result::DistributionCurve;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Unit used for cholesterol values in labels.
pub const UNIT: &str = "mg/dL";

/// Format a value without a trailing `.0` when it is integral.
///
/// `184.0` becomes `"184"`, `184.5` stays `"184.5"`.
pub fn format_value(v: f64) -> String {
    if v.is_finite() && math::round(v) == v {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// `"184 mg/dL"`, the annotation placed at the threshold.
pub fn threshold_label(curve: &DistributionCurve) -> String {
    format!("{} {}", format_value(curve.threshold()), UNIT)
}

/// `"Below 184: 34.5%"`.
pub fn below_label(curve: &DistributionCurve) -> String {
    format!(
        "Below {}: {:.1}%",
        format_value(curve.threshold()),
        curve.percent_below()
    )
}

/// `"Above 184: 65.5%"`.
pub fn above_label(curve: &DistributionCurve) -> String {
    format!(
        "Above {}: {:.1}%",
        format_value(curve.threshold()),
        curve.percent_above()
    )
}

/// Format a curve summary for human-readable terminal output.
pub fn format_summary_plain(curve: &DistributionCurve) -> String {
    let mut out = String::new();
    let params = &curve.params;
    let threshold = format_value(params.threshold());

    writeln!(out, "{}", bold("lipidcurve")).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out).unwrap();

    writeln!(
        out,
        "  Distribution  N({}, {}\u{00B2}) {}",
        format_value(params.mean()),
        format_value(params.std_dev()),
        UNIT
    )
    .unwrap();
    writeln!(
        out,
        "  Threshold     {} {} {}",
        threshold,
        UNIT,
        dim(&format!("(z = {:.2})", params.z_score()))
    )
    .unwrap();
    if let (Some(&lo), Some(&hi)) = (curve.x_values.first(), curve.x_values.last()) {
        writeln!(
            out,
            "  Grid          {} points over [{}, {}] {}",
            curve.len(),
            format_value(lo),
            format_value(hi),
            dim(&format!("({})", curve.grid))
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    writeln!(
        out,
        "  {}",
        green(&format!(
            "Below {:<8}{:>6.1}%",
            threshold,
            curve.percent_below()
        ))
    )
    .unwrap();
    writeln!(
        out,
        "  {}",
        red(&format!(
            "Above {:<8}{:>6.1}%",
            threshold,
            curve.percent_above()
        ))
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(
        out,
        "  Density at threshold  {:.6} per {}",
        curve.density_at_threshold, UNIT
    )
    .unwrap();
    if let Some((x, d)) = curve.peak() {
        writeln!(
            out,
            "  Peak density          {:.6} at {:.1} {}",
            d, x, UNIT
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    write!(out, "{}", SEPARATOR).unwrap();
    out
}

/// One-line summary, e.g. for log messages.
pub fn format_compact(curve: &DistributionCurve) -> String {
    format!(
        "{} {:.1}% below / {:.1}% above {}",
        bold_cyan(&format!(
            "N({}, {}\u{00B2})",
            format_value(curve.params.mean()),
            format_value(curve.params.std_dev())
        )),
        curve.percent_below(),
        curve.percent_above(),
        format_value(curve.threshold())
    )
}
