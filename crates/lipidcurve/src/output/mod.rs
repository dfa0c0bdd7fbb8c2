//! Output for distribution curves.
//!
//! - Chart: SVG rendering of the curve with shaded regions and annotations
//! - Terminal: Human-readable summary with colors
//! - JSON: Machine-readable serialization

mod chart;
mod json;
mod terminal;

pub use chart::{ChartError, ChartRenderer, ChartStyle, Rgb, SvgRenderer};
pub use json::{to_json, to_json_pretty};
pub use terminal::{format_compact, format_summary};
