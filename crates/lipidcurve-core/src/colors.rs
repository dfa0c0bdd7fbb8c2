//! Highlighting for the text summaries.
//!
//! With `std`, highlighting goes through `colored`, which honors `NO_COLOR`
//! and TTY detection. Without it every helper returns the text unchanged.

use alloc::string::String;

#[derive(Clone, Copy)]
enum Tone {
    Below,
    Above,
    Heading,
    Muted,
    Emphasis,
}

#[cfg(feature = "std")]
fn paint(s: &str, tone: Tone) -> String {
    use colored::Colorize;

    match tone {
        Tone::Below => s.green(),
        Tone::Above => s.red(),
        Tone::Heading => s.bold(),
        Tone::Muted => s.dimmed(),
        Tone::Emphasis => s.cyan().bold(),
    }
    .to_string()
}

#[cfg(not(feature = "std"))]
fn paint(s: &str, _tone: Tone) -> String {
    String::from(s)
}

/// The at-or-below-threshold share (green).
pub fn green(s: &str) -> String {
    paint(s, Tone::Below)
}

/// The above-threshold share (red).
pub fn red(s: &str) -> String {
    paint(s, Tone::Above)
}

/// Headings.
pub fn bold(s: &str) -> String {
    paint(s, Tone::Heading)
}

/// Secondary detail such as z-scores and grid policy.
pub fn dim(s: &str) -> String {
    paint(s, Tone::Muted)
}

/// Distribution notation in compact lines.
pub fn bold_cyan(s: &str) -> String {
    paint(s, Tone::Emphasis)
}
