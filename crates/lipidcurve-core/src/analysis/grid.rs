//! Evenly spaced sampling grids.

extern crate alloc;

use alloc::vec::Vec;

/// `count` evenly spaced points from `lower` to `upper`, both included.
///
/// Point `i` is `lower + i * step` with `step = (upper - lower) / (count - 1)`;
/// the last point is pinned to `upper` so the endpoint is exact regardless of
/// rounding in the step. Returns an empty vector for `count == 0` and
/// `[lower]` for `count == 1`.
pub fn linspace(lower: f64, upper: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![lower],
        _ => {
            let step = (upper - lower) / (count - 1) as f64;
            let mut xs: Vec<f64> = (0..count).map(|i| lower + i as f64 * step).collect();
            xs[count - 1] = upper;
            xs
        }
    }
}
