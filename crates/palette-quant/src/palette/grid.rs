//! Uniform RGB-cube palette.

use rayon::prelude::*;

use crate::api::ReduceError;
use crate::color::Rgba;

use super::Palette;

/// Build an evenly spaced `n×n×n` RGB cube.
///
/// Each axis takes the values `0, step, 2*step, …, (n-1)*step` with
/// `step = 255 / (n - 1)` (integer division), so the palette holds exactly
/// `n^3` opaque colors, not `n`. Entries are ordered red-major, then green,
/// then blue.
///
/// The red axis is generated in parallel; collection preserves order.
///
/// # Errors
///
/// [`ReduceError::InvalidArgument`] if `n < 2` (no step can be derived) or
/// `n > 256` (the step would be zero and colors would repeat).
///
/// # Example
///
/// ```
/// use palette_quant::{palette, Rgba};
///
/// let cube = palette::uniform(2).unwrap();
/// assert_eq!(cube.len(), 8);
/// assert!(cube.contains(Rgba::opaque(255, 0, 255)));
/// ```
pub fn uniform(n: usize) -> Result<Palette, ReduceError> {
    if n < 2 {
        return Err(ReduceError::invalid(format!(
            "uniform palette needs at least 2 levels per channel, got {n}"
        )));
    }
    if n > 256 {
        return Err(ReduceError::invalid(format!(
            "uniform palette supports at most 256 levels per channel, got {n}"
        )));
    }

    let step = 255 / (n - 1);
    let level = move |i: usize| (i * step) as u8;

    let colors: Vec<Rgba> = (0..n)
        .into_par_iter()
        .flat_map_iter(|r| {
            (0..n).flat_map(move |g| (0..n).map(move |b| Rgba::opaque(level(r), level(g), level(b))))
        })
        .collect();

    tracing::debug!(levels = n, step, colors = colors.len(), "Built uniform palette");
    Palette::new(colors)
}
