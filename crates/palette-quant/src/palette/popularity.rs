//! Popularity (most frequent colors) palette.

use std::cmp::Reverse;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::api::ReduceError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;

use super::Palette;

/// Pick the `n` most frequent colors of `buffer`.
///
/// Colors are counted by exact equality of all four channels. The ranking
/// is by descending count; equal counts fall back to ascending [`Rgba`]
/// order, so the result is deterministic. Images with fewer than `n`
/// distinct colors yield a shorter palette.
///
/// Counting runs in parallel per row: every worker folds into a local map
/// and the maps are merged afterwards.
///
/// # Errors
///
/// [`ReduceError::InvalidArgument`] if `n == 0`.
///
/// # Example
///
/// ```
/// use palette_quant::{palette, PixelBuffer, Rgba};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let blue = Rgba::opaque(0, 0, 255);
/// let image = PixelBuffer::new(3, 1, vec![blue, red, red]).unwrap();
///
/// let top = palette::popularity(&image, 1).unwrap();
/// assert_eq!(top.colors(), &[red]);
/// ```
pub fn popularity(buffer: &PixelBuffer, n: usize) -> Result<Palette, ReduceError> {
    if n == 0 {
        return Err(ReduceError::invalid("color count must be positive"));
    }

    let counts = count_colors(buffer);
    let distinct = counts.len();

    let mut ranked: Vec<(Rgba, usize)> = counts.into_iter().collect();
    ranked.sort_unstable_by_key(|&(color, count)| (Reverse(count), color));
    ranked.truncate(n);

    tracing::debug!(
        requested = n,
        distinct,
        colors = ranked.len(),
        "Built popularity palette"
    );
    Palette::new(ranked.into_iter().map(|(color, _)| color).collect())
}

fn count_colors(buffer: &PixelBuffer) -> HashMap<Rgba, usize> {
    buffer
        .pixels()
        .par_chunks(buffer.width())
        .fold(HashMap::new, |mut local: HashMap<Rgba, usize>, row| {
            for &px in row {
                *local.entry(px).or_insert(0) += 1;
            }
            local
        })
        .reduce(HashMap::new, |a, b| {
            // fold the smaller map into the larger one
            if a.len() >= b.len() {
                merge_counts(a, b)
            } else {
                merge_counts(b, a)
            }
        })
}

fn merge_counts(
    mut into: HashMap<Rgba, usize>,
    from: HashMap<Rgba, usize>,
) -> HashMap<Rgba, usize> {
    for (color, count) in from {
        *into.entry(color).or_insert(0) += count;
    }
    into
}
