//! Nearest palette color search.

use crate::api::ReduceError;
use crate::color::Rgba;

/// Find the palette entry closest to `query`.
///
/// Distance is squared Euclidean over red, green and blue; alpha is
/// ignored. When several entries are equally close the first one wins.
///
/// # Errors
///
/// [`ReduceError::EmptyPalette`] if `colors` is empty.
///
/// # Example
///
/// ```
/// use palette_quant::{palette::find_nearest, Rgba};
///
/// let colors = [Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)];
/// assert_eq!(find_nearest(&colors, Rgba::opaque(200, 190, 210)), Ok(1));
/// ```
pub fn find_nearest(colors: &[Rgba], query: Rgba) -> Result<usize, ReduceError> {
    if colors.is_empty() {
        return Err(ReduceError::EmptyPalette);
    }
    Ok(nearest_index(colors, query))
}

/// Linear scan for the closest entry. `colors` must not be empty.
#[inline]
pub(crate) fn nearest_index(colors: &[Rgba], query: Rgba) -> usize {
    debug_assert!(!colors.is_empty());
    let mut best_idx = 0;
    let mut best_dist = u32::MAX;
    for (i, &candidate) in colors.iter().enumerate() {
        let dist = query.distance_squared(candidate);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
            if dist == 0 {
                break;
            }
        }
    }
    best_idx
}
