//! The immutable palette type.

use crate::api::ReduceError;
use crate::color::Rgba;

use super::matcher::nearest_index;

/// An ordered, non-empty set of representative colors.
///
/// Built once per image by one of the palette strategies and then only
/// read. Entries are kept in construction order, which is also the order
/// used to break ties during nearest-color matching.
///
/// # Example
///
/// ```
/// use palette_quant::{Palette, Rgba};
///
/// let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgba::opaque(30, 40, 50)), Rgba::opaque(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Rgba>) -> Result<Self, ReduceError> {
        if colors.is_empty() {
            return Err(ReduceError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The entry at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgba> {
        self.colors.get(idx).copied()
    }

    /// Whether `color` is an entry (all four channels compared).
    pub fn contains(&self, color: Rgba) -> bool {
        self.colors.contains(&color)
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.colors.iter()
    }

    /// Index of the entry closest to `color` (first one on ties).
    #[inline]
    pub fn nearest_index(&self, color: Rgba) -> usize {
        nearest_index(&self.colors, color)
    }

    /// The entry closest to `color` (first one on ties).
    #[inline]
    pub fn nearest(&self, color: Rgba) -> Rgba {
        self.colors[self.nearest_index(color)]
    }

    /// Consume the palette and return its entries.
    pub fn into_colors(self) -> Vec<Rgba> {
        self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_empty_error() {
        assert_eq!(Palette::new(Vec::new()), Err(ReduceError::EmptyPalette));
    }

    #[test]
    fn test_palette_keeps_order() {
        let colors = vec![
            Rgba::opaque(3, 3, 3),
            Rgba::opaque(1, 1, 1),
            Rgba::opaque(2, 2, 2),
        ];
        let palette = Palette::new(colors.clone()).unwrap();
        assert_eq!(palette.colors(), colors.as_slice());
        assert_eq!(palette.get(1), Some(Rgba::opaque(1, 1, 1)));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn test_nearest_returns_entry() {
        let palette = Palette::new(vec![
            Rgba::opaque(0, 0, 0),
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 0, 255),
        ])
        .unwrap();
        assert_eq!(palette.nearest(Rgba::opaque(200, 30, 40)), Rgba::opaque(255, 0, 0));
        assert_eq!(palette.nearest_index(Rgba::opaque(10, 0, 220)), 2);
    }

    #[test]
    fn test_contains_compares_alpha() {
        let palette = Palette::new(vec![Rgba::opaque(1, 2, 3)]).unwrap();
        assert!(palette.contains(Rgba::opaque(1, 2, 3)));
        assert!(!palette.contains(Rgba::new(1, 2, 3, 0)));
    }
}
