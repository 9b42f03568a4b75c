//! Incremental pixel output.

use crate::color::Rgba;

/// Receives each pixel as soon as the engine finalizes it.
///
/// A renderer can use this to display progress. Pixels arrive in scan
/// order (bottom row first, left to right), but only the final buffer
/// contents are guaranteed; the emission order is not part of the contract.
///
/// Any `FnMut(usize, usize, Rgba)` closure is a sink:
///
/// ```
/// use palette_quant::{dither::{DirectQuantize, Dither}, Palette, PixelBuffer, Rgba};
///
/// let palette = Palette::new(vec![Rgba::opaque(0, 0, 0)]).unwrap();
/// let mut buffer = PixelBuffer::filled(2, 2, Rgba::opaque(9, 9, 9)).unwrap();
///
/// let mut committed = 0;
/// DirectQuantize.dither(&mut buffer, &palette, &mut |_x: usize, _y: usize, _c: Rgba| committed += 1);
/// assert_eq!(committed, 4);
/// ```
pub trait PixelSink {
    /// Called once per pixel with its final color.
    fn commit(&mut self, x: usize, y: usize, color: Rgba);
}

impl<F> PixelSink for F
where
    F: FnMut(usize, usize, Rgba),
{
    #[inline]
    fn commit(&mut self, x: usize, y: usize, color: Rgba) {
        self(x, y, color)
    }
}

/// A sink that discards every pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PixelSink for NullSink {
    #[inline]
    fn commit(&mut self, _x: usize, _y: usize, _color: Rgba) {}
}
