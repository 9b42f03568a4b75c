//! ReducedImage: a rendered buffer plus its palette.

use crate::api::ReduceError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::palette::Palette;

/// The result of [`ColorReducer::reduce`](crate::ColorReducer::reduce).
///
/// Every pixel of [`buffer()`](Self::buffer) is an entry of
/// [`palette()`](Self::palette), and the buffer has the same dimensions as
/// the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedImage {
    buffer: PixelBuffer,
    palette: Palette,
}

impl ReducedImage {
    /// Pair a rendered buffer with the palette used to render it.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidArgument`] if a pixel is not a palette entry.
    pub fn new(buffer: PixelBuffer, palette: Palette) -> Result<Self, ReduceError> {
        if let Some((idx, &stray)) = buffer
            .pixels()
            .iter()
            .enumerate()
            .find(|&(_, &px)| !palette.contains(px))
        {
            return Err(ReduceError::invalid(format!(
                "pixel ({}, {}) is {stray}, which is not in the palette",
                idx % buffer.width(),
                idx / buffer.width()
            )));
        }
        Ok(Self { buffer, palette })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// The rendered pixels.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The palette the pixels were drawn from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of every pixel, row-major.
    pub fn indices(&self) -> Vec<usize> {
        self.buffer
            .pixels()
            .iter()
            .map(|&px| self.palette.nearest_index(px))
            .collect()
    }

    /// Number of distinct palette entries actually used.
    pub fn colors_used(&self) -> usize {
        let mut used: Vec<Rgba> = self.buffer.pixels().to_vec();
        used.sort_unstable();
        used.dedup();
        used.len()
    }

    /// Interleaved RGBA bytes of the rendered pixels.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.buffer.to_rgba_bytes()
    }

    /// Split into buffer and palette.
    pub fn into_parts(self) -> (PixelBuffer, Palette) {
        (self.buffer, self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReducedImage {
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        let red = Rgba::opaque(255, 0, 0);
        let palette = Palette::new(vec![black, white, red]).unwrap();
        let buffer = PixelBuffer::new(2, 2, vec![black, white, white, black]).unwrap();
        ReducedImage::new(buffer, palette).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let image = sample();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_indices() {
        assert_eq!(sample().indices(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_colors_used() {
        assert_eq!(sample().colors_used(), 2);
    }

    #[test]
    fn test_rgba_bytes() {
        let bytes = sample().to_rgba_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_stray_color_rejected() {
        let black = Rgba::opaque(0, 0, 0);
        let palette = Palette::new(vec![black]).unwrap();
        let buffer = PixelBuffer::new(2, 1, vec![black, Rgba::opaque(9, 9, 9)]).unwrap();

        let err = ReducedImage::new(buffer, palette).unwrap_err();
        assert!(matches!(err, ReduceError::InvalidArgument(_)));
        assert!(err.to_string().contains("(1, 0)"));
    }
}
