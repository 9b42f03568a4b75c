//! Row-major RGBA pixel grid.

use crate::api::ReduceError;
use crate::color::Rgba;

/// A `width × height` grid of [`Rgba`] samples in row-major order.
///
/// Pixel `(x, y)` lives at index `y * width + x`; `y = 0` is the top row.
/// Both dimensions are at least 1, so every buffer holds at least one pixel.
///
/// # Example
///
/// ```
/// use palette_quant::{PixelBuffer, Rgba};
///
/// let bytes = [255, 0, 0, 255, 0, 0, 255, 255];
/// let buffer = PixelBuffer::from_rgba_bytes(2, 1, &bytes).unwrap();
///
/// assert_eq!(buffer.get(1, 0), Rgba::opaque(0, 0, 255));
/// assert_eq!(buffer.to_rgba_bytes(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Wrap a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidArgument`] if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, ReduceError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(ReduceError::invalid(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Result<Self, ReduceError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    /// Build a buffer from tightly packed interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidArgument`] if either dimension is zero or the
    /// byte count is not `width * height * 4`.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ReduceError> {
        let expected = pixel_count(width, height)?
            .checked_mul(4)
            .ok_or_else(|| too_large(width, height))?;
        if bytes.len() != expected {
            return Err(ReduceError::invalid(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Serialize to tightly packed interleaved RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_bytes()).collect()
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`: zero-size buffers are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgba> {
        self.pixels.chunks_exact(self.width)
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the buffer.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Mutable access to the pixel at `(x, y)`.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Rgba {
        let idx = self.index(x, y);
        &mut self.pixels[idx]
    }

    /// Resolve a signed offset from `(x, y)` to an in-bounds coordinate.
    ///
    /// Returns `None` when the target falls outside the buffer.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<(usize, usize)> {
        let tx = x.checked_add_signed(dx as isize)?;
        let ty = y.checked_add_signed(dy as isize)?;
        (tx < self.width && ty < self.height).then_some((tx, ty))
    }

    /// Consume the buffer and return its pixels.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

/// `width * height`, rejecting zero dimensions and overflow.
fn pixel_count(width: usize, height: usize) -> Result<usize, ReduceError> {
    if width == 0 || height == 0 {
        return Err(ReduceError::invalid(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| too_large(width, height))
}

fn too_large(width: usize, height: usize) -> ReduceError {
    ReduceError::invalid(format!("image dimensions {width}x{height} are too large"))
}
