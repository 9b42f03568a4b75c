//! Error diffusion dithering.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{scan_order, Dither, Kernel, KernelName, PixelSink};

/// Error diffusion with a fixed kernel.
///
/// For every pixel in [`scan_order`]:
///
/// 1. pick the nearest palette entry
/// 2. compute the signed RGB error `original - chosen`
/// 3. add `error * weight` to each in-bounds kernel neighbor, clamped to
///    `0..=255` and truncated toward zero
/// 4. overwrite the pixel with the chosen entry and commit it to the sink
///
/// Alpha is neither diffused nor adjusted on neighbors; the written pixel
/// takes the palette entry's alpha.
///
/// # Example
///
/// ```
/// use palette_quant::dither::{Dither, ErrorDiffusion, NullSink};
/// use palette_quant::{KernelName, Palette, PixelBuffer, Rgba};
///
/// let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
/// let mut image = PixelBuffer::filled(2, 1, Rgba::opaque(100, 100, 100)).unwrap();
///
/// ErrorDiffusion::new(KernelName::FloydSteinberg).dither(&mut image, &palette, &mut NullSink);
///
/// // The first pixel goes black and pushes 7/16 of its error right,
/// // lifting the second pixel to 143, which is closer to white.
/// assert_eq!(image.get(0, 0), Rgba::opaque(0, 0, 0));
/// assert_eq!(image.get(1, 0), Rgba::opaque(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorDiffusion {
    kernel: &'static Kernel,
}

impl ErrorDiffusion {
    /// Error diffusion with a registered kernel.
    pub fn new(name: KernelName) -> Self {
        Self {
            kernel: name.kernel(),
        }
    }

    /// Error diffusion with an arbitrary kernel table.
    ///
    /// The table must be causal (see [`Kernel::is_causal`]); a tap pointing
    /// at an already finalized pixel would overwrite committed output.
    pub fn with_kernel(kernel: &'static Kernel) -> Self {
        debug_assert!(kernel.is_causal(), "kernel {} is not causal", kernel.name);
        Self { kernel }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &'static Kernel {
        self.kernel
    }
}

impl Dither for ErrorDiffusion {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, sink: &mut dyn PixelSink) {
        for (x, y) in scan_order(buffer.width(), buffer.height()) {
            let original = buffer.get(x, y);
            let chosen = palette.nearest(original);
            let error = [
                f64::from(original.r) - f64::from(chosen.r),
                f64::from(original.g) - f64::from(chosen.g),
                f64::from(original.b) - f64::from(chosen.b),
            ];
            diffuse_error(buffer, x, y, error, self.kernel);
            buffer.set(x, y, chosen);
            sink.commit(x, y, chosen);
        }
        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            colors = palette.len(),
            kernel = self.kernel.name,
            "Error diffusion pass complete"
        );
    }
}

/// Spread `error` from `(x, y)` onto its kernel neighbors.
///
/// Taps whose target lies outside the buffer are skipped, so pixels near
/// the border propagate less than the full error. Returns the sum of the
/// weights actually applied.
pub fn diffuse_error(
    buffer: &mut PixelBuffer,
    x: usize,
    y: usize,
    error: [f64; 3],
    kernel: &Kernel,
) -> f64 {
    let mut applied = 0.0;
    for (dx, dy, weight) in kernel.taps() {
        let Some((tx, ty)) = buffer.offset(x, y, dx, dy) else {
            continue;
        };
        let px = buffer.get_mut(tx, ty);
        px.r = nudge(px.r, error[0] * weight);
        px.g = nudge(px.g, error[1] * weight);
        px.b = nudge(px.b, error[2] * weight);
        applied += weight;
    }
    applied
}

/// Add `delta` to a channel, saturating at the channel range.
#[inline]
fn nudge(channel: u8, delta: f64) -> u8 {
    (f64::from(channel) + delta).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::dither::{NullSink, BURKE, FLOYD_STEINBERG, STUCKI};

    fn black_white() -> Palette {
        Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_nudge_saturates() {
        assert_eq!(nudge(250, 43.75), 255);
        assert_eq!(nudge(5, -40.0), 0);
        assert_eq!(nudge(100, 31.25), 131);
        assert_eq!(nudge(100, -0.5), 99);
    }

    #[test]
    fn test_error_flows_to_next_row_upward() {
        // Bottom pixel is processed first and pushes 5/16 of its error up.
        let mut buffer = PixelBuffer::filled(1, 2, Rgba::opaque(100, 100, 100)).unwrap();
        ErrorDiffusion::new(KernelName::FloydSteinberg).dither(
            &mut buffer,
            &black_white(),
            &mut NullSink,
        );
        assert_eq!(buffer.get(0, 1), Rgba::opaque(0, 0, 0));
        assert_eq!(buffer.get(0, 0), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_exact_palette_colors_unchanged() {
        let palette = black_white();
        let pixels = (0..16)
            .map(|i| palette.colors()[(i + i / 4) % 2])
            .collect();
        let mut buffer = PixelBuffer::new(4, 4, pixels).unwrap();
        let before = buffer.clone();

        ErrorDiffusion::new(KernelName::Stucki).dither(&mut buffer, &palette, &mut NullSink);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_committed_pixels_are_final() {
        let palette = black_white();
        let pixels = (0..64)
            .map(|i| Rgba::opaque((i * 4) as u8, (i * 3) as u8, 90))
            .collect();
        let mut buffer = PixelBuffer::new(8, 8, pixels).unwrap();
        let mut committed = Vec::new();

        ErrorDiffusion::new(KernelName::Burke).dither(
            &mut buffer,
            &palette,
            &mut |x: usize, y: usize, c: Rgba| committed.push((x, y, c)),
        );

        assert_eq!(committed.len(), 64);
        for (x, y, color) in committed {
            assert_eq!(buffer.get(x, y), color, "pixel ({x}, {y}) changed after commit");
        }
    }

    #[test]
    fn test_mid_gray_dithers_to_half_white() {
        let palette = black_white();
        let size = 32;
        let mut buffer = PixelBuffer::filled(size, size, Rgba::opaque(128, 128, 128)).unwrap();

        ErrorDiffusion::new(KernelName::FloydSteinberg).dither(&mut buffer, &palette, &mut NullSink);

        let white = buffer
            .pixels()
            .iter()
            .filter(|&&px| px == Rgba::opaque(255, 255, 255))
            .count();
        let ratio = white as f64 / (size * size) as f64;
        assert!((ratio - 0.5).abs() < 0.1, "white ratio {ratio}");
    }

    #[test]
    fn test_diffuse_interior_spreads_full_error() {
        let mut buffer = PixelBuffer::filled(5, 5, Rgba::opaque(100, 100, 100)).unwrap();
        let applied = diffuse_error(&mut buffer, 2, 2, [32.0, -32.0, 0.0], &BURKE);
        assert_eq!(applied, 1.0);

        // 32 * w/32 is exact in binary, so no truncation loss here.
        let red_gain: i32 = buffer.pixels().iter().map(|px| i32::from(px.r) - 100).sum();
        let green_loss: i32 = buffer.pixels().iter().map(|px| i32::from(px.g) - 100).sum();
        assert_eq!(red_gain, 32);
        assert_eq!(green_loss, -32);
        assert_eq!(buffer.get(2, 2), Rgba::opaque(100, 100, 100));
    }

    #[test]
    fn test_diffuse_corner_loses_out_of_bounds_share() {
        let mut buffer = PixelBuffer::filled(3, 3, Rgba::opaque(100, 100, 100)).unwrap();

        // Top-right corner: every Floyd-Steinberg tap is out of bounds.
        assert_eq!(diffuse_error(&mut buffer, 2, 0, [16.0; 3], &FLOYD_STEINBERG), 0.0);
        assert!(buffer.pixels().iter().all(|&px| px == Rgba::opaque(100, 100, 100)));

        // Bottom-left corner: only the (-1, -1) tap is lost.
        let applied = diffuse_error(&mut buffer, 0, 2, [16.0; 3], &FLOYD_STEINBERG);
        assert_eq!(applied, 13.0 / 16.0);
        assert_eq!(buffer.get(1, 2).r, 107);
        assert_eq!(buffer.get(0, 1).r, 105);
        assert_eq!(buffer.get(1, 1).r, 101);
    }

    #[test]
    fn test_diffuse_stucki_within_truncation_bound() {
        let mut buffer = PixelBuffer::filled(7, 7, Rgba::opaque(100, 100, 100)).unwrap();
        let applied = diffuse_error(&mut buffer, 3, 3, [50.0, 50.0, 50.0], &STUCKI);
        assert!((applied - 1.0).abs() < 1e-12);

        // Each tap truncates at most one unit.
        let gain: i32 = buffer.pixels().iter().map(|px| i32::from(px.r) - 100).sum();
        assert!(gain <= 50 && gain > 50 - STUCKI.entries.len() as i32, "gain {gain}");
    }

    #[test]
    fn test_alpha_is_not_diffused() {
        let mut buffer = PixelBuffer::filled(2, 1, Rgba::new(100, 100, 100, 77)).unwrap();
        diffuse_error(&mut buffer, 0, 0, [64.0; 3], &FLOYD_STEINBERG);
        assert_eq!(buffer.get(1, 0), Rgba::new(128, 128, 128, 77));
    }
}
