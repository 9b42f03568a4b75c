//! Direct quantization without error propagation.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{scan_order, Dither, PixelSink};

/// Replace every pixel with its nearest palette entry.
///
/// Used with palettes derived from the image itself (popularity, k-means).
/// Each pixel is independent; the result does not depend on the scan order,
/// which is kept only so sinks see the same sequence as with
/// [`ErrorDiffusion`](super::ErrorDiffusion).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectQuantize;

impl Dither for DirectQuantize {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, sink: &mut dyn PixelSink) {
        for (x, y) in scan_order(buffer.width(), buffer.height()) {
            let chosen = palette.nearest(buffer.get(x, y));
            buffer.set(x, y, chosen);
            sink.commit(x, y, chosen);
        }
        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            colors = palette.len(),
            "Direct quantization pass complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::dither::NullSink;

    #[test]
    fn test_direct_maps_to_nearest() {
        let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
        let pixels = vec![
            Rgba::opaque(10, 10, 10),
            Rgba::opaque(200, 200, 200),
            Rgba::opaque(127, 127, 127),
            Rgba::opaque(128, 128, 128),
        ];
        let mut buffer = PixelBuffer::new(2, 2, pixels).unwrap();

        DirectQuantize.dither(&mut buffer, &palette, &mut NullSink);

        assert_eq!(
            buffer.pixels(),
            &[
                Rgba::opaque(0, 0, 0),
                Rgba::opaque(255, 255, 255),
                Rgba::opaque(0, 0, 0),
                Rgba::opaque(255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_direct_has_no_neighbor_effect() {
        // A lone bright pixel must not change how its dark neighbors quantize.
        let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
        let mut pixels = vec![Rgba::opaque(100, 100, 100); 9];
        pixels[4] = Rgba::opaque(255, 255, 255);
        let mut buffer = PixelBuffer::new(3, 3, pixels).unwrap();

        DirectQuantize.dither(&mut buffer, &palette, &mut NullSink);

        let white = buffer
            .pixels()
            .iter()
            .filter(|&&px| px == Rgba::opaque(255, 255, 255))
            .count();
        assert_eq!(white, 1);
    }

    #[test]
    fn test_direct_emits_every_pixel_once() {
        let palette = Palette::new(vec![Rgba::opaque(0, 0, 0)]).unwrap();
        let mut buffer = PixelBuffer::filled(3, 2, Rgba::opaque(50, 50, 50)).unwrap();
        let mut seen = Vec::new();

        DirectQuantize.dither(&mut buffer, &palette, &mut |x: usize, y: usize, _c: Rgba| {
            seen.push((x, y))
        });

        assert_eq!(seen, scan_order(3, 2).collect::<Vec<_>>());
    }
}
