//! Test images.

use palette_quant::{PixelBuffer, Rgba};

pub const RED: Rgba = Rgba::opaque(255, 0, 0);
pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

/// The 2x2 red/red/green/blue image.
pub fn two_by_two() -> PixelBuffer {
    PixelBuffer::new(2, 2, vec![RED, RED, GREEN, BLUE]).expect("valid 2x2")
}

/// Horizontal red ramp over a vertical green ramp.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            Rgba::opaque(
                (x * 255 / (width - 1)) as u8,
                (y * 255 / (height - 1)) as u8,
                96,
            )
        })
        .collect();
    PixelBuffer::new(width, height, pixels).expect("valid gradient")
}

/// Four flat quadrants of well-separated colors.
pub fn quadrants(size: usize) -> PixelBuffer {
    let colors = [
        Rgba::opaque(10, 10, 10),
        Rgba::opaque(240, 30, 30),
        Rgba::opaque(30, 220, 40),
        Rgba::opaque(40, 50, 230),
    ];
    let half = size / 2;
    let pixels = (0..size * size)
        .map(|i| {
            let x = i % size;
            let y = i / size;
            colors[usize::from(x >= half) + 2 * usize::from(y >= half)]
        })
        .collect();
    PixelBuffer::new(size, size, pixels).expect("valid quadrants")
}
