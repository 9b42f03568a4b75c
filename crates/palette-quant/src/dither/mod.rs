//! Dither engine: one raster pass that replaces every pixel with a palette
//! color.
//!
//! # Modes
//!
//! - [`ErrorDiffusion`]: quantize, then push the residual error onto
//!   neighbors that have not been visited yet, weighted by a [`Kernel`]
//! - [`DirectQuantize`]: quantize only, no error propagation
//!
//! # Scan Order
//!
//! Both modes visit rows from the bottom (`y = height - 1`) to the top and
//! pixels left to right within a row; see [`scan_order`]. Registered kernels
//! only reach pixels later in this order, so a finalized pixel is never
//! touched again. Error diffusion is therefore strictly sequential and runs
//! on the calling thread.
//!
//! # Example
//!
//! ```
//! use palette_quant::dither::{Dither, ErrorDiffusion, NullSink};
//! use palette_quant::{palette, KernelName, PixelBuffer, Rgba};
//!
//! let cube = palette::uniform(2).unwrap();
//! let mut image = PixelBuffer::filled(4, 4, Rgba::opaque(128, 64, 200)).unwrap();
//!
//! ErrorDiffusion::new(KernelName::FloydSteinberg).dither(&mut image, &cube, &mut NullSink);
//! assert!(image.pixels().iter().all(|&px| cube.contains(px)));
//! ```

mod direct;
mod error_diffusion;
mod kernel;
mod sink;

pub use direct::DirectQuantize;
pub use error_diffusion::{diffuse_error, ErrorDiffusion};
pub use kernel::*;
pub use sink::{NullSink, PixelSink};

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

/// A single-pass palette renderer.
///
/// Implementations rewrite `buffer` in place so that it contains only
/// palette entries, committing each finalized pixel to `sink`. The palette
/// is non-empty by construction, so the pass itself cannot fail.
pub trait Dither {
    /// Render `buffer` with `palette`.
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, sink: &mut dyn PixelSink);
}

/// Coordinates in engine scan order: rows bottom to top, columns left to
/// right.
///
/// # Example
///
/// ```
/// use palette_quant::dither::scan_order;
///
/// let order: Vec<_> = scan_order(2, 2).collect();
/// assert_eq!(order, vec![(0, 1), (1, 1), (0, 0), (1, 0)]);
/// ```
pub fn scan_order(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height)
        .rev()
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
}
