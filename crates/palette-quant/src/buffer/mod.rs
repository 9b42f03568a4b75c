//! In-memory RGBA raster.
//!
//! [`PixelBuffer`] is the data structure every stage reads: palette builders
//! scan it, and the dither engine rewrites it in place.

mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;
