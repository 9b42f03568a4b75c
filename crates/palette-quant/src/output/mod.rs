//! Output types for the reduction pipeline.
//!
//! [`ReducedImage`] pairs the rendered buffer with the palette it was
//! rendered from.

mod reduced_image;

pub use reduced_image::ReducedImage;
