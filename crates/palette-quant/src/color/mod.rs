//! Color type shared by every stage of the pipeline.
//!
//! The engine works directly on 8-bit RGBA samples. Distances are plain
//! squared Euclidean RGB distances; no gamma or perceptual conversion is
//! applied anywhere.

mod rgba;

pub use rgba::Rgba;
