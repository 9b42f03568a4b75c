//! Palette construction and nearest-color matching.
//!
//! Three independent strategies build a [`Palette`]:
//!
//! - [`uniform`]: an evenly spaced `n×n×n` RGB cube (`n^3` colors)
//! - [`popularity`]: the `n` most frequent colors of an image
//! - [`kmeans`]: `n` centroids refined for a fixed number of iterations
//!
//! [`find_nearest`] maps any color to its closest palette entry.

mod grid;
mod kmeans;
mod matcher;
mod palette;
mod popularity;
mod strategy;

pub use grid::uniform;
pub use kmeans::{
    kmeans, kmeans_step, seed_centroids, KMeansOptions, DEFAULT_MAX_SEED_ATTEMPTS,
    MIN_SEED_DISTANCE_SQ,
};
pub use matcher::find_nearest;
pub use palette::Palette;
pub use popularity::popularity;
pub use strategy::PaletteStrategy;
