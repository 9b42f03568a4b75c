//! Palette strategy selection.

use std::fmt;

use crate::dither::KernelName;

/// How the palette for an image is built, and therefore how the image is
/// rendered.
///
/// - [`Uniform`](Self::Uniform) builds an RGB cube and dithers with error
///   diffusion through the given kernel.
/// - [`Popularity`](Self::Popularity) and [`KMeans`](Self::KMeans) derive
///   the palette from the image and quantize directly, without diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteStrategy {
    /// Evenly spaced RGB cube plus error diffusion.
    Uniform {
        /// Diffusion kernel used while dithering.
        kernel: KernelName,
    },

    /// Most frequent image colors, direct quantization.
    Popularity,

    /// K-means centroids, direct quantization.
    KMeans {
        /// Number of clustering iterations.
        epsilon: usize,
    },
}

impl PaletteStrategy {
    /// Short lowercase name (`uniform`, `popularity`, `kmeans`).
    pub fn name(&self) -> &'static str {
        match self {
            PaletteStrategy::Uniform { .. } => "uniform",
            PaletteStrategy::Popularity => "popularity",
            PaletteStrategy::KMeans { .. } => "kmeans",
        }
    }

    /// Whether this strategy dithers with error diffusion.
    pub fn diffuses_error(&self) -> bool {
        matches!(self, PaletteStrategy::Uniform { .. })
    }
}

impl fmt::Display for PaletteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteStrategy::Uniform { kernel } => write!(f, "uniform ({kernel})"),
            PaletteStrategy::Popularity => write!(f, "popularity"),
            PaletteStrategy::KMeans { epsilon } => write!(f, "kmeans ({epsilon} iterations)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        let uniform = PaletteStrategy::Uniform {
            kernel: KernelName::Burke,
        };
        assert_eq!(uniform.name(), "uniform");
        assert_eq!(PaletteStrategy::Popularity.name(), "popularity");
        assert_eq!(PaletteStrategy::KMeans { epsilon: 3 }.name(), "kmeans");
    }

    #[test]
    fn test_only_uniform_diffuses() {
        assert!(PaletteStrategy::Uniform {
            kernel: KernelName::FloydSteinberg
        }
        .diffuses_error());
        assert!(!PaletteStrategy::Popularity.diffuses_error());
        assert!(!PaletteStrategy::KMeans { epsilon: 1 }.diffuses_error());
    }

    #[test]
    fn test_strategy_display() {
        let uniform = PaletteStrategy::Uniform {
            kernel: KernelName::Stucki,
        };
        assert_eq!(uniform.to_string(), "uniform (stucki)");
        assert_eq!(
            PaletteStrategy::KMeans { epsilon: 10 }.to_string(),
            "kmeans (10 iterations)"
        );
    }
}
