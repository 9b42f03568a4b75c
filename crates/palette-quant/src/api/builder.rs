//! ColorReducer builder -- the primary ergonomic entry point for the crate.
//!
//! [`ColorReducer`] ties a [`PaletteStrategy`] to the matching dither mode:
//! uniform palettes are rendered with error diffusion, image-derived
//! palettes (popularity, k-means) with direct quantization.

use crate::buffer::PixelBuffer;
use crate::dither::{DirectQuantize, Dither, ErrorDiffusion, NullSink, PixelSink};
use crate::output::ReducedImage;
use crate::palette::{self, KMeansOptions, Palette, PaletteStrategy, DEFAULT_MAX_SEED_ATTEMPTS};

use super::ReduceError;

/// High-level color reduction builder.
///
/// # Design
///
/// - Constructor takes the strategy and requested color count
/// - Configuration methods consume and return `self`
/// - [`reduce()`](Self::reduce) and
///   [`reduce_in_place()`](Self::reduce_in_place) take `&self`, so one
///   reducer can process many images
/// - The palette is fully built before the buffer is touched; any error
///   leaves the input untouched
///
/// Note that for [`PaletteStrategy::Uniform`] the color count is the number
/// of levels per channel: the palette holds `color_count^3` entries.
///
/// # Example
///
/// ```
/// use palette_quant::{ColorReducer, PaletteStrategy, PixelBuffer, Rgba};
///
/// let image = PixelBuffer::filled(4, 4, Rgba::opaque(30, 140, 220)).unwrap();
///
/// let reducer = ColorReducer::new(PaletteStrategy::KMeans { epsilon: 5 }, 1).seed(9);
/// let reduced = reducer.reduce(&image).unwrap();
///
/// assert_eq!(reduced.palette().len(), 1);
/// assert_eq!(reduced.buffer().get(0, 0), Rgba::opaque(30, 140, 220));
/// ```
#[derive(Debug, Clone)]
pub struct ColorReducer {
    strategy: PaletteStrategy,
    color_count: usize,
    seed: Option<u64>,
    max_seed_attempts: usize,
}

impl ColorReducer {
    /// Create a reducer for `strategy` targeting `color_count` colors.
    pub fn new(strategy: PaletteStrategy, color_count: usize) -> Self {
        Self {
            strategy,
            color_count,
            seed: None,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }

    /// Fix the k-means seeding RNG so results are reproducible.
    ///
    /// Ignored by the other strategies.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-centroid k-means seeding retry budget.
    #[inline]
    pub fn max_seed_attempts(mut self, attempts: usize) -> Self {
        self.max_seed_attempts = attempts;
        self
    }

    /// The configured strategy.
    #[inline]
    pub fn strategy(&self) -> PaletteStrategy {
        self.strategy
    }

    /// The requested color count.
    #[inline]
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Build the palette for `image` without rendering it.
    ///
    /// # Errors
    ///
    /// Whatever the selected palette builder reports; see
    /// [`palette::uniform`], [`palette::popularity`] and [`palette::kmeans`].
    pub fn build_palette(&self, image: &PixelBuffer) -> Result<Palette, ReduceError> {
        if self.color_count == 0 {
            return Err(ReduceError::invalid("color count must be positive"));
        }
        match self.strategy {
            PaletteStrategy::Uniform { .. } => palette::uniform(self.color_count),
            PaletteStrategy::Popularity => palette::popularity(image, self.color_count),
            PaletteStrategy::KMeans { epsilon } => {
                let options = KMeansOptions {
                    epsilon,
                    seed: self.seed,
                    max_seed_attempts: self.max_seed_attempts,
                };
                palette::kmeans(image, self.color_count, &options)
            }
        }
    }

    /// Rewrite `image` in place, committing each finished pixel to `sink`.
    ///
    /// Returns the palette used.
    ///
    /// # Errors
    ///
    /// Palette construction errors only. They are raised before the first
    /// pixel is written.
    pub fn reduce_in_place(
        &self,
        image: &mut PixelBuffer,
        sink: &mut dyn PixelSink,
    ) -> Result<Palette, ReduceError> {
        let palette = self.build_palette(image)?;
        tracing::debug!(
            strategy = self.strategy.name(),
            requested = self.color_count,
            colors = palette.len(),
            "Palette ready"
        );

        match self.strategy {
            PaletteStrategy::Uniform { kernel } => {
                ErrorDiffusion::new(kernel).dither(image, &palette, sink)
            }
            PaletteStrategy::Popularity | PaletteStrategy::KMeans { .. } => {
                DirectQuantize.dither(image, &palette, sink)
            }
        }
        Ok(palette)
    }

    /// Render a copy of `image`, leaving the input untouched.
    ///
    /// # Errors
    ///
    /// Palette construction errors; see [`build_palette()`](Self::build_palette).
    pub fn reduce(&self, image: &PixelBuffer) -> Result<ReducedImage, ReduceError> {
        let mut output = image.clone();
        let palette = self.reduce_in_place(&mut output, &mut NullSink)?;
        ReducedImage::new(output, palette)
    }
}
