//! K-means clustering palette.
//!
//! Centroids are seeded from random, mutually distinct pixels and then
//! refined for a fixed number of assign/average iterations. There is no
//! convergence test: the loop always runs the requested iteration count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::api::ReduceError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;

use super::matcher::nearest_index;
use super::Palette;

/// A seed candidate is rejected when its squared RGB distance to any
/// already chosen centroid is at most this value.
pub const MIN_SEED_DISTANCE_SQ: u32 = 50;

/// Default number of samples drawn per centroid before seeding gives up.
pub const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;

/// Configuration for [`kmeans`].
///
/// # Example
///
/// ```
/// use palette_quant::palette::KMeansOptions;
///
/// let options = KMeansOptions::new(10).seed(7);
/// assert_eq!(options.epsilon, 10);
/// assert_eq!(options.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansOptions {
    /// Number of assign/average iterations to run.
    pub epsilon: usize,

    /// Seed for centroid sampling. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Samples drawn per centroid before seeding fails.
    ///
    /// Default: [`DEFAULT_MAX_SEED_ATTEMPTS`]
    pub max_seed_attempts: usize,
}

impl KMeansOptions {
    /// Options running `epsilon` iterations with entropy seeding.
    pub fn new(epsilon: usize) -> Self {
        Self {
            epsilon,
            seed: None,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }

    /// Use a fixed seed so the palette is reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-centroid seeding retry budget.
    #[inline]
    pub fn max_seed_attempts(mut self, attempts: usize) -> Self {
        self.max_seed_attempts = attempts;
        self
    }
}

/// Build an `n`-color palette by k-means clustering.
///
/// 1. [`seed_centroids`] picks `n` mutually distinct pixels.
/// 2. [`kmeans_step`] runs exactly `options.epsilon` times.
///
/// The result always holds exactly `n` entries, all opaque.
///
/// # Errors
///
/// - [`ReduceError::InvalidArgument`] if `n`, `options.epsilon` or
///   `options.max_seed_attempts` is zero.
/// - [`ReduceError::PaletteSeedingFailed`] if the image does not contain `n`
///   sufficiently distinct colors within the retry budget.
pub fn kmeans(
    buffer: &PixelBuffer,
    n: usize,
    options: &KMeansOptions,
) -> Result<Palette, ReduceError> {
    if n == 0 {
        return Err(ReduceError::invalid("color count must be positive"));
    }
    if options.epsilon == 0 {
        return Err(ReduceError::invalid("epsilon (iteration count) must be positive"));
    }
    if options.max_seed_attempts == 0 {
        return Err(ReduceError::invalid("seeding attempt budget must be positive"));
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut centroids = seed_centroids(buffer, n, options.max_seed_attempts, &mut rng)?;
    for iteration in 0..options.epsilon {
        centroids = kmeans_step(buffer, &centroids)?;
        tracing::trace!(iteration, "K-means iteration complete");
    }

    tracing::debug!(
        colors = centroids.len(),
        epsilon = options.epsilon,
        "Built k-means palette"
    );
    Palette::new(centroids)
}

/// Choose `n` starting centroids from random pixel positions.
///
/// A sampled pixel is accepted only if its squared RGB distance to every
/// centroid chosen so far exceeds [`MIN_SEED_DISTANCE_SQ`]. Each centroid
/// gets at most `max_attempts` samples.
///
/// # Errors
///
/// [`ReduceError::PaletteSeedingFailed`] once a centroid exhausts its
/// attempts.
pub fn seed_centroids<R: Rng>(
    buffer: &PixelBuffer,
    n: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Rgba>, ReduceError> {
    let mut centroids: Vec<Rgba> = Vec::with_capacity(n);

    while centroids.len() < n {
        let mut attempts = 0;
        let accepted = loop {
            if attempts == max_attempts {
                tracing::warn!(
                    requested = n,
                    found = centroids.len(),
                    attempts,
                    "K-means seeding gave up"
                );
                return Err(ReduceError::PaletteSeedingFailed {
                    requested: n,
                    found: centroids.len(),
                    attempts,
                });
            }
            attempts += 1;

            let x = rng.gen_range(0..buffer.width());
            let y = rng.gen_range(0..buffer.height());
            let candidate = buffer.get(x, y);
            if centroids
                .iter()
                .all(|&chosen| chosen.distance_squared(candidate) > MIN_SEED_DISTANCE_SQ)
            {
                break candidate;
            }
        };
        centroids.push(accepted);
    }

    Ok(centroids)
}

/// Run one assign/average iteration.
///
/// Every pixel joins the cluster of its nearest centroid; each centroid then
/// becomes the truncated per-channel mean of its members with alpha 255. A
/// centroid without members keeps its color (made opaque). Clusters are
/// keyed by centroid index, so the output always has `centroids.len()`
/// entries even when two centroids coincide.
///
/// Assignment runs in parallel per row with per-worker accumulators merged
/// at the end.
///
/// # Errors
///
/// [`ReduceError::EmptyPalette`] if `centroids` is empty.
pub fn kmeans_step(buffer: &PixelBuffer, centroids: &[Rgba]) -> Result<Vec<Rgba>, ReduceError> {
    if centroids.is_empty() {
        return Err(ReduceError::EmptyPalette);
    }

    let k = centroids.len();
    let clusters = buffer
        .pixels()
        .par_chunks(buffer.width())
        .fold(
            || ClusterSums::new(k),
            |mut local, row| {
                for &px in row {
                    local.add(nearest_index(centroids, px), px);
                }
                local
            },
        )
        .reduce(|| ClusterSums::new(k), ClusterSums::merge);

    Ok(centroids
        .iter()
        .enumerate()
        .map(|(idx, &previous)| clusters.centroid(idx).unwrap_or(Rgba { a: 255, ..previous }))
        .collect())
}

/// Running channel sums and member counts per centroid.
struct ClusterSums {
    sums: Vec<[u64; 3]>,
    counts: Vec<u64>,
}

impl ClusterSums {
    fn new(k: usize) -> Self {
        Self {
            sums: vec![[0; 3]; k],
            counts: vec![0; k],
        }
    }

    #[inline]
    fn add(&mut self, idx: usize, px: Rgba) {
        let sum = &mut self.sums[idx];
        sum[0] += u64::from(px.r);
        sum[1] += u64::from(px.g);
        sum[2] += u64::from(px.b);
        self.counts[idx] += 1;
    }

    fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.sums.iter_mut().zip(&other.sums) {
            for c in 0..3 {
                mine[c] += theirs[c];
            }
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
        self
    }

    /// Truncated mean of the members, or `None` for an empty cluster.
    fn centroid(&self, idx: usize) -> Option<Rgba> {
        let count = self.counts[idx];
        if count == 0 {
            return None;
        }
        let [r, g, b] = self.sums[idx];
        Some(Rgba::opaque(
            (r / count) as u8,
            (g / count) as u8,
            (b / count) as u8,
        ))
    }
}
