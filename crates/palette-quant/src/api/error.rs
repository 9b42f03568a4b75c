//! Unified error type for the palette-quant public API.
//!
//! [`ReduceError`] covers every failure the engine can report. All of them
//! are raised before a [`PixelBuffer`](crate::PixelBuffer) is mutated, so a
//! failed call never leaves a half-dithered buffer behind.

use thiserror::Error;

/// Unified error type for the palette-quant public API.
///
/// # Example
///
/// ```
/// use palette_quant::{palette, ReduceError};
///
/// let err = palette::uniform(1).unwrap_err();
/// assert!(matches!(err, ReduceError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// A color count, iteration count or image dimension is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A diffusion kernel name is not in the registry.
    #[error("unknown diffusion kernel: {0}")]
    UnknownKernel(String),

    /// Nearest-color lookup against a palette with no entries.
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// K-means seeding could not find enough mutually distinct colors.
    #[error(
        "could not seed {requested} distinct centroids: found {found} before giving up after {attempts} attempts"
    )]
    PaletteSeedingFailed {
        /// Number of centroids requested
        requested: usize,
        /// Number of centroids chosen before the retry budget ran out
        found: usize,
        /// Samples drawn for the centroid that could not be placed
        attempts: usize,
    },
}

impl ReduceError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ReduceError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = ReduceError::invalid("color count must be positive");
        assert_eq!(
            error.to_string(),
            "invalid argument: color count must be positive"
        );
    }

    #[test]
    fn test_unknown_kernel_display() {
        let error = ReduceError::UnknownKernel("atkinson".to_string());
        assert_eq!(error.to_string(), "unknown diffusion kernel: atkinson");
    }

    #[test]
    fn test_empty_palette_display() {
        assert_eq!(ReduceError::EmptyPalette.to_string(), "palette cannot be empty");
    }

    #[test]
    fn test_seeding_failed_display() {
        let error = ReduceError::PaletteSeedingFailed {
            requested: 8,
            found: 2,
            attempts: 100,
        };
        assert_eq!(
            error.to_string(),
            "could not seed 8 distinct centroids: found 2 before giving up after 100 attempts"
        );
    }
}
