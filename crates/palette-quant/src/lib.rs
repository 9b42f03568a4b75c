//! palette-quant: palette reduction and dithering for RGBA buffers
//!
//! This library reduces a true-color image to a small palette and renders
//! it back, either with error diffusion dithering or with direct
//! nearest-color quantization.
//!
//! # Quick Start
//!
//! The [`ColorReducer`] builder is the primary entry point:
//!
//! ```
//! use palette_quant::{ColorReducer, KernelName, PaletteStrategy, PixelBuffer, Rgba};
//!
//! let image = PixelBuffer::filled(8, 8, Rgba::opaque(90, 160, 40)).unwrap();
//!
//! // 3 levels per channel -> a 27-color cube, dithered with Floyd-Steinberg
//! let reducer = ColorReducer::new(
//!     PaletteStrategy::Uniform { kernel: KernelName::FloydSteinberg },
//!     3,
//! );
//! let reduced = reducer.reduce(&image).unwrap();
//!
//! assert_eq!(reduced.palette().len(), 27);
//! assert_eq!(reduced.width(), 8);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer ──> palette builder ──> Palette
//!      │           (uniform | popularity | kmeans)
//!      │                                   │
//!      └──────────> dither engine <────────┘
//!                  (error diffusion | direct)
//!                         │
//!                         v
//!              PixelBuffer of palette colors
//! ```
//!
//! # Palette Strategies
//!
//! - **Uniform**: an evenly spaced RGB cube with `n^3` entries, rendered
//!   with error diffusion through a [`Kernel`]
//! - **Popularity**: the `n` most frequent image colors, direct quantization
//! - **K-means**: `n` centroids refined for a fixed number of iterations,
//!   direct quantization
//!
//! # Diffusion Kernels
//!
//! Three kernels are registered under [`KernelName`]: Floyd-Steinberg,
//! Burke and Stucki. The engine scans rows bottom to top, so kernels push
//! error right along the row and up into the rows still to come.
//!
//! # Concurrency
//!
//! Popularity counting and k-means assignment fan out over rows with rayon
//! and merge per-worker results. Error diffusion depends on every previously
//! visited pixel and always runs sequentially on the calling thread.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{ColorReducer, ReduceError};
pub use buffer::PixelBuffer;
pub use color::Rgba;
pub use dither::{kernel_by_name, Kernel, KernelName, NullSink, PixelSink};
pub use output::ReducedImage;
pub use palette::{Palette, PaletteStrategy};
