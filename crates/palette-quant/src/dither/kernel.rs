//! Error diffusion kernel definitions.
//!
//! Each kernel lists the neighbors that receive part of a pixel's
//! quantization error. Pixels are scanned bottom row first, left to right,
//! so the kernels point right along the current row (`dy == 0, dx > 0`) and
//! up into the rows still to be processed (`dy < 0`).

use std::fmt;
use std::str::FromStr;

use crate::api::ReduceError;

/// An error diffusion kernel.
///
/// # Error Propagation
///
/// Neighbor `(dx, dy)` receives `error * weight / divisor`. All registered
/// kernels propagate 100% of the error (weights sum to the divisor); pixels
/// near the border lose the share whose target falls outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Registry name.
    pub name: &'static str,

    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (`<= 0`, toward rows not yet scanned)
    /// - `weight`: numerator over [`divisor`](Self::divisor)
    pub entries: &'static [(i32, i32, u8)],

    /// Shared denominator for all weights.
    pub divisor: u8,
}

impl Kernel {
    /// Taps as `(dx, dy, weight)` with the weight already normalized.
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let divisor = f64::from(self.divisor);
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, f64::from(w) / divisor))
    }

    /// Sum of all normalized weights (1.0 for full propagation).
    pub fn total_weight(&self) -> f64 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        f64::from(sum) / f64::from(self.divisor)
    }

    /// Whether every tap targets a pixel later in the scan order.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dx, dy, _)| dy < 0 || (dy == 0 && dx > 0))
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///    .   .   .
///    3   5   1
///        X   7
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "floyd_steinberg",
    entries: &[
        (1, 0, 7),   // right
        (-1, -1, 3), // next row, left
        (0, -1, 5),  // next row
        (1, -1, 1),  // next row, right
    ],
    divisor: 16,
};

/// Burke dithering kernel.
///
/// ```text
///    2   4   8   4   2
///            X   8   4
/// ```
pub const BURKE: Kernel = Kernel {
    name: "burke",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, -1, 2),
        (-1, -1, 4),
        (0, -1, 8),
        (1, -1, 4),
        (2, -1, 2),
    ],
    divisor: 32,
};

/// Stucki dithering kernel.
///
/// ```text
///    1   2   4   2   1
///    2   4   8   4   2
///            X   8   4
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, -1, 2),
        (-1, -1, 4),
        (0, -1, 8),
        (1, -1, 4),
        (2, -1, 2),
        (-2, -2, 1),
        (-1, -2, 2),
        (0, -2, 4),
        (1, -2, 2),
        (2, -2, 1),
    ],
    divisor: 42,
};

/// Registry key for a diffusion kernel.
///
/// Parses from `floyd_steinberg`, `burke` and `stucki` (case-insensitive,
/// `-` accepted for `_`); the spellings `burkes` and `stucky` are accepted
/// as aliases.
///
/// # Example
///
/// ```
/// use palette_quant::KernelName;
///
/// let name: KernelName = "Floyd-Steinberg".parse().unwrap();
/// assert_eq!(name, KernelName::FloydSteinberg);
/// assert_eq!(name.kernel().divisor, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelName {
    /// 4 taps over 2 rows, divisor 16.
    #[default]
    FloydSteinberg,
    /// 7 taps over 2 rows, divisor 32.
    Burke,
    /// 12 taps over 3 rows, divisor 42.
    Stucki,
}

impl KernelName {
    /// Every registered kernel, in registry order.
    pub const ALL: [KernelName; 3] = [
        KernelName::FloydSteinberg,
        KernelName::Burke,
        KernelName::Stucki,
    ];

    /// The fixed weight table for this kernel.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            KernelName::FloydSteinberg => &FLOYD_STEINBERG,
            KernelName::Burke => &BURKE,
            KernelName::Stucki => &STUCKI,
        }
    }

    /// Canonical registry name.
    pub fn as_str(self) -> &'static str {
        self.kernel().name
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelName {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "floyd_steinberg" => Ok(KernelName::FloydSteinberg),
            "burke" | "burkes" => Ok(KernelName::Burke),
            "stucki" | "stucky" => Ok(KernelName::Stucki),
            _ => Err(ReduceError::UnknownKernel(s.to_string())),
        }
    }
}

/// Look up a kernel table by registry name.
///
/// # Errors
///
/// [`ReduceError::UnknownKernel`] for names outside the registry.
pub fn kernel_by_name(name: &str) -> Result<&'static Kernel, ReduceError> {
    name.parse::<KernelName>().map(KernelName::kernel)
}
