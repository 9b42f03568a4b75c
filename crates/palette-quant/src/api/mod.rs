//! Public API for the palette-quant crate.
//!
//! This module provides the high-level API: [`ColorReducer`] builder and
//! [`ReduceError`] unified error type.

mod builder;
mod error;

pub use builder::ColorReducer;
pub use error::ReduceError;
