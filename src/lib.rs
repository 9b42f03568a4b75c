//! color-reduce
//!
//! Raw RGBA file front end for the `palette-quant` engine.
//! This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod raw;
