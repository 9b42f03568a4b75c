//! Common test infrastructure for color-reduce integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use color_reduce::pipeline::RawInput;
use palette_quant::{PixelBuffer, Rgba};
use tempfile::TempDir;

/// Scratch directory holding a raw input image.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl Workspace {
    pub fn with_image(buffer: &PixelBuffer) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("input.rgba");
        std::fs::write(&input, buffer.to_rgba_bytes()).expect("Failed to write input");
        Self {
            width: buffer.width(),
            height: buffer.height(),
            dir,
            input,
        }
    }

    pub fn raw(&self) -> RawInput<'_> {
        RawInput {
            path: &self.input,
            width: self.width,
            height: self.height,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    pub fn read_output(&self, path: &Path) -> PixelBuffer {
        color_reduce::raw::read_rgba(path, self.width, self.height)
            .expect("Output should be a raw buffer of the input size")
    }
}

/// Distinct colors in a buffer.
pub fn distinct_colors(buffer: &PixelBuffer) -> HashSet<Rgba> {
    buffer.pixels().iter().copied().collect()
}
