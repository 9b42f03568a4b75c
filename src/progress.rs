//! Progress reporting for the dither pass.

use palette_quant::{PixelSink, Rgba};

/// Logs each finished row at `trace` level while the engine scans.
#[derive(Debug)]
pub struct RowProgress {
    width: usize,
    height: usize,
    in_row: usize,
    rows_done: usize,
}

impl RowProgress {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            in_row: 0,
            rows_done: 0,
        }
    }

    pub fn rows_done(&self) -> usize {
        self.rows_done
    }
}

impl PixelSink for RowProgress {
    fn commit(&mut self, _x: usize, y: usize, _color: Rgba) {
        self.in_row += 1;
        if self.in_row == self.width {
            self.in_row = 0;
            self.rows_done += 1;
            tracing::trace!(row = y, done = self.rows_done, total = self.height, "Row committed");
        }
    }
}
