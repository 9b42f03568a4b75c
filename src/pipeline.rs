//! File-level reduce, compare and palette operations used by the CLI.

use std::path::{Path, PathBuf};

use palette_quant::{ColorReducer, Palette, PaletteStrategy, ReducedImage};

use crate::config::{CompareSettings, ReduceConfig, StrategyKind};
use crate::error::AppError;
use crate::progress::RowProgress;
use crate::raw;

/// Outcome of one reduction, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceSummary {
    pub strategy: PaletteStrategy,
    pub palette_size: usize,
    pub colors_used: usize,
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
}

/// Raw input location and its dimensions.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    pub path: &'a Path,
    pub width: usize,
    pub height: usize,
}

pub fn reduce_file(
    input: RawInput<'_>,
    output: &Path,
    config: &ReduceConfig,
) -> Result<ReduceSummary, AppError> {
    run_reducer(input, output, &config.reducer()?)
}

fn run_reducer(
    input: RawInput<'_>,
    output: &Path,
    reducer: &ColorReducer,
) -> Result<ReduceSummary, AppError> {
    let mut buffer = raw::read_rgba(input.path, input.width, input.height)?;

    let mut progress = RowProgress::new(input.width, input.height);
    let palette = reducer.reduce_in_place(&mut buffer, &mut progress)?;
    raw::write_rgba(output, &buffer)?;

    let reduced = ReducedImage::new(buffer, palette)?;
    let summary = ReduceSummary {
        strategy: reducer.strategy(),
        palette_size: reduced.palette().len(),
        colors_used: reduced.colors_used(),
        width: reduced.width(),
        height: reduced.height(),
        output: output.to_path_buf(),
    };
    tracing::info!(
        strategy = %summary.strategy,
        palette = summary.palette_size,
        used = summary.colors_used,
        output = %output.display(),
        "Reduced image"
    );
    Ok(summary)
}

/// Output path `<dir>/<stem>.<strategy>.rgba` for a compare run.
pub fn compare_output_path(input: &Path, out_dir: Option<&Path>, kind: StrategyKind) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}.{}.rgba", kind.as_str()))
}

/// Run every palette strategy over the same input.
///
/// Uniform dithers with `settings.kernel`, k-means runs
/// `settings.epsilon` iterations, and all three share the color count and
/// seed.
pub fn compare_file(
    input: RawInput<'_>,
    out_dir: Option<&Path>,
    settings: &CompareSettings,
) -> Result<Vec<ReduceSummary>, AppError> {
    StrategyKind::ALL
        .iter()
        .map(|&kind| {
            let output = compare_output_path(input.path, out_dir, kind);
            run_reducer(input, &output, &settings.reducer(kind)?)
        })
        .collect()
}

pub fn build_palette_file(input: RawInput<'_>, config: &ReduceConfig) -> Result<Palette, AppError> {
    let reducer = config.reducer()?;
    let buffer = raw::read_rgba(input.path, input.width, input.height)?;
    Ok(reducer.build_palette(&buffer)?)
}
