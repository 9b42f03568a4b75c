//! Tightly packed 8-bit RGBA files (`width * height * 4` bytes, no header).

use std::path::Path;

use palette_quant::PixelBuffer;

use crate::error::AppError;

pub fn read_rgba(path: &Path, width: usize, height: usize) -> Result<PixelBuffer, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError::io(path, e))?;
    let expected = width.saturating_mul(height).saturating_mul(4);
    if bytes.len() != expected {
        return Err(AppError::RawSize {
            path: path.to_path_buf(),
            width,
            height,
            expected,
            actual: bytes.len(),
        });
    }
    tracing::debug!(path = %path.display(), width, height, "Read raw RGBA buffer");
    Ok(PixelBuffer::from_rgba_bytes(width, height, &bytes)?)
}

pub fn write_rgba(path: &Path, buffer: &PixelBuffer) -> Result<(), AppError> {
    std::fs::write(path, buffer.to_rgba_bytes()).map_err(|e| AppError::io(path, e))?;
    tracing::debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Wrote raw RGBA buffer"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_quant::{ReduceError, Rgba};

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.rgba");
        let buffer = PixelBuffer::new(
            2,
            1,
            vec![Rgba::new(1, 2, 3, 4), Rgba::opaque(250, 0, 9)],
        )
        .unwrap();

        write_rgba(&path, &buffer).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4, 250, 0, 9, 255]);
        assert_eq!(read_rgba(&path, 2, 1).unwrap(), buffer);
    }

    #[test]
    fn test_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.rgba");
        std::fs::write(&path, [0u8; 12]).unwrap();

        let err = read_rgba(&path, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            AppError::RawSize {
                expected: 16,
                actual: 12,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.rgba");
        std::fs::write(&path, b"").unwrap();

        let err = read_rgba(&path, 0, 5).unwrap_err();
        assert!(matches!(err, AppError::Reduce(ReduceError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_rgba(Path::new("/nonexistent/in.rgba"), 1, 1).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/in.rgba"));
    }
}
