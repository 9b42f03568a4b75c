//! Error types for configuration loading and file-level reduction.

use std::path::PathBuf;

use palette_quant::ReduceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing required field `{field}` for palette strategy {strategy}")]
    MissingField {
        field: &'static str,
        strategy: &'static str,
    },

    #[error("Field `{field}` is not allowed for palette strategy {strategy}")]
    UnexpectedField {
        field: &'static str,
        strategy: &'static str,
    },

    #[error("Invalid value for `{field}`: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Raw buffer {} has {actual} bytes, expected {expected} for {width}x{height} RGBA",
        path.display()
    )]
    RawSize {
        path: PathBuf,
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Reduce error: {0}")]
    Reduce(#[from] ReduceError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ConfigError::MissingField {
            field: "kernel",
            strategy: "uniform",
        };
        assert_eq!(
            err.to_string(),
            "Missing required field `kernel` for palette strategy uniform"
        );
    }

    #[test]
    fn test_reduce_error_wraps() {
        let err: AppError = ReduceError::EmptyPalette.into();
        assert!(matches!(err, AppError::Reduce(ReduceError::EmptyPalette)));
        assert_eq!(err.to_string(), "Reduce error: palette cannot be empty");
    }

    #[test]
    fn test_raw_size_message() {
        let err = AppError::RawSize {
            path: PathBuf::from("in.rgba"),
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Raw buffer in.rgba has 12 bytes, expected 16 for 2x2 RGBA"
        );
    }
}
