//! Reduction settings: YAML config file plus command-line overrides.

use std::path::Path;

use palette_quant::{ColorReducer, KernelName, PaletteStrategy};
use serde::Deserialize;

use crate::error::ConfigError;

/// Palette strategy as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Uniform,
    Popularity,
    #[serde(alias = "k-means")]
    #[value(alias = "k-means")]
    Kmeans,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Uniform,
        StrategyKind::Popularity,
        StrategyKind::Kmeans,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Uniform => "uniform",
            StrategyKind::Popularity => "popularity",
            StrategyKind::Kmeans => "kmeans",
        }
    }
}

/// Reduction settings loaded from YAML.
///
/// `kernel` must be present exactly when the strategy is `uniform`, and
/// `epsilon` exactly when it is `kmeans`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReduceConfig {
    pub palette_strategy: StrategyKind,

    /// Colors per channel for `uniform`, palette size otherwise
    #[serde(default = "default_color_count")]
    pub color_count: usize,

    #[serde(default)]
    pub kernel: Option<String>,

    /// K-means iteration count
    #[serde(default)]
    pub epsilon: Option<usize>,

    /// Fixed k-means seeding (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub max_seed_attempts: Option<usize>,
}

pub const DEFAULT_COLOR_COUNT: usize = 12;
pub const DEFAULT_EPSILON: usize = 10;

fn default_color_count() -> usize {
    DEFAULT_COLOR_COUNT
}

/// Command-line values that replace whatever the config file says.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub strategy: Option<StrategyKind>,
    pub colors: Option<usize>,
    pub kernel: Option<String>,
    pub epsilon: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self::for_strategy(StrategyKind::Uniform)
    }
}

impl ReduceConfig {
    /// Defaults for `kind`, with the strategy-specific field filled in.
    pub fn for_strategy(kind: StrategyKind) -> Self {
        Self {
            palette_strategy: kind,
            color_count: DEFAULT_COLOR_COUNT,
            kernel: (kind == StrategyKind::Uniform)
                .then(|| KernelName::default().as_str().to_string()),
            epsilon: (kind == StrategyKind::Kmeans).then_some(DEFAULT_EPSILON),
            seed: None,
            max_seed_attempts: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            strategy = config.palette_strategy.as_str(),
            colors = config.color_count,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Switch to another strategy, keeping the shared settings.
    ///
    /// A kernel or epsilon that the new strategy does not accept is dropped,
    /// and a missing one is filled with its default.
    pub fn with_strategy(&self, kind: StrategyKind) -> Self {
        if kind == self.palette_strategy {
            return self.clone();
        }
        let defaults = Self::for_strategy(kind);
        Self {
            palette_strategy: kind,
            kernel: defaults.kernel,
            epsilon: defaults.epsilon,
            ..self.clone()
        }
    }

    pub fn apply_overrides(self, overrides: &Overrides) -> Self {
        let mut config = match overrides.strategy {
            Some(kind) => self.with_strategy(kind),
            None => self,
        };
        if let Some(colors) = overrides.colors {
            config.color_count = colors;
        }
        if let Some(kernel) = &overrides.kernel {
            config.kernel = Some(kernel.clone());
        }
        if let Some(epsilon) = overrides.epsilon {
            config.epsilon = Some(epsilon);
        }
        if let Some(seed) = overrides.seed {
            config.seed = Some(seed);
        }
        config
    }

    /// Resolve the strategy, enforcing which fields belong to which strategy.
    pub fn strategy(&self) -> Result<PaletteStrategy, ConfigError> {
        let name = self.palette_strategy.as_str();
        match self.palette_strategy {
            StrategyKind::Uniform => {
                if self.epsilon.is_some() {
                    return Err(unexpected("epsilon", name));
                }
                let kernel = self.kernel.as_deref().ok_or(ConfigError::MissingField {
                    field: "kernel",
                    strategy: name,
                })?;
                let kernel = kernel
                    .parse::<KernelName>()
                    .map_err(|e| invalid("kernel", e.to_string()))?;
                Ok(PaletteStrategy::Uniform { kernel })
            }
            StrategyKind::Popularity => {
                if self.kernel.is_some() {
                    return Err(unexpected("kernel", name));
                }
                if self.epsilon.is_some() {
                    return Err(unexpected("epsilon", name));
                }
                Ok(PaletteStrategy::Popularity)
            }
            StrategyKind::Kmeans => {
                if self.kernel.is_some() {
                    return Err(unexpected("kernel", name));
                }
                let epsilon = self.epsilon.ok_or(ConfigError::MissingField {
                    field: "epsilon",
                    strategy: name,
                })?;
                if epsilon == 0 {
                    return Err(invalid("epsilon", "must be at least 1"));
                }
                Ok(PaletteStrategy::KMeans { epsilon })
            }
        }
    }

    /// Validate everything and build the reducer.
    pub fn reducer(&self) -> Result<ColorReducer, ConfigError> {
        build_reducer(
            self.strategy()?,
            self.color_count,
            self.seed,
            self.max_seed_attempts,
        )
    }

    /// Settings for running all strategies at once.
    ///
    /// The strategy-specific rules do not apply here: a kernel and an
    /// epsilon may both be set, and each one missing falls back to its
    /// default.
    pub fn compare_settings(&self) -> Result<CompareSettings, ConfigError> {
        let kernel = match self.kernel.as_deref() {
            Some(name) => name
                .parse::<KernelName>()
                .map_err(|e| invalid("kernel", e.to_string()))?,
            None => KernelName::default(),
        };
        let epsilon = self.epsilon.unwrap_or(DEFAULT_EPSILON);
        if epsilon == 0 {
            return Err(invalid("epsilon", "must be at least 1"));
        }
        let settings = CompareSettings {
            color_count: self.color_count,
            kernel,
            epsilon,
            seed: self.seed,
            max_seed_attempts: self.max_seed_attempts,
        };
        for kind in StrategyKind::ALL {
            settings.reducer(kind)?;
        }
        Ok(settings)
    }
}

/// Shared settings for a run over every palette strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSettings {
    pub color_count: usize,
    /// Kernel for the uniform run
    pub kernel: KernelName,
    /// Iterations for the k-means run
    pub epsilon: usize,
    pub seed: Option<u64>,
    pub max_seed_attempts: Option<usize>,
}

impl CompareSettings {
    pub fn strategy(&self, kind: StrategyKind) -> PaletteStrategy {
        match kind {
            StrategyKind::Uniform => PaletteStrategy::Uniform {
                kernel: self.kernel,
            },
            StrategyKind::Popularity => PaletteStrategy::Popularity,
            StrategyKind::Kmeans => PaletteStrategy::KMeans {
                epsilon: self.epsilon,
            },
        }
    }

    pub fn reducer(&self, kind: StrategyKind) -> Result<ColorReducer, ConfigError> {
        build_reducer(
            self.strategy(kind),
            self.color_count,
            self.seed,
            self.max_seed_attempts,
        )
    }
}

fn build_reducer(
    strategy: PaletteStrategy,
    color_count: usize,
    seed: Option<u64>,
    max_seed_attempts: Option<usize>,
) -> Result<ColorReducer, ConfigError> {
    if color_count == 0 {
        return Err(invalid("colorCount", "must be at least 1"));
    }
    let mut reducer = ColorReducer::new(strategy, color_count);
    if let Some(seed) = seed {
        reducer = reducer.seed(seed);
    }
    if let Some(attempts) = max_seed_attempts {
        if attempts == 0 {
            return Err(invalid("maxSeedAttempts", "must be at least 1"));
        }
        reducer = reducer.max_seed_attempts(attempts);
    }
    Ok(reducer)
}

fn unexpected(field: &'static str, strategy: &'static str) -> ConfigError {
    ConfigError::UnexpectedField { field, strategy }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        message: message.into(),
    }
}
