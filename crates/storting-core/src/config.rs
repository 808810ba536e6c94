use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Result, StortingError};

/// Path to a JSON config file
pub const CONFIG_ENV: &str = "STORTING_CONFIG";
/// Overrides `dataset.path`
pub const DATASET_ENV: &str = "STORTING_DATASET";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StortingConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the config was read from; `None` for defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl StortingConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: StortingConfig = serde_json::from_str(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Defaults, then the file named by `STORTING_CONFIG`, then `STORTING_DATASET`.
    ///
    /// Sections are not validated here; each binary checks the ones it uses.
    /// Runs before logging is set up, so callers log `source` afterwards.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(path) = std::env::var_os(DATASET_ENV) {
            config.dataset.path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON dataset file; the bundled sample is used when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn load(&self) -> Result<Dataset> {
        match &self.path {
            Some(path) => Dataset::load(path),
            None => Dataset::sample(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width < self.min_width || self.height < self.min_height {
            return Err(StortingError::Config(format!(
                "window size {}x{} is below the minimum {}x{}",
                self.width, self.height, self.min_width, self.min_height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
    /// Directory for `storting.log`; the system temp dir when absent
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "storting_core=info,storting_gui=info".to_string(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(std::env::temp_dir)
    }
}
