//! Configuration for dataset loading and logging
//!
//! Configuration files may be JSON, TOML or YAML; the format is chosen by
//! file extension. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DiceError, DiceResult};
use crate::task::{CATEGORY_PREDICTION_TASK, SplitFormat};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Dataset location and layout
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where a dataset lives and how its directory is laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Root directory of the dataset
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: PathBuf,

    /// Reserved subdirectory holding the triples file
    #[serde(default = "default_data_dir_name")]
    pub data_dir_name: String,

    /// Triples file name inside the data subdirectory
    #[serde(default = "default_triples_file")]
    pub triples_file: String,

    /// Tasks whose split files carry several labels per line
    #[serde(default = "default_multi_label_tasks")]
    pub multi_label_tasks: Vec<String>,
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_data_dir_name() -> String {
    "data".to_string()
}

fn default_triples_file() -> String {
    "triples.txt".to_string()
}

fn default_multi_label_tasks() -> Vec<String> {
    vec![CATEGORY_PREDICTION_TASK.to_string()]
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            data_dir_name: default_data_dir_name(),
            triples_file: default_triples_file(),
            multi_label_tasks: default_multi_label_tasks(),
        }
    }
}

impl DatasetConfig {
    /// Create a config for the given dataset directory
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            ..Default::default()
        }
    }

    /// Set the tasks parsed as multi-label
    pub fn with_multi_label_tasks(mut self, tasks: Vec<String>) -> Self {
        self.multi_label_tasks = tasks;
        self
    }

    /// Path of the triples file
    pub fn triples_path(&self) -> PathBuf {
        self.dataset_dir
            .join(&self.data_dir_name)
            .join(&self.triples_file)
    }

    /// Path of a task directory
    pub fn task_dir(&self, task: &str) -> PathBuf {
        self.dataset_dir.join(task)
    }

    /// Split-file format of a task
    pub fn split_format(&self, task: &str) -> SplitFormat {
        if self.multi_label_tasks.iter().any(|t| t == task) {
            SplitFormat::MultiLabel
        } else {
            SplitFormat::SingleLabel
        }
    }

    /// Expand `~` and environment variables in the dataset directory
    pub fn expand_dataset_dir(&mut self) -> DiceResult<()> {
        let raw = self.dataset_dir.to_string_lossy().into_owned();
        let expanded = shellexpand::full(&raw).map_err(|e| {
            DiceError::config(format!("Failed to expand dataset_dir '{}': {}", raw, e))
        })?;
        self.dataset_dir = PathBuf::from(expanded.as_ref());
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> DiceResult<DiceConfig> {
    if !path.exists() {
        return Ok(DiceConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| DiceError::from_io(path, e))?;

    let mut config: DiceConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            DiceError::config(format!(
                "Failed to parse TOML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            DiceError::config(format!(
                "Failed to parse YAML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            DiceError::config(format!(
                "Failed to parse JSON config '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    config.dataset.expand_dataset_dir()?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
