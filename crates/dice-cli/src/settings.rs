//! Configuration file discovery and command-line overrides

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dice_core::{DiceConfig, load_from_file};

use crate::args::{Cli, DEFAULT_CONFIG_FILE};

/// Candidate configuration files, most specific first
///
/// An explicit `--config-file` is the only candidate when given. Otherwise
/// `dice.toml` in the working directory, then `<config dir>/dice/config.toml`.
fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("dice").join("config.toml"));
    }
    paths
}

/// Load the configuration and apply `--dataset-dir` / `DICE_DATASET_DIR`
pub fn resolve(cli: &Cli) -> Result<DiceConfig> {
    let explicit = cli.config_file.as_deref();
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
    }

    let mut config = DiceConfig::default();
    for path in candidates(explicit) {
        if path.exists() {
            config = load_from_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            break;
        }
    }

    apply_overrides(&mut config, cli.dataset_dir.as_deref())?;
    Ok(config)
}

fn apply_overrides(config: &mut DiceConfig, dataset_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = dataset_dir {
        config.dataset.dataset_dir = dir.to_path_buf();
        config.dataset.expand_dataset_dir()?;
    }
    Ok(())
}
