//! DICE command-line interface
//!
//! Inspect DICE knowledge-graph datasets and score predictions on their
//! downstream tasks.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/dice-cli
//! ```
//!
//! # Commands
//!
//! - `dice stats` loads `data/triples.txt` and prints graph statistics
//! - `dice tasks` loads every task directory and prints per-split counts
//! - `dice filter` prints the triples matching any of the given field values
//! - `dice eval <task> -p <predictions>` scores a predictions file
//!
//! The dataset root comes from `--dataset-dir`, `DICE_DATASET_DIR`, or the
//! `dataset.dataset_dir` key of the configuration file, in that order.

mod args;
mod commands;
mod console;
mod logging;
mod router;
mod settings;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = settings::resolve(&cli)?;
    logging::init(&config.logging, cli.verbose);
    tracing::debug!("Dataset directory: {}", config.dataset.dataset_dir.display());

    router::route(cli, config).await
}
