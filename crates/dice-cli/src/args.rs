//! CLI argument definitions using clap
//!
//! - dice stats                       # Triple statistics
//! - dice tasks                       # Task splits and sample counts
//! - dice filter --source usda        # Matching triples as TSV
//! - dice eval entity_matching -p preds.txt

use clap::{Parser, Subcommand};
use dice_core::SplitName;
use dice_eval::MetricKind;
use std::path::PathBuf;

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dice.toml";

#[derive(Parser, Debug)]
#[command(name = "dice")]
#[command(about = "DICE knowledge-graph datasets: statistics, triple filtering and task evaluation")]
#[command(version)]
pub struct Cli {
    /// Dataset root directory (holds data/triples.txt and task directories)
    #[arg(long, short = 'd', env = "DICE_DATASET_DIR", global = true)]
    pub dataset_dir: Option<PathBuf>,

    /// Path to configuration file (JSON, TOML or YAML)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the triples and show graph statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every task and show per-split sample counts
    Tasks,

    /// Print triples matching any of the given field values
    Filter {
        /// Head entity to include (repeatable)
        #[arg(long = "head", value_name = "ID")]
        heads: Vec<String>,

        /// Arc to include (repeatable)
        #[arg(long = "arc", value_name = "ARC")]
        arcs: Vec<String>,

        /// Tail to include (repeatable)
        #[arg(long = "tail", value_name = "TAIL")]
        tails: Vec<String>,

        /// Tail type to include: entity or value (repeatable)
        #[arg(long = "tail-type", value_name = "TYPE")]
        tail_types: Vec<String>,

        /// Source to include (repeatable)
        #[arg(long = "source", value_name = "SOURCE")]
        sources: Vec<String>,

        /// Write triples to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Evaluate a predictions file against a task split
    Eval {
        /// Task name (directory under the dataset root)
        task: String,

        /// Predictions file, in the task's split-file format
        #[arg(long, short)]
        predictions: PathBuf,

        /// Splits to evaluate (repeatable)
        #[arg(long = "split", default_value = "test")]
        splits: Vec<SplitName>,

        /// Metric (entity_matching, arc_matching, multi_label, regression, multi_class)
        #[arg(long)]
        metric: Option<MetricKind>,

        /// Report format (table, json, markdown)
        #[arg(long, short, default_value = "table")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
