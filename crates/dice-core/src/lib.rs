//! Core types for DICE knowledge-graph datasets.
//!
//! This crate provides:
//!
//! - [`Triple`] - a `(head, arc, tail, tail_type, source)` fact
//! - [`KnowledgeGraph`] - triples of a dataset directory plus its task splits
//! - [`TripleFilter`] - OR-combined field filters over triples
//! - [`Task`] / [`TaskSplit`] - train/valid/test splits of downstream tasks
//!
//! # Example
//!
//! ```rust,ignore
//! use dice_core::{KnowledgeGraph, TripleFilter};
//!
//! let mut kg = KnowledgeGraph::open("data/food")?;
//! kg.load_tasks()?;
//!
//! let usda = kg.filter_triples(&TripleFilter::new().with_sources(["usda"]));
//! println!("{} USDA triples", usda.len());
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod task;
pub mod triple;

pub use config::{DatasetConfig, DiceConfig, LoggingConfig, load_from_file};
pub use error::{DiceError, DiceResult};
pub use filter::{TripleFilter, filter_triples};
pub use graph::{KnowledgeGraph, KnowledgeGraphStats, discover_tasks, read_task, read_triples};
pub use task::{
    CATEGORY_PREDICTION_TASK, Labels, SplitFormat, SplitName, Task, TaskSplit, read_split_file,
};
pub use triple::{ParseTripleError, TailType, Triple};
