//! DICE task evaluation
//!
//! This crate scores model predictions on the downstream tasks shipped with
//! DICE knowledge-graph datasets.
//!
//! # Features
//!
//! - **Metric Evaluators**: precision/recall/F1 for entity and arc matching,
//!   micro-averaged multi-label scores, mean squared error, and accuracy
//! - **Prediction Files**: predictions read in the split-file line format
//! - **Task Evaluator**: picks the metric for a task and lines predictions up
//!   with a split
//! - **Report Generation**: JSON, Markdown, and terminal table output
//!
//! # Example
//!
//! ```rust,ignore
//! use dice_core::{KnowledgeGraph, SplitName};
//! use dice_eval::{Predictions, TaskEvaluator, report::{generate_report, ReportFormat}};
//!
//! let mut kg = KnowledgeGraph::open("data/food")?;
//! let task = kg.load_task("entity_matching")?;
//! let predictions = Predictions::load("preds.txt".as_ref(), task.format)?;
//! let report = TaskEvaluator::new().evaluate(task, SplitName::Test, None, &predictions)?;
//! println!("{}", generate_report(&[report], ReportFormat::Table)?);
//! ```

pub mod evaluator;
pub mod metrics;
pub mod predictions;
pub mod report;

// Re-exports for convenience
pub use evaluator::{EvalReport, MetricKind, TaskEvaluator};
pub use metrics::{
    ConfusionCounts, MetricScores, MultiLabelBinarizer, PrecisionRecallF1, evaluate_arc_matching,
    evaluate_entity_matching, evaluate_multi_classification, evaluate_multilabel_classification,
    evaluate_regression,
};
pub use predictions::Predictions;
