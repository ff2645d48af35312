//! Metric evaluators for DICE tasks
//!
//! This module provides pure scoring functions over predictions and ground
//! truth. All of them fail with `ShapeMismatch` instead of truncating when
//! their inputs disagree in length.

mod binarizer;
mod matching;
mod multilabel;
mod regression;
mod types;

pub use binarizer::MultiLabelBinarizer;
pub use matching::{NONE_LABEL, evaluate_arc_matching, evaluate_entity_matching, matching_counts};
pub use multilabel::{evaluate_multilabel_classification, multilabel_counts};
pub use regression::{evaluate_multi_classification, evaluate_regression};
pub use types::{ConfusionCounts, MetricScores, PrecisionRecallF1};
