//! Evaluation of predictions against a loaded task split
//!
//! Picks the metric for a task, lines predictions up with the split inputs
//! and wraps the scores in an [`EvalReport`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dice_core::{DiceError, DiceResult, Labels, SplitFormat, SplitName, Task, TaskSplit};

use crate::metrics::{
    MetricScores, MultiLabelBinarizer, evaluate_multi_classification, evaluate_regression,
    matching_counts, multilabel_counts,
};
use crate::predictions::Predictions;

/// Which evaluator a task is scored with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Precision/recall/F1 over entity matches
    EntityMatching,
    /// Precision/recall/F1 over arc matches
    ArcMatching,
    /// Micro precision/recall/F1 over category indicators
    MultiLabel,
    /// Mean squared error
    Regression,
    /// Accuracy
    MultiClass,
}

impl MetricKind {
    /// Get all metric kinds
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::EntityMatching,
            MetricKind::ArcMatching,
            MetricKind::MultiLabel,
            MetricKind::Regression,
            MetricKind::MultiClass,
        ]
    }

    /// Metric for the well-known task names
    pub fn for_task(task: &str) -> Option<Self> {
        match task {
            "entity_matching" => Some(MetricKind::EntityMatching),
            "arc_matching" => Some(MetricKind::ArcMatching),
            dice_core::CATEGORY_PREDICTION_TASK => Some(MetricKind::MultiLabel),
            _ => None,
        }
    }

    /// Default metric for a loaded task
    ///
    /// Well-known task names come first; any other task whose splits carry
    /// several labels per line is scored as multi-label.
    pub fn default_for(task: &Task) -> Option<Self> {
        Self::for_task(&task.name).or_else(|| match task.format {
            SplitFormat::MultiLabel => Some(MetricKind::MultiLabel),
            SplitFormat::SingleLabel => None,
        })
    }

    /// Name used on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::EntityMatching => "entity_matching",
            MetricKind::ArcMatching => "arc_matching",
            MetricKind::MultiLabel => "multi_label",
            MetricKind::Regression => "regression",
            MetricKind::MultiClass => "multi_class",
        }
    }

    /// Split-file format this metric expects
    pub fn split_format(&self) -> SplitFormat {
        match self {
            MetricKind::MultiLabel => SplitFormat::MultiLabel,
            _ => SplitFormat::SingleLabel,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        MetricKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DiceError::config(format!("unknown metric '{}'", s)))
    }
}

/// Result of evaluating one task split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Task name
    pub task: String,

    /// Evaluated split
    pub split: SplitName,

    /// Metric used
    pub metric: MetricKind,

    /// Number of evaluated samples
    pub num_samples: usize,

    /// Computed scores
    pub scores: MetricScores,

    /// When the evaluation ran
    pub timestamp: DateTime<Utc>,

    /// Toolkit version that produced the report
    pub dice_version: String,
}

/// Scores predictions against task splits
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskEvaluator;

impl TaskEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one split of a loaded task
    ///
    /// `metric` defaults to [`MetricKind::default_for`].
    pub fn evaluate(
        &self,
        task: &Task,
        split: SplitName,
        metric: Option<MetricKind>,
        predictions: &Predictions,
    ) -> DiceResult<EvalReport> {
        let metric = match metric.or_else(|| MetricKind::default_for(task)) {
            Some(metric) => metric,
            None => {
                return Err(DiceError::config(format!(
                    "no default metric for task '{}', choose one explicitly",
                    task.name
                )));
            }
        };
        let data = task
            .split(split)
            .ok_or_else(|| DiceError::config(format!("task '{}' has no {} split", task.name, split)))?;

        let scores = self.score(metric, data, predictions)?;
        tracing::info!(
            "Evaluated {} ({}) with {}: {:?}",
            task.name,
            split,
            metric,
            scores.values()
        );

        Ok(EvalReport {
            task: task.name.clone(),
            split,
            metric,
            num_samples: data.len(),
            scores,
            timestamp: Utc::now(),
            dice_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Score predictions for one split with the given metric
    pub fn score(
        &self,
        metric: MetricKind,
        split: &TaskSplit,
        predictions: &Predictions,
    ) -> DiceResult<MetricScores> {
        match (metric, split.y()) {
            (MetricKind::EntityMatching | MetricKind::ArcMatching, Labels::Single(y)) => {
                let counts = matching_counts(&predictions.single_labels()?, split.x(), y)?;
                Ok(MetricScores::PrecisionRecallF1 {
                    scores: counts.scores(),
                    counts: Some(counts),
                })
            }
            (MetricKind::MultiLabel, Labels::Multi(y)) => {
                let predicted = predictions.multi_labels_for(split.x())?;
                let binarizer = MultiLabelBinarizer::fit(y.iter().chain(predicted.iter()));
                let counts =
                    multilabel_counts(&binarizer.transform(y), &binarizer.transform(&predicted))?;
                Ok(MetricScores::PrecisionRecallF1 {
                    scores: counts.scores(),
                    counts: Some(counts),
                })
            }
            (MetricKind::Regression, Labels::Single(y)) => {
                let y_true = parse_floats(split.x(), y, "target")?;
                let predicted = parse_floats(
                    split.x(),
                    &predictions.single_labels_for(split.x())?,
                    "prediction",
                )?;
                Ok(MetricScores::MeanSquaredError {
                    mse: evaluate_regression(&y_true, &predicted)?,
                })
            }
            (MetricKind::MultiClass, Labels::Single(y)) => {
                let predicted = predictions.single_labels_for(split.x())?;
                Ok(MetricScores::Accuracy {
                    accuracy: evaluate_multi_classification(y, &predicted)?,
                })
            }
            (metric, labels) => Err(DiceError::config(format!(
                "metric {} cannot score {:?} labels",
                metric,
                labels.format()
            ))),
        }
    }
}

/// Parse the label of each input as a number
fn parse_floats(ids: &[String], values: &[String], what: &str) -> DiceResult<Vec<f64>> {
    ids.iter()
        .zip(values)
        .map(|(id, value)| {
            value.trim().parse::<f64>().map_err(|e| {
                DiceError::invalid_label(
                    id.as_str(),
                    value.as_str(),
                    format!("{} is not a number: {}", what, e),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn single_task(name: &str, x: &[&str], y: &[&str]) -> Task {
        let mut splits = BTreeMap::new();
        splits.insert(
            SplitName::Test,
            TaskSplit::single(strings(x), strings(y)).unwrap(),
        );
        Task {
            name: name.to_string(),
            format: SplitFormat::SingleLabel,
            splits,
        }
    }

    #[test]
    fn test_metric_for_task() {
        assert_eq!(
            MetricKind::for_task("entity_matching"),
            Some(MetricKind::EntityMatching)
        );
        assert_eq!(
            MetricKind::for_task("category_prediction"),
            Some(MetricKind::MultiLabel)
        );
        assert_eq!(MetricKind::for_task("release_year"), None);
    }

    #[test]
    fn test_configured_multi_label_task_defaults_to_multi_label() {
        let mut splits = BTreeMap::new();
        splits.insert(
            SplitName::Test,
            TaskSplit::multi(strings(&["g1"]), vec![strings(&["a", "b"])]).unwrap(),
        );
        let task = Task {
            name: "genres".to_string(),
            format: SplitFormat::MultiLabel,
            splits,
        };
        assert_eq!(MetricKind::default_for(&task), Some(MetricKind::MultiLabel));
        assert_eq!(MetricKind::default_for(&single_task("release_year", &["a"], &["1"])), None);

        let mut predictions = Predictions::new();
        predictions.insert_multi("g1", strings(&["a"]));
        let report = TaskEvaluator::new()
            .evaluate(&task, SplitName::Test, None, &predictions)
            .unwrap();
        assert_eq!(report.metric, MetricKind::MultiLabel);
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!("multi-class".parse::<MetricKind>().unwrap(), MetricKind::MultiClass);
        assert_eq!("Regression".parse::<MetricKind>().unwrap(), MetricKind::Regression);
        assert!("auc".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_evaluate_entity_matching_task() {
        let task = single_task("entity_matching", &["o1", "o2", "o3"], &["u1", "None", "u2"]);
        let mut predictions = Predictions::new();
        predictions.insert("o1", "u1");
        predictions.insert("o2", "None");
        predictions.insert("o3", "None");

        let report = TaskEvaluator::new()
            .evaluate(&task, SplitName::Test, None, &predictions)
            .unwrap();
        assert_eq!(report.metric, MetricKind::EntityMatching);
        assert_eq!(report.num_samples, 3);
        match report.scores {
            MetricScores::PrecisionRecallF1 { scores, counts } => {
                assert_eq!(scores.precision, 1.0);
                assert_eq!(scores.recall, 0.5);
                assert_eq!(counts.unwrap().tn, 1);
            }
            other => panic!("Expected precision/recall scores, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_multi_label_split() {
        let split = TaskSplit::multi(
            strings(&["q1", "q2"]),
            vec![strings(&["rock", "pop"]), strings(&["jazz"])],
        )
        .unwrap();
        let mut predictions = Predictions::new();
        predictions.insert_multi("q1", strings(&["rock"]));
        predictions.insert_multi("q2", strings(&["jazz", "blues"]));

        let scores = TaskEvaluator::new()
            .score(MetricKind::MultiLabel, &split, &predictions)
            .unwrap();
        // tp = rock, jazz; fp = blues; fn = pop
        match scores {
            MetricScores::PrecisionRecallF1 { scores, counts } => {
                let counts = counts.unwrap();
                assert_eq!((counts.tp, counts.fp, counts.fn_), (2, 1, 1));
                assert!((scores.f1 - 2.0 / 3.0).abs() < 1e-12);
            }
            other => panic!("Expected precision/recall scores, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_regression_and_accuracy() {
        let split = TaskSplit::single(strings(&["a", "b"]), strings(&["0", "2"])).unwrap();
        let mut predictions = Predictions::new();
        predictions.insert("a", "1");
        predictions.insert("b", "1.0");

        let evaluator = TaskEvaluator::new();
        assert_eq!(
            evaluator
                .score(MetricKind::Regression, &split, &predictions)
                .unwrap(),
            MetricScores::MeanSquaredError { mse: 1.0 }
        );

        predictions.insert("b", "2");
        assert_eq!(
            evaluator
                .score(MetricKind::MultiClass, &split, &predictions)
                .unwrap(),
            MetricScores::Accuracy { accuracy: 0.5 }
        );
    }

    #[test]
    fn test_regression_rejects_non_numeric_labels() {
        let split = TaskSplit::single(strings(&["a"]), strings(&["tall"])).unwrap();
        let mut predictions = Predictions::new();
        predictions.insert("a", "1");

        let err = TaskEvaluator::new()
            .score(MetricKind::Regression, &split, &predictions)
            .unwrap_err();
        match err {
            DiceError::InvalidLabel { id, label, .. } => {
                assert_eq!(id, "a");
                assert_eq!(label, "tall");
            }
            other => panic!("Expected InvalidLabel, got {:?}", other),
        }

        let split = TaskSplit::single(strings(&["a", "b"]), strings(&["1", "2"])).unwrap();
        predictions.insert("b", "n/a");
        let err = TaskEvaluator::new()
            .score(MetricKind::Regression, &split, &predictions)
            .unwrap_err();
        assert!(matches!(err, DiceError::InvalidLabel { id, .. } if id == "b"));
    }

    #[test]
    fn test_unknown_task_needs_explicit_metric() {
        let task = single_task("release_year", &["a"], &["1999"]);
        let mut predictions = Predictions::new();
        predictions.insert("a", "1999");

        let evaluator = TaskEvaluator::new();
        assert!(matches!(
            evaluator
                .evaluate(&task, SplitName::Test, None, &predictions)
                .unwrap_err(),
            DiceError::Config(_)
        ));

        let report = evaluator
            .evaluate(&task, SplitName::Test, Some(MetricKind::Regression), &predictions)
            .unwrap();
        assert_eq!(report.scores, MetricScores::MeanSquaredError { mse: 0.0 });
    }

    #[test]
    fn test_metric_label_format_mismatch() {
        let split = TaskSplit::single(strings(&["a"]), strings(&["x"])).unwrap();
        let err = TaskEvaluator::new()
            .score(MetricKind::MultiLabel, &split, &Predictions::new())
            .unwrap_err();
        assert!(matches!(err, DiceError::Config(_)));
    }
}
