//! Core metric types for evaluation
//!
//! Defines the score structures returned by the evaluators.

use serde::{Deserialize, Serialize};

/// Divide, returning 0 when the denominator is 0
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Confusion counts for a matching or multi-label task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// True positives
    pub tp: u64,
    /// False positives
    pub fp: u64,
    /// True negatives
    pub tn: u64,
    /// False negatives
    #[serde(rename = "fn")]
    pub fn_: u64,
}

impl ConfusionCounts {
    /// Total number of counted decisions
    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Precision, recall and F1 of these counts
    pub fn scores(&self) -> PrecisionRecallF1 {
        PrecisionRecallF1::from_counts(self.tp as f64, self.fp as f64, self.fn_ as f64)
    }
}

/// Precision, recall and F1 score
///
/// Every ratio is 0 when its denominator is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecallF1 {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl PrecisionRecallF1 {
    /// Compute scores from true positive, false positive and false negative totals
    pub fn from_counts(tp: f64, fp: f64, fn_: f64) -> Self {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = ratio(2.0 * precision * recall, precision + recall);
        Self {
            precision,
            recall,
            f1,
        }
    }

    /// As a `(precision, recall, f1)` tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.precision, self.recall, self.f1)
    }
}

/// Scores produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricScores {
    /// Matching and multi-label tasks
    PrecisionRecallF1 {
        #[serde(flatten)]
        scores: PrecisionRecallF1,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        counts: Option<ConfusionCounts>,
    },
    /// Regression tasks
    MeanSquaredError { mse: f64 },
    /// Multi-class classification tasks
    Accuracy { accuracy: f64 },
}

impl MetricScores {
    /// Named values, in display order
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        match self {
            MetricScores::PrecisionRecallF1 { scores, .. } => vec![
                ("precision", scores.precision),
                ("recall", scores.recall),
                ("f1", scores.f1),
            ],
            MetricScores::MeanSquaredError { mse } => vec![("mse", *mse)],
            MetricScores::Accuracy { accuracy } => vec![("accuracy", *accuracy)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_guard() {
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_scores_from_counts() {
        let counts = ConfusionCounts {
            tp: 1,
            fp: 0,
            tn: 1,
            fn_: 1,
        };
        let scores = counts.scores();
        assert_eq!(scores.precision, 1.0);
        assert_eq!(scores.recall, 0.5);
        assert!((scores.f1 - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_all_zero_counts() {
        let scores = ConfusionCounts::default().scores();
        assert_eq!(scores.as_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_metric_values() {
        let scores = MetricScores::Accuracy { accuracy: 0.5 };
        assert_eq!(scores.values(), vec![("accuracy", 0.5)]);
    }
}
