//! Entity and arc matching evaluation
//!
//! Each input is matched to at most one target; the label `"None"` means "no
//! match", both in predictions and in ground truth. Decisions are bucketed as:
//!
//! | truth  | prediction       | bucket |
//! |--------|------------------|--------|
//! | None   | None             | TN     |
//! | None   | anything else    | FP     |
//! | t      | t                | TP     |
//! | t      | None             | FN     |
//! | t      | other than t     | FP     |

use std::collections::HashMap;

use dice_core::{DiceError, DiceResult};

use super::types::{ConfusionCounts, PrecisionRecallF1};

/// Label meaning "no match"
pub const NONE_LABEL: &str = "None";

/// Tally confusion counts for matching predictions
///
/// Every `x[i]` must have an entry in `predictions`.
pub fn matching_counts(
    predictions: &HashMap<String, String>,
    x: &[String],
    y: &[String],
) -> DiceResult<ConfusionCounts> {
    if x.len() != y.len() {
        return Err(DiceError::shape_mismatch("matching inputs/labels", x.len(), y.len()));
    }

    let mut counts = ConfusionCounts::default();
    for (input, truth) in x.iter().zip(y) {
        let predicted = predictions
            .get(input)
            .ok_or_else(|| DiceError::missing_prediction(input.as_str()))?;

        if truth == NONE_LABEL {
            if predicted == truth {
                counts.tn += 1;
            } else {
                counts.fp += 1;
            }
        } else if predicted == truth {
            counts.tp += 1;
        } else if predicted == NONE_LABEL {
            counts.fn_ += 1;
        } else {
            counts.fp += 1;
        }
    }

    Ok(counts)
}

/// Evaluate entity matching predictions
pub fn evaluate_entity_matching(
    predictions: &HashMap<String, String>,
    x: &[String],
    y: &[String],
) -> DiceResult<PrecisionRecallF1> {
    Ok(matching_counts(predictions, x, y)?.scores())
}

/// Evaluate arc matching predictions
pub fn evaluate_arc_matching(
    predictions: &HashMap<String, String>,
    x: &[String],
    y: &[String],
) -> DiceResult<PrecisionRecallF1> {
    Ok(matching_counts(predictions, x, y)?.scores())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn predictions(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_entity_matching_example() {
        let x = strings(&["o1", "o2", "o3"]);
        let y = strings(&["u1", "None", "u2"]);
        let preds = predictions(&[("o1", "u1"), ("o2", "None"), ("o3", "None")]);

        let counts = matching_counts(&preds, &x, &y).unwrap();
        assert_eq!(
            counts,
            ConfusionCounts {
                tp: 1,
                fp: 0,
                tn: 1,
                fn_: 1
            }
        );

        let scores = evaluate_entity_matching(&preds, &x, &y).unwrap();
        assert_eq!(scores.precision, 1.0);
        assert_eq!(scores.recall, 0.5);
        assert!((scores.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_wrong_predictions_score_zero() {
        let x = strings(&["o1", "o2"]);
        let y = strings(&["u1", "u2"]);
        let preds = predictions(&[("o1", "u9"), ("o2", "None")]);

        let scores = evaluate_entity_matching(&preds, &x, &y).unwrap();
        assert_eq!(scores.as_tuple(), (0.0, 0.0, 0.0));

        let scores = evaluate_arc_matching(&preds, &x, &y).unwrap();
        assert_eq!(scores.as_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_predicting_match_for_none_is_false_positive() {
        let x = strings(&["a1", "a2"]);
        let y = strings(&["None", "b2"]);
        let preds = predictions(&[("a1", "b1"), ("a2", "b2")]);

        let counts = matching_counts(&preds, &x, &y).unwrap();
        assert_eq!(counts.fp, 1);
        assert_eq!(counts.tp, 1);

        let scores = evaluate_arc_matching(&preds, &x, &y).unwrap();
        assert_eq!(scores.precision, 0.5);
        assert_eq!(scores.recall, 1.0);
    }

    #[test]
    fn test_only_true_negatives() {
        let x = strings(&["a1"]);
        let y = strings(&["None"]);
        let preds = predictions(&[("a1", "None")]);

        let scores = evaluate_arc_matching(&preds, &x, &y).unwrap();
        assert_eq!(scores.as_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_prediction() {
        let x = strings(&["o1", "o2"]);
        let y = strings(&["u1", "u2"]);
        let preds = predictions(&[("o1", "u1")]);

        let err = evaluate_entity_matching(&preds, &x, &y).unwrap_err();
        match err {
            DiceError::MissingPrediction { id } => assert_eq!(id, "o2"),
            other => panic!("Expected MissingPrediction, got {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch() {
        let preds = predictions(&[("o1", "u1")]);
        let err = evaluate_entity_matching(&preds, &strings(&["o1"]), &[]).unwrap_err();
        assert!(matches!(
            err,
            DiceError::ShapeMismatch {
                expected: 1,
                found: 0,
                ..
            }
        ));
    }
}
