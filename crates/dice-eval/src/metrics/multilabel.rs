//! Multi-label classification evaluation over indicator matrices

use dice_core::{DiceError, DiceResult};

use super::types::{ConfusionCounts, PrecisionRecallF1};

/// Micro-averaged confusion counts over two `N x C` indicator matrices
///
/// Any nonzero entry counts as membership.
pub fn multilabel_counts(y_true: &[Vec<u8>], predictions: &[Vec<u8>]) -> DiceResult<ConfusionCounts> {
    if y_true.len() != predictions.len() {
        return Err(DiceError::shape_mismatch(
            "multi-label rows",
            y_true.len(),
            predictions.len(),
        ));
    }

    let mut counts = ConfusionCounts::default();
    for (row, (truth, predicted)) in y_true.iter().zip(predictions).enumerate() {
        if truth.len() != predicted.len() {
            return Err(DiceError::shape_mismatch(
                format!("multi-label columns of row {}", row),
                truth.len(),
                predicted.len(),
            ));
        }

        for (&t, &p) in truth.iter().zip(predicted) {
            match (t != 0, p != 0) {
                (true, true) => counts.tp += 1,
                (false, true) => counts.fp += 1,
                (true, false) => counts.fn_ += 1,
                (false, false) => counts.tn += 1,
            }
        }
    }

    Ok(counts)
}

/// Evaluate multi-label predictions with micro-averaged precision, recall and F1
pub fn evaluate_multilabel_classification(
    y_true: &[Vec<u8>],
    predictions: &[Vec<u8>],
) -> DiceResult<PrecisionRecallF1> {
    Ok(multilabel_counts(y_true, predictions)?.scores())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_averaged_scores() {
        let y_true = vec![vec![1, 0, 1], vec![0, 1, 0]];
        let predictions = vec![vec![1, 1, 0], vec![0, 1, 0]];

        let counts = multilabel_counts(&y_true, &predictions).unwrap();
        assert_eq!(counts.tp, 2);
        assert_eq!(counts.fp, 1);
        assert_eq!(counts.fn_, 1);
        assert_eq!(counts.tn, 2);

        let scores = evaluate_multilabel_classification(&y_true, &predictions).unwrap();
        assert!((scores.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((scores.recall - 2.0 / 3.0).abs() < 1e-12);
        assert!((scores.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_positive_predictions_scores_zero() {
        let y_true = vec![vec![1, 0]];
        let predictions = vec![vec![0, 0]];
        let scores = evaluate_multilabel_classification(&y_true, &predictions).unwrap();
        assert_eq!(scores.as_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = evaluate_multilabel_classification(&[vec![1]], &[]).unwrap_err();
        assert!(matches!(err, DiceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_column_count_mismatch() {
        let y_true = vec![vec![1, 0], vec![0, 1]];
        let predictions = vec![vec![1, 0], vec![0]];
        let err = evaluate_multilabel_classification(&y_true, &predictions).unwrap_err();
        match err {
            DiceError::ShapeMismatch {
                context,
                expected,
                found,
            } => {
                assert!(context.contains("row 1"));
                assert_eq!((expected, found), (2, 1));
            }
            other => panic!("Expected ShapeMismatch, got {:?}", other),
        }
    }
}
