//! Regression and multi-class classification evaluation

use dice_core::{DiceError, DiceResult};

use super::types::ratio;

/// Mean squared error of `predictions` against `y_true`
///
/// Returns 0 for empty inputs.
pub fn evaluate_regression(y_true: &[f64], predictions: &[f64]) -> DiceResult<f64> {
    if y_true.len() != predictions.len() {
        return Err(DiceError::shape_mismatch(
            "regression targets/predictions",
            y_true.len(),
            predictions.len(),
        ));
    }

    let sum: f64 = y_true
        .iter()
        .zip(predictions)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    Ok(ratio(sum, y_true.len() as f64))
}

/// Accuracy: fraction of positions where prediction equals truth
///
/// Returns 0 for empty inputs.
pub fn evaluate_multi_classification<T: PartialEq>(
    y_true: &[T],
    predictions: &[T],
) -> DiceResult<f64> {
    if y_true.len() != predictions.len() {
        return Err(DiceError::shape_mismatch(
            "classification labels/predictions",
            y_true.len(),
            predictions.len(),
        ));
    }

    let correct = y_true
        .iter()
        .zip(predictions)
        .filter(|(t, p)| t == p)
        .count();
    Ok(ratio(correct as f64, y_true.len() as f64))
}
