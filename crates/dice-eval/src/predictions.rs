//! Prediction files
//!
//! Predictions use the same line format as split files: `id,label` for
//! single-label tasks and `id,label1,label2,...` for multi-label tasks.

use std::collections::HashMap;
use std::path::Path;

use dice_core::{DiceError, DiceResult, SplitFormat, TaskSplit, read_split_file};

/// Predicted labels keyed by input identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predictions {
    labels: HashMap<String, Vec<String>>,
}

impl Predictions {
    /// Create an empty prediction set
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a prediction file in the given format
    pub fn load(path: &Path, format: SplitFormat) -> DiceResult<Self> {
        let split = read_split_file(path, format)?;
        let predictions = Self::from_split(&split);
        tracing::info!(
            "Loaded {} predictions from {}",
            predictions.len(),
            path.display()
        );
        Ok(predictions)
    }

    /// Build predictions from an already parsed split
    ///
    /// When an identifier repeats, its last line wins.
    pub fn from_split(split: &TaskSplit) -> Self {
        let mut predictions = Self::new();
        for (id, labels) in split.iter() {
            let labels = labels.into_iter().map(str::to_string).collect();
            if predictions.labels.insert(id.to_string(), labels).is_some() {
                tracing::warn!("Duplicate prediction for {}, keeping the last one", id);
            }
        }
        predictions
    }

    /// Record a single-label prediction
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), vec![label.into()]);
    }

    /// Record a multi-label prediction
    pub fn insert_multi(&mut self, id: impl Into<String>, labels: Vec<String>) {
        self.labels.insert(id.into(), labels);
    }

    /// Predicted labels for an input
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.labels.get(id).map(Vec::as_slice)
    }

    /// Number of predicted inputs
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no predictions
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Identifier -> single label mapping
    ///
    /// Fails with `ShapeMismatch` if any input carries other than one label.
    pub fn single_labels(&self) -> DiceResult<HashMap<String, String>> {
        self.labels
            .iter()
            .map(|(id, labels)| match labels.as_slice() {
                [label] => Ok((id.clone(), label.clone())),
                other => Err(DiceError::shape_mismatch(
                    format!("labels predicted for {}", id),
                    1,
                    other.len(),
                )),
            })
            .collect()
    }

    /// Label sequences for `ids`, in order
    pub fn multi_labels_for(&self, ids: &[String]) -> DiceResult<Vec<Vec<String>>> {
        ids.iter()
            .map(|id| {
                self.labels
                    .get(id)
                    .cloned()
                    .ok_or_else(|| DiceError::missing_prediction(id.as_str()))
            })
            .collect()
    }

    /// Single labels for `ids`, in order
    pub fn single_labels_for(&self, ids: &[String]) -> DiceResult<Vec<String>> {
        let mapping = self.single_labels()?;
        ids.iter()
            .map(|id| {
                mapping
                    .get(id)
                    .cloned()
                    .ok_or_else(|| DiceError::missing_prediction(id.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_single_label_predictions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preds.txt");
        fs::write(&path, "o1,u1\no2,None\no1,u3\n").unwrap();

        let predictions = Predictions::load(&path, SplitFormat::SingleLabel).unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions.get("o1").unwrap(), &["u3".to_string()]);

        let mapping = predictions.single_labels().unwrap();
        assert_eq!(mapping["o2"], "None");
    }

    #[test]
    fn test_load_multi_label_predictions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preds.txt");
        fs::write(&path, "q1,rock,pop\nq2\n").unwrap();

        let predictions = Predictions::load(&path, SplitFormat::MultiLabel).unwrap();
        let rows = predictions
            .multi_labels_for(&["q2".to_string(), "q1".to_string()])
            .unwrap();
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["rock", "pop"]);

        assert!(matches!(
            predictions.single_labels().unwrap_err(),
            DiceError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Predictions::load(Path::new("/nonexistent/preds.txt"), SplitFormat::SingleLabel)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_lookup_missing_id() {
        let mut predictions = Predictions::new();
        predictions.insert("a", "1");
        let err = predictions
            .single_labels_for(&["a".to_string(), "b".to_string()])
            .unwrap_err();
        assert!(matches!(err, DiceError::MissingPrediction { id } if id == "b"));
    }
}
