//! Encoding label sequences as indicator rows

use std::collections::{BTreeSet, HashMap};

/// Maps category labels to indicator columns
///
/// Classes are ordered lexicographically, so the same label sets always give
/// the same column layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiLabelBinarizer {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl MultiLabelBinarizer {
    /// Create a binarizer with no classes
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the classes of one or more label sequences
    pub fn fit<'a, I, L>(label_sets: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = &'a String>,
    {
        let classes: BTreeSet<&String> = label_sets.into_iter().flatten().collect();
        let classes: Vec<String> = classes.into_iter().cloned().collect();
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { classes, index }
    }

    /// Fitted classes, in column order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of columns
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Encode label sequences as `0`/`1` rows
    ///
    /// Labels outside the fitted classes are skipped.
    pub fn transform(&self, label_sets: &[Vec<String>]) -> Vec<Vec<u8>> {
        let mut unknown = 0usize;
        let rows: Vec<Vec<u8>> = label_sets
            .iter()
            .map(|labels| {
                let mut row = vec![0u8; self.classes.len()];
                for label in labels {
                    match self.index.get(label) {
                        Some(&col) => row[col] = 1,
                        None => unknown += 1,
                    }
                }
                row
            })
            .collect();

        if unknown > 0 {
            tracing::warn!("Skipped {} labels outside the fitted classes", unknown);
        }
        rows
    }
}
