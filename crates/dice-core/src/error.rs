//! Error types for DICE dataset loading and evaluation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for DICE operations
pub type DiceResult<T> = Result<T, DiceError>;

/// Main error type for dataset loading and evaluation
#[derive(Error, Debug)]
pub enum DiceError {
    /// A required dataset file or directory is missing
    #[error("Data not found: {}", path.display())]
    DataNotFound { path: PathBuf },

    /// A line did not parse into the expected fields
    #[error("Malformed record at {}:{line_number}: {reason} (line: {line:?})", path.display())]
    MalformedRecord {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    /// An evaluated input has no entry in the prediction mapping
    #[error("Missing prediction for input: {id}")]
    MissingPrediction { id: String },

    /// A label could not be interpreted for the chosen metric
    #[error("Invalid label {label:?} for input {id}: {reason}")]
    InvalidLabel {
        id: String,
        label: String,
        reason: String,
    },

    /// Evaluator inputs disagree in length or shape
    #[error("Shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// A file exists but could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiceError {
    /// Create a new data-not-found error
    pub fn data_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DataNotFound { path: path.into() }
    }

    /// Create a new malformed-record error
    pub fn malformed(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a new missing-prediction error
    pub fn missing_prediction(id: impl Into<String>) -> Self {
        Self::MissingPrediction { id: id.into() }
    }

    /// Create a new invalid-label error
    pub fn invalid_label(
        id: impl Into<String>,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidLabel {
            id: id.into(),
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a new shape-mismatch error
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Map an IO error on `path`, turning `NotFound` into [`DiceError::DataNotFound`]
    pub fn from_io(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::data_not_found(path)
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }

    /// Whether this error came from a missing file or directory
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DataNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = DiceError::from_io(
            Path::new("/tmp/missing.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn test_from_io_other() {
        let err = DiceError::from_io(
            Path::new("triples.txt"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, DiceError::Io { .. }));
    }

    #[test]
    fn test_invalid_label_names_input() {
        let err = DiceError::invalid_label("r7", "tall", "target is not a number");
        let msg = err.to_string();
        assert!(msg.contains("r7"));
        assert!(msg.contains("\"tall\""));
    }

    #[test]
    fn test_malformed_display() {
        let err = DiceError::malformed("data/triples.txt", 3, "a\tb", "expected 5 fields, found 2");
        let msg = err.to_string();
        assert!(msg.contains("data/triples.txt:3"));
        assert!(msg.contains("expected 5 fields"));
    }
}
