//! Task splits for downstream evaluation tasks
//!
//! Every task directory holds `train.txt`, `valid.txt` and `test.txt`, one
//! comma-separated sample per line. Single-label tasks use `x,y`; multi-label
//! tasks (category prediction) use `x,label1,label2,...`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{DiceError, DiceResult};

/// Field separator in split files
pub const SPLIT_SEPARATOR: char = ',';

/// Name of the multi-label category prediction task
pub const CATEGORY_PREDICTION_TASK: &str = "category_prediction";

/// One of the three fixed partitions of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitName {
    Train,
    Valid,
    Test,
}

impl SplitName {
    /// Get all splits, in load order
    pub fn all() -> &'static [SplitName] {
        &[SplitName::Train, SplitName::Valid, SplitName::Test]
    }

    /// Name as used in file names and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitName::Train => "train",
            SplitName::Valid => "valid",
            SplitName::Test => "test",
        }
    }

    /// File name of this split inside a task directory
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitName {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "train" => Ok(SplitName::Train),
            "valid" | "validation" => Ok(SplitName::Valid),
            "test" => Ok(SplitName::Test),
            other => Err(DiceError::config(format!(
                "unknown split '{}' (expected train, valid or test)",
                other
            ))),
        }
    }
}

/// Line format of a task's split files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitFormat {
    /// `x,y`: exactly one label per sample
    SingleLabel,
    /// `x,label1,label2,...`: zero or more labels per sample
    MultiLabel,
}

/// Labels of one split, parallel to its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Labels {
    Single(Vec<String>),
    Multi(Vec<Vec<String>>),
}

impl Labels {
    fn empty(format: SplitFormat) -> Self {
        match format {
            SplitFormat::SingleLabel => Labels::Single(Vec::new()),
            SplitFormat::MultiLabel => Labels::Multi(Vec::new()),
        }
    }

    /// Number of labelled samples
    pub fn len(&self) -> usize {
        match self {
            Labels::Single(y) => y.len(),
            Labels::Multi(y) => y.len(),
        }
    }

    /// Check if there are no labels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Format these labels were parsed with
    pub fn format(&self) -> SplitFormat {
        match self {
            Labels::Single(_) => SplitFormat::SingleLabel,
            Labels::Multi(_) => SplitFormat::MultiLabel,
        }
    }
}

/// Parallel inputs `X` and labels `Y` of one split
///
/// Samples can only be appended as `(x, y)` pairs, so `X` and `Y` always
/// have the same length and element `i` of one belongs to element `i` of the
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSplit {
    x: Vec<String>,
    y: Labels,
}

impl TaskSplit {
    /// Create an empty split for the given format
    pub fn new(format: SplitFormat) -> Self {
        Self {
            x: Vec::new(),
            y: Labels::empty(format),
        }
    }

    /// Build a single-label split from parallel vectors
    pub fn single(x: Vec<String>, y: Vec<String>) -> DiceResult<Self> {
        if x.len() != y.len() {
            return Err(DiceError::shape_mismatch("task split labels", x.len(), y.len()));
        }
        Ok(Self {
            x,
            y: Labels::Single(y),
        })
    }

    /// Build a multi-label split from parallel vectors
    pub fn multi(x: Vec<String>, y: Vec<Vec<String>>) -> DiceResult<Self> {
        if x.len() != y.len() {
            return Err(DiceError::shape_mismatch("task split labels", x.len(), y.len()));
        }
        Ok(Self {
            x,
            y: Labels::Multi(y),
        })
    }

    /// Input identifiers
    pub fn x(&self) -> &[String] {
        &self.x
    }

    /// Labels, parallel to [`TaskSplit::x`]
    pub fn y(&self) -> &Labels {
        &self.y
    }

    /// Single labels, if this is a single-label split
    pub fn single_labels(&self) -> Option<&[String]> {
        match &self.y {
            Labels::Single(y) => Some(y),
            Labels::Multi(_) => None,
        }
    }

    /// Label sequences, if this is a multi-label split
    pub fn multi_labels(&self) -> Option<&[Vec<String>]> {
        match &self.y {
            Labels::Multi(y) => Some(y),
            Labels::Single(_) => None,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the split has no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Format of this split's lines
    pub fn format(&self) -> SplitFormat {
        self.y.format()
    }

    /// Parse one line and append it. Blank lines are skipped.
    ///
    /// Surrounding whitespace, including a trailing `\r`, is trimmed, so
    /// [`TaskSplit::to_lines`] reproduces a file byte-for-byte only when it
    /// has LF endings and no padding. `path` and `line_number` only feed
    /// error messages.
    pub fn push_line(&mut self, line: &str, path: &Path, line_number: usize) -> DiceResult<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let mut fields = line.split(SPLIT_SEPARATOR);
        // split() always yields at least one item
        let x = fields.next().unwrap_or_default().to_string();

        match &mut self.y {
            Labels::Single(y) => {
                let rest: Vec<&str> = fields.collect();
                if rest.len() != 1 {
                    return Err(DiceError::malformed(
                        path,
                        line_number,
                        line,
                        format!("expected 2 comma-separated fields, found {}", rest.len() + 1),
                    ));
                }
                y.push(rest[0].to_string());
            }
            Labels::Multi(y) => {
                y.push(fields.map(str::to_string).collect());
            }
        }
        self.x.push(x);
        Ok(())
    }

    /// Iterate over `(x, label fields)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.x.iter().enumerate().map(move |(i, x)| {
            let labels = match &self.y {
                Labels::Single(y) => vec![y[i].as_str()],
                Labels::Multi(y) => y[i].iter().map(String::as_str).collect(),
            };
            (x.as_str(), labels)
        })
    }

    /// Serialize back to split-file lines, each terminated by `\n`
    ///
    /// CRLF input comes back with LF endings.
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        for (x, labels) in self.iter() {
            out.push_str(x);
            for label in labels {
                out.push(SPLIT_SEPARATOR);
                out.push_str(label);
            }
            out.push('\n');
        }
        out
    }
}

/// Read one split file
///
/// The file is parsed completely before anything is returned, so a failed
/// read never yields a partial split.
pub fn read_split_file(path: &Path, format: SplitFormat) -> DiceResult<TaskSplit> {
    let content = fs::read_to_string(path).map_err(|e| DiceError::from_io(path, e))?;

    let mut split = TaskSplit::new(format);
    for (idx, line) in content.lines().enumerate() {
        split.push_line(line, path, idx + 1)?;
    }
    Ok(split)
}

/// A downstream task with its train/valid/test splits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name (the directory name)
    pub name: String,

    /// Line format of the split files
    pub format: SplitFormat,

    /// Loaded splits
    pub splits: BTreeMap<SplitName, TaskSplit>,
}

impl Task {
    /// Load all three splits from `dir`
    pub fn load(name: impl Into<String>, dir: &Path, format: SplitFormat) -> DiceResult<Self> {
        let name = name.into();
        let mut splits = BTreeMap::new();

        for split_name in SplitName::all() {
            let path = dir.join(split_name.file_name());
            let split = read_split_file(&path, format)?;
            tracing::debug!("{} ({}): {} samples", name, split_name, split.len());
            splits.insert(*split_name, split);
        }

        Ok(Self {
            name,
            format,
            splits,
        })
    }

    /// Get one split
    pub fn split(&self, name: SplitName) -> Option<&TaskSplit> {
        self.splits.get(&name)
    }

    /// Total number of samples across all splits
    pub fn total_samples(&self) -> usize {
        self.splits.values().map(TaskSplit::len).sum()
    }
}
