//! In-memory knowledge graph for a DICE dataset directory
//!
//! Layout of a dataset directory:
//!
//! ```text
//! <dataset_dir>/
//!   data/triples.txt          # head \t arc \t tail \t tail_type \t source
//!   <task>/train.txt          # x,y  (or x,label1,label2,... for category prediction)
//!   <task>/valid.txt
//!   <task>/test.txt
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::DatasetConfig;
use crate::error::{DiceError, DiceResult};
use crate::filter::{TripleFilter, filter_triples};
use crate::task::Task;
use crate::triple::{TailType, Triple};

/// Triples of a dataset plus its lazily loaded tasks
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    config: DatasetConfig,
    triples: Vec<Triple>,
    tasks: BTreeMap<String, Task>,
}

impl KnowledgeGraph {
    /// Load the triples of the dataset described by `config`
    ///
    /// Task splits are not read until [`KnowledgeGraph::load_tasks`] or
    /// [`KnowledgeGraph::load_task`] is called.
    pub fn load(config: DatasetConfig) -> DiceResult<Self> {
        tracing::info!("Loading data from {}...", config.dataset_dir.display());

        let triples = read_triples(&config.triples_path())?;
        tracing::info!("Loaded {} triples.", triples.len());

        Ok(Self {
            config,
            triples,
            tasks: BTreeMap::new(),
        })
    }

    /// Load the dataset rooted at `dir` with the default layout
    pub fn open(dir: impl Into<PathBuf>) -> DiceResult<Self> {
        Self::load(DatasetConfig::new(dir))
    }

    /// Build a graph from triples already in memory
    pub fn from_triples(config: DatasetConfig, triples: Vec<Triple>) -> Self {
        Self {
            config,
            triples,
            tasks: BTreeMap::new(),
        }
    }

    /// Dataset root directory
    pub fn dir(&self) -> &Path {
        &self.config.dataset_dir
    }

    /// Dataset configuration the graph was loaded with
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// All triples, in file order
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Number of triples
    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// Loaded tasks by name
    pub fn tasks(&self) -> &BTreeMap<String, Task> {
        &self.tasks
    }

    /// Get a loaded task
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Names of the task directories in the dataset, sorted
    pub fn task_names(&self) -> DiceResult<Vec<String>> {
        discover_tasks(&self.config)
    }

    /// Load the splits of every task directory
    ///
    /// The task map is replaced only when every task loaded; on error the
    /// previously loaded tasks are left untouched.
    pub fn load_tasks(&mut self) -> DiceResult<()> {
        let mut tasks = BTreeMap::new();

        for name in self.task_names()? {
            let task = read_task(&self.config, &name)?;
            tasks.insert(name, task);
        }

        self.tasks = tasks;
        Ok(())
    }

    /// Load (or reload) the splits of a single task
    pub fn load_task(&mut self, name: &str) -> DiceResult<&Task> {
        let task = read_task(&self.config, name)?;
        self.tasks.insert(name.to_string(), task);
        Ok(&self.tasks[name])
    }

    /// Triples matching any field of `filter`, in file order
    pub fn filter_triples(&self, filter: &TripleFilter) -> Vec<&Triple> {
        filter_triples(&self.triples, filter)
    }

    /// Compute statistics about the graph
    pub fn stats(&self) -> KnowledgeGraphStats {
        KnowledgeGraphStats::from_triples(&self.triples)
    }
}

/// Summary counts over a set of triples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraphStats {
    /// Number of triples
    pub triple_count: usize,
    /// Number of distinct heads
    pub head_count: usize,
    /// Number of distinct arcs
    pub arc_count: usize,
    /// Number of distinct entity IDs (heads plus entity tails)
    pub entity_count: usize,
    /// Triples whose tail is an entity
    pub entity_tail_count: usize,
    /// Triples whose tail is a value
    pub value_tail_count: usize,
    /// Triples per source
    pub by_source: BTreeMap<String, usize>,
}

impl KnowledgeGraphStats {
    /// Compute statistics over `triples`
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut heads = HashSet::new();
        let mut arcs = HashSet::new();
        let mut entities = HashSet::new();
        let mut stats = Self {
            triple_count: triples.len(),
            ..Default::default()
        };

        for triple in triples {
            heads.insert(triple.head.as_str());
            arcs.insert(triple.arc.as_str());
            entities.insert(triple.head.as_str());
            match triple.tail_type {
                TailType::Entity => {
                    entities.insert(triple.tail.as_str());
                    stats.entity_tail_count += 1;
                }
                TailType::Value => stats.value_tail_count += 1,
            }
            *stats.by_source.entry(triple.source.clone()).or_insert(0) += 1;
        }

        stats.head_count = heads.len();
        stats.arc_count = arcs.len();
        stats.entity_count = entities.len();
        stats
    }
}

/// Load the splits of the task directory `name`
///
/// The reserved data directory is never a task, even when it holds split
/// files.
pub fn read_task(config: &DatasetConfig, name: &str) -> DiceResult<Task> {
    if name == config.data_dir_name {
        return Err(DiceError::config(format!(
            "'{}' is the reserved data directory, not a task",
            name
        )));
    }

    let dir = config.task_dir(name);
    if !dir.is_dir() {
        return Err(DiceError::data_not_found(dir));
    }

    tracing::info!("Task: {}", name);
    let task = Task::load(name, &dir, config.split_format(name))?;
    for (split, data) in &task.splits {
        tracing::info!("{} ({}): {} samples", name, split, data.len());
    }
    Ok(task)
}

/// Names of the task directories under the dataset root, sorted
///
/// Every immediate subdirectory except the reserved data directory is a task.
/// Triples are not read, so this works on a dataset whose triples file is
/// absent.
pub fn discover_tasks(config: &DatasetConfig) -> DiceResult<Vec<String>> {
    let dir = config.dataset_dir.as_path();
    if !dir.is_dir() {
        return Err(DiceError::data_not_found(dir));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DiceError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Skipping task directory with non UTF-8 name: {:?}", entry.path());
            continue;
        };
        if name == config.data_dir_name {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}

/// Read a tab-separated triples file, in file order
///
/// Blank lines are skipped; any other line must hold exactly five fields and
/// a known tail type.
pub fn read_triples(path: &Path) -> DiceResult<Vec<Triple>> {
    let file = File::open(path).map_err(|e| DiceError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let mut triples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DiceError::from_io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let triple = line
            .parse::<Triple>()
            .map_err(|e| DiceError::malformed(path, idx + 1, line.as_str(), e.to_string()))?;
        triples.push(triple);
    }

    Ok(triples)
}
