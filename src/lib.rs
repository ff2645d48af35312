//! DICE: knowledge-graph benchmark datasets
//!
//! Umbrella crate over [`dice_core`] (triples, tasks, filtering) and
//! [`dice_eval`] (metrics, prediction files, reports).
//!
//! ```rust,ignore
//! use dice::{KnowledgeGraph, Predictions, SplitName, TaskEvaluator};
//!
//! let mut kg = KnowledgeGraph::open("/data/dice/food")?;
//! let task = kg.load_task("arc_matching")?;
//! let predictions = Predictions::load("arc_preds.txt".as_ref(), task.format)?;
//! let report = TaskEvaluator::new().evaluate(task, SplitName::Test, None, &predictions)?;
//! ```

pub use dice_core;
pub use dice_eval;

pub use dice_core::{
    DatasetConfig, DiceConfig, DiceError, DiceResult, KnowledgeGraph, KnowledgeGraphStats,
    SplitFormat, SplitName, TailType, Task, TaskSplit, Triple, TripleFilter,
};
pub use dice_eval::{
    ConfusionCounts, EvalReport, MetricKind, MetricScores, Predictions, TaskEvaluator,
    evaluate_arc_matching, evaluate_entity_matching, evaluate_multi_classification,
    evaluate_multilabel_classification, evaluate_regression,
};
