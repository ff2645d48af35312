//! `dice eval`: score a predictions file against task splits

use std::path::PathBuf;

use anyhow::{Context, Result};
use dice_core::{DatasetConfig, SplitName, read_task};
use dice_eval::report::{ReportFormat, generate_report};
use dice_eval::{MetricKind, Predictions, TaskEvaluator};

use super::emit;
use crate::console::CliConsole;

/// Parsed `dice eval` arguments
#[derive(Debug, Clone)]
pub struct EvalRequest {
    pub task: String,
    pub predictions: PathBuf,
    pub splits: Vec<SplitName>,
    pub metric: Option<MetricKind>,
    pub format: String,
    pub output: Option<PathBuf>,
}

/// Run the evaluation and print or write the report
pub async fn run(console: &mut CliConsole, dataset: DatasetConfig, request: EvalRequest) -> Result<()> {
    let report_format = ReportFormat::parse(&request.format).unwrap_or_else(|| {
        console.warn(&format!(
            "Unknown report format '{}', using table",
            request.format
        ));
        ReportFormat::Table
    });

    console.start_progress(&format!("Evaluating {}", request.task));
    let task_name = request.task.clone();
    let output = request.output.clone();
    let result = tokio::task::spawn_blocking(move || evaluate(&dataset, &request)).await;
    console.finish_progress();
    let reports = result
        .context("Evaluation task panicked")?
        .with_context(|| format!("Failed to evaluate task '{}'", task_name))?;

    let mut report = generate_report(&reports, report_format)?;
    if !report.ends_with('\n') {
        report.push('\n');
    }
    emit(console, &report, output.as_deref()).await
}

fn evaluate(
    dataset: &DatasetConfig,
    request: &EvalRequest,
) -> dice_core::DiceResult<Vec<dice_eval::EvalReport>> {
    let task = read_task(dataset, &request.task)?;
    let predictions = Predictions::load(&request.predictions, task.format)?;

    let evaluator = TaskEvaluator::new();
    request
        .splits
        .iter()
        .map(|split| evaluator.evaluate(&task, *split, request.metric, &predictions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_task(root: &Path, task: &str, lines: &str) {
        let dir = root.join(task);
        fs::create_dir_all(&dir).unwrap();
        for split in ["train", "valid", "test"] {
            fs::write(dir.join(format!("{}.txt", split)), lines).unwrap();
        }
    }

    fn request(task: &str, predictions: PathBuf, splits: Vec<SplitName>) -> EvalRequest {
        EvalRequest {
            task: task.to_string(),
            predictions,
            splits,
            metric: None,
            format: "json".to_string(),
            output: None,
        }
    }

    #[test]
    fn test_evaluate_entity_matching_splits() {
        let temp_dir = TempDir::new().unwrap();
        write_task(temp_dir.path(), "entity_matching", "o1,u1\no2,None\no3,u3\n");
        let preds = temp_dir.path().join("preds.txt");
        fs::write(&preds, "o1,u1\no2,u9\no3,None\n").unwrap();

        let dataset = DatasetConfig::new(temp_dir.path());
        let reports = evaluate(
            &dataset,
            &request("entity_matching", preds, vec![SplitName::Valid, SplitName::Test]),
        )
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].split, SplitName::Valid);
        assert_eq!(reports[1].metric, MetricKind::EntityMatching);
        assert_eq!(reports[1].num_samples, 3);
    }

    #[test]
    fn test_evaluate_rejects_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_task(temp_dir.path(), "data", "o1,u1\n");
        let preds = temp_dir.path().join("preds.txt");
        fs::write(&preds, "o1,u1\n").unwrap();

        let dataset = DatasetConfig::new(temp_dir.path());
        let err = evaluate(&dataset, &request("data", preds, vec![SplitName::Test])).unwrap_err();
        assert!(matches!(err, dice_core::DiceError::Config(_)));
    }

    #[test]
    fn test_evaluate_unknown_task() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = DatasetConfig::new(temp_dir.path());
        let err = evaluate(
            &dataset,
            &request("nope", temp_dir.path().join("p.txt"), vec![SplitName::Test]),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
