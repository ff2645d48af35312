//! Markdown report generation

use anyhow::Result;

use crate::evaluator::EvalReport;
use crate::metrics::MetricScores;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Generate a Markdown report
    pub fn generate(reports: &[EvalReport]) -> Result<String> {
        let mut md = String::new();

        md.push_str("# DICE Evaluation Report\n\n");

        if let Some(first) = reports.first() {
            md.push_str("## Overview\n\n");
            md.push_str(&format!("- **DICE Version**: {}\n", first.dice_version));
            md.push_str(&format!(
                "- **Timestamp**: {}\n",
                first.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            md.push_str(&format!("- **Evaluations**: {}\n\n", reports.len()));
        }

        md.push_str("## Results\n\n");
        md.push_str("| Task | Split | Metric | Samples | Precision | Recall | F1 | MSE | Accuracy |\n");
        md.push_str("|------|-------|--------|---------|-----------|--------|----|-----|----------|\n");

        for report in reports {
            let (precision, recall, f1, mse, accuracy) = match &report.scores {
                MetricScores::PrecisionRecallF1 { scores, .. } => (
                    cell(scores.precision),
                    cell(scores.recall),
                    cell(scores.f1),
                    "-".to_string(),
                    "-".to_string(),
                ),
                MetricScores::MeanSquaredError { mse } => (
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    cell(*mse),
                    "-".to_string(),
                ),
                MetricScores::Accuracy { accuracy } => (
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    cell(*accuracy),
                ),
            };

            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                report.task,
                report.split,
                report.metric,
                report.num_samples,
                precision,
                recall,
                f1,
                mse,
                accuracy
            ));
        }

        let with_counts: Vec<&EvalReport> = reports
            .iter()
            .filter(|r| {
                matches!(
                    r.scores,
                    MetricScores::PrecisionRecallF1 {
                        counts: Some(_),
                        ..
                    }
                )
            })
            .collect();

        if !with_counts.is_empty() {
            md.push_str("\n## Confusion Counts\n\n");
            md.push_str("| Task | Split | TP | FP | TN | FN |\n");
            md.push_str("|------|-------|----|----|----|----|\n");
            for report in with_counts {
                if let MetricScores::PrecisionRecallF1 {
                    counts: Some(c), ..
                } = &report.scores
                {
                    md.push_str(&format!(
                        "| {} | {} | {} | {} | {} | {} |\n",
                        report.task, report.split, c.tp, c.fp, c.tn, c.fn_
                    ));
                }
            }
        }

        Ok(md)
    }
}

fn cell(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::create_test_reports;

    #[test]
    fn test_markdown_generation() {
        let md = MarkdownReporter::generate(&create_test_reports()).unwrap();

        assert!(md.starts_with("# DICE Evaluation Report"));
        assert!(md.contains("| entity_matching | test | entity_matching | 3 | 1.0000 | 0.5000 | 0.6667 | - | - |"));
        assert!(md.contains("| valid | regression | 2 | - | - | - | 1.0000 | - |"));
        assert!(md.contains("| entity_matching | test | 1 | 0 | 1 | 1 |"));
    }

    #[test]
    fn test_empty_report() {
        let md = MarkdownReporter::generate(&[]).unwrap();
        assert!(md.contains("## Results"));
        assert!(!md.contains("## Overview"));
        assert!(!md.contains("Confusion Counts"));
    }
}
