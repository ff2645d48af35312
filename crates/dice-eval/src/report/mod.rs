//! Report generation for evaluation results
//!
//! Generates reports in various formats (JSON, Markdown, terminal table).

mod json;
mod markdown;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use crate::evaluator::EvalReport;
use crate::metrics::MetricScores;
use anyhow::Result;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    Table,
}

impl ReportFormat {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "table" => Some(ReportFormat::Table),
            _ => None,
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(reports: &[EvalReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => JsonReporter::generate(reports),
        ReportFormat::Markdown => MarkdownReporter::generate(reports),
        ReportFormat::Table => generate_table(reports),
    }
}

/// Extra confusion-count columns, if the scores carry them
fn counts_summary(scores: &MetricScores) -> Option<String> {
    match scores {
        MetricScores::PrecisionRecallF1 {
            counts: Some(c), ..
        } => Some(format!("tp={} fp={} tn={} fn={}", c.tp, c.fp, c.tn, c.fn_)),
        _ => None,
    }
}

/// Generate a simple table report for terminal output
fn generate_table(reports: &[EvalReport]) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("\n{:=<70}\n", "= DICE Evaluation Results "));
    if let Some(first) = reports.first() {
        output.push_str(&format!(
            "DICE: {} | Timestamp: {}\n",
            first.dice_version,
            first.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    output.push_str(&format!("{:=<70}\n\n", ""));

    output.push_str(&format!(
        "{:<24} {:>6} {:<16} {:>8} {:>12}\n",
        "Task", "Split", "Metric", "Samples", "Score"
    ));
    output.push_str(&format!("{:-<70}\n", ""));

    for report in reports {
        let task_name = if report.task.chars().count() > 22 {
            format!("{}...", report.task.chars().take(19).collect::<String>())
        } else {
            report.task.clone()
        };

        for (i, (name, value)) in report.scores.values().into_iter().enumerate() {
            if i == 0 {
                output.push_str(&format!(
                    "{:<24} {:>6} {:<16} {:>8} {:>12}\n",
                    task_name,
                    report.split.as_str(),
                    report.metric.as_str(),
                    report.num_samples,
                    format!("{}={:.4}", name, value)
                ));
            } else {
                output.push_str(&format!(
                    "{:<24} {:>6} {:<16} {:>8} {:>12}\n",
                    "",
                    "",
                    "",
                    "",
                    format!("{}={:.4}", name, value)
                ));
            }
        }

        if let Some(counts) = counts_summary(&report.scores) {
            output.push_str(&format!("{:<57}{}\n", "", counts));
        }
    }

    output.push_str(&format!("{:=<70}\n", ""));

    Ok(output)
}
