//! JSON report generation

use anyhow::Result;

use crate::evaluator::EvalReport;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(reports: &[EvalReport]) -> Result<String> {
        let json = serde_json::to_string_pretty(reports)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::create_test_reports;

    #[test]
    fn test_json_generation() {
        let json = JsonReporter::generate(&create_test_reports()).unwrap();

        assert!(json.contains("\"task\": \"entity_matching\""));
        assert!(json.contains("\"kind\": \"precision_recall_f1\""));
        assert!(json.contains("\"fn\": 1"));
        assert!(json.contains("\"mse\": 1.0"));
    }

    #[test]
    fn test_json_parses_back() {
        let json = JsonReporter::generate(&create_test_reports()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["split"], "test");
        assert_eq!(value[0]["scores"]["precision"], 1.0);
        assert_eq!(value[1]["metric"], "regression");
    }
}
