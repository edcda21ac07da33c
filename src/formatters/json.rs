use crate::evaluation::{EvaluationReport, SamplePrediction};

/// JSON formatter for reports and predictions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format_report(report: &EvaluationReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    pub fn format_prediction(prediction: &SamplePrediction) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(prediction)
    }
}
