pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use crate::config::ReportFormat;
use crate::evaluation::{EvaluationReport, SamplePrediction};

/// Render the evaluation report in the configured format
pub fn render_report(format: ReportFormat, report: &EvaluationReport) -> Result<String, serde_json::Error> {
    Ok(match format {
        ReportFormat::Text => TextFormatter::format_report(report),
        ReportFormat::Markdown => format!("{}\n", MarkdownFormatter::format_report(report)),
        ReportFormat::Json => format!("{}\n", JsonFormatter::format_report(report)?),
    })
}

/// Render the single-sample prediction shown after the prompt
pub fn render_prediction(format: ReportFormat, prediction: &SamplePrediction) -> Result<String, serde_json::Error> {
    Ok(match format {
        ReportFormat::Text => TextFormatter::format_query_result(prediction),
        ReportFormat::Markdown => format!("\n{}\n", MarkdownFormatter::format_prediction(prediction)),
        ReportFormat::Json => format!("{}\n", JsonFormatter::format_prediction(prediction)?),
    })
}
