use crate::data::DatasetSummary;
use crate::evaluation::{EvaluationReport, SamplePrediction};
use crate::metrics::ClassificationReport;

pub const TITLE: &str = "🌫️ Air Quality & Health Prediction (Rule-based Simulator)";

pub const REPORT_HEADER: &str = "Label  Precision  Recall   F1-score  Support";

pub const PROMPT: &str = "Enter a custom sample to predict (or type 'demo' to run a demo sample):\n\
Format: Temperature Humidity CO2 PM2.5 PM10 NO2 O3 WindSpeed CityType(0/1)\n\
Example: 33 65 550 150 180 80 60 3.5 1\n\
Input: ";

pub const FALLBACK_NOTICE: &str = "Invalid input. Running demo sample.";

pub const CLOSING: &str = "Done. Swap the rule predictor for a trained model to evaluate real predictions.";

/// Plain console formatter with fixed-width report columns
pub struct TextFormatter;

impl TextFormatter {
    /// Format accuracy summary and both classification reports
    pub fn format_report(report: &EvaluationReport) -> String {
        let mut out = String::with_capacity(1024);

        out.push_str(&format!("{}\n\n", TITLE));
        out.push_str(&format!("{}\n\n", Self::format_dataset(&report.dataset)));

        out.push_str("Overall Accuracy:\n");
        out.push_str(&format!(
            "  {} Accuracy: {:.3}\n",
            report.aqi.label_space, report.aqi.accuracy
        ));
        out.push_str(&format!(
            "  {} Accuracy: {:.3}\n\n",
            report.health_risk.label_space, report.health_risk.accuracy
        ));

        Self::format_classification(&mut out, &report.aqi);
        Self::format_classification(&mut out, &report.health_risk);

        out
    }

    fn format_dataset(dataset: &DatasetSummary) -> String {
        let mut line = format!(
            "Dataset: {} samples (train {} / test {})",
            dataset.total, dataset.train, dataset.test
        );
        if let Some(seed) = dataset.seed {
            line.push_str(&format!(", seed {}", seed));
        }
        line
    }

    fn format_classification(out: &mut String, report: &ClassificationReport) {
        out.push_str(&format!("{} Classification Report:\n", report.label_space));
        out.push_str(REPORT_HEADER);
        out.push('\n');
        for row in &report.rows {
            out.push_str(&format!(
                "{:>5}  {:>9.3}  {:>6.3}  {:>8.3}  {:>7}\n",
                row.label, row.metrics.precision, row.metrics.recall, row.metrics.f1, row.metrics.support
            ));
        }
        out.push('\n');
    }

    /// Format the single-sample prediction block.
    ///
    /// Depends only on the readings, so a fallback renders the same block as `demo`.
    pub fn format_prediction(prediction: &SamplePrediction) -> String {
        let mut out = String::with_capacity(160);
        out.push_str("\nPrediction for the sample:\n");
        out.push_str(&format!("  Pollution score: {:.3}\n", prediction.score));
        out.push_str(&format!(
            "  AQI Score -> Level {} ({})\n",
            prediction.aqi_level, prediction.aqi_name
        ));
        out.push_str(&format!(
            "  Health Risk -> {} ({})\n",
            prediction.health_risk, prediction.health_risk_name
        ));
        out
    }

    /// Everything printed after the prompt: fallback notice, prediction block, closing line
    pub fn format_query_result(prediction: &SamplePrediction) -> String {
        let mut out = String::with_capacity(256);
        if prediction.source.is_fallback() {
            out.push_str(FALLBACK_NOTICE);
            out.push('\n');
        }
        out.push_str(&Self::format_prediction(prediction));
        out.push_str(&format!("\n{}\n", CLOSING));
        out
    }
}
