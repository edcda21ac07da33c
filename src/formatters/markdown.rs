use crate::classify::{AqiLevel, HealthRisk, LabelSpace};
use crate::evaluation::{EvaluationReport, SamplePrediction};
use crate::input::InputSource;
use crate::metrics::{AveragedMetrics, ClassificationReport};

/// Markdown formatter for evaluation reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format evaluation report as markdown
    pub fn format_report(report: &EvaluationReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Air Quality & Health Prediction\n\n");

        // Dataset
        md.push_str("## Dataset\n\n");
        md.push_str("| Partition | Samples |\n|-----------|---------|\n");
        md.push_str(&format!("| Total | {} |\n", report.dataset.total));
        md.push_str(&format!("| Train (unused) | {} |\n", report.dataset.train));
        md.push_str(&format!("| Test | {} |\n\n", report.dataset.test));
        if let Some(seed) = report.dataset.seed {
            md.push_str(&format!("*Seed:* `{}`\n\n", seed));
        }

        // Accuracy
        md.push_str("## Overall Accuracy\n\n");
        md.push_str(&format!(
            "- **{}:** {:.3}\n",
            report.aqi.label_space, report.aqi.accuracy
        ));
        md.push_str(&format!(
            "- **{}:** {:.3}\n\n",
            report.health_risk.label_space, report.health_risk.accuracy
        ));

        Self::format_classification(&mut md, &report.aqi, AqiLevel::ALL.iter().map(|l| l.name()));
        Self::format_classification(&mut md, &report.health_risk, HealthRisk::ALL.iter().map(|l| l.name()));

        md
    }

    fn format_classification<'a>(
        md: &mut String,
        report: &ClassificationReport,
        names: impl Iterator<Item = &'a str>,
    ) {
        md.push_str(&format!("## {} Classification Report\n\n", report.label_space));
        md.push_str("| Label | Name | Precision | Recall | F1-score | Support |\n");
        md.push_str("|------:|------|----------:|-------:|---------:|--------:|\n");
        for row in &report.rows {
            md.push_str(&format!(
                "| {} | {} | {:.3} | {:.3} | {:.3} | {} |\n",
                row.label, row.name, row.metrics.precision, row.metrics.recall, row.metrics.f1, row.metrics.support
            ));
        }
        Self::format_average(md, "macro avg", &report.macro_avg, report.total_support);
        Self::format_average(md, "weighted avg", &report.weighted_avg, report.total_support);
        md.push('\n');

        // Confusion matrix: rows = ground truth, columns = prediction
        let names: Vec<&str> = names.collect();
        md.push_str(&format!("### {} Confusion Matrix\n\n", report.label_space));
        md.push_str("| true \\ predicted |");
        for name in &names {
            md.push_str(&format!(" {} |", name));
        }
        md.push_str("\n|---|");
        md.push_str(&"---:|".repeat(names.len()));
        md.push('\n');
        for (truth, counts) in report.confusion.rows().iter().enumerate() {
            md.push_str(&format!("| {} |", names.get(truth).copied().unwrap_or("?")));
            for count in counts {
                md.push_str(&format!(" {} |", count));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    fn format_average(md: &mut String, label: &str, avg: &AveragedMetrics, support: usize) {
        md.push_str(&format!(
            "| | *{}* | {:.3} | {:.3} | {:.3} | {} |\n",
            label, avg.precision, avg.recall, avg.f1, support
        ));
    }

    /// Format the single-sample prediction as markdown
    pub fn format_prediction(prediction: &SamplePrediction) -> String {
        let mut md = String::with_capacity(256);
        md.push_str("## Sample Prediction\n\n");

        if let InputSource::Fallback { reason } = &prediction.source {
            md.push_str(&format!("⚠️ Invalid input ({}). Running demo sample.\n\n", reason));
        }

        md.push_str(&format!("**Pollution score:** {:.3}  \n", prediction.score));
        md.push_str(&format!(
            "**AQI Level:** {} ({})  \n",
            prediction.aqi_level, prediction.aqi_name
        ));
        md.push_str(&format!(
            "**Health Risk:** {} ({})\n",
            prediction.health_risk, prediction.health_risk_name
        ));
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DatasetSummary, SensorReadings};

    #[test]
    fn test_format_markdown_report() {
        let y_true = vec![AqiLevel::Good, AqiLevel::Moderate, AqiLevel::Unhealthy];
        let y_pred = vec![AqiLevel::Good, AqiLevel::Unhealthy, AqiLevel::Unhealthy];
        let risk = vec![HealthRisk::Low];
        let report = EvaluationReport {
            dataset: DatasetSummary { total: 10, train: 8, test: 2, seed: None },
            aqi: ClassificationReport::from_labels(&y_true, &y_pred).unwrap(),
            health_risk: ClassificationReport::from_labels(&risk, &risk).unwrap(),
        };

        let md = MarkdownFormatter::format_report(&report);

        assert!(md.contains("## AQI_Level Classification Report"));
        assert!(md.contains("| 2 | Unhealthy | 0.500 | 1.000 | 0.667 | 1 |"));
        assert!(md.contains("| true \\ predicted | Good | Moderate | Unhealthy | Hazardous |"));
        assert!(md.contains("| Moderate | 0 | 0 | 1 | 0 |"));
        assert!(md.contains("*weighted avg*"));
        assert!(!md.contains("*Seed:*"));
    }

    #[test]
    fn test_format_fallback_prediction() {
        let prediction = SamplePrediction {
            readings: SensorReadings::demo(),
            source: InputSource::Fallback { reason: "expected 9 values, found 0".to_string() },
            score: 92.0,
            aqi_level: 1,
            aqi_name: "Moderate",
            health_risk: 1,
            health_risk_name: "Medium",
        };

        let md = MarkdownFormatter::format_prediction(&prediction);

        assert!(md.contains("Invalid input (expected 9 values, found 0)"));
        assert!(md.contains("**AQI Level:** 1 (Moderate)"));
    }
}
