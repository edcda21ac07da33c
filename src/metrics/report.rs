//! Classification report for one label space
//!
//! One row per label (in label order) plus accuracy, macro and
//! support-weighted averages and the confusion matrix.

use super::{accuracy, check_lengths, compute_metrics_for_label, ConfusionMatrix, LabelMetrics, MetricsError};
use crate::classify::LabelSpace;
use serde::Serialize;

/// Metrics for one label of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRow {
    pub label: usize,
    pub name: &'static str,
    #[serde(flatten)]
    pub metrics: LabelMetrics,
}

/// Averaged precision / recall / F1 across the rows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AveragedMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub label_space: &'static str,
    pub accuracy: f64,
    pub rows: Vec<ClassRow>,
    pub macro_avg: AveragedMetrics,
    pub weighted_avg: AveragedMetrics,
    pub total_support: usize,
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Build a report from typed label sequences.
    pub fn from_labels<L: LabelSpace>(y_true: &[L], y_pred: &[L]) -> Result<Self, MetricsError> {
        let y_true: Vec<usize> = y_true.iter().map(|l| l.index()).collect();
        let y_pred: Vec<usize> = y_pred.iter().map(|l| l.index()).collect();
        Self::from_indices::<L>(&y_true, &y_pred)
    }

    /// Build a report from raw integer labels of space `L`.
    ///
    /// Per-label metrics are computed once for every label in `L`, including
    /// labels that never occur.
    pub fn from_indices<L: LabelSpace>(y_true: &[usize], y_pred: &[usize]) -> Result<Self, MetricsError> {
        check_lengths(y_true, y_pred)?;
        let confusion = ConfusionMatrix::from_labels(y_true, y_pred, L::len(), L::SPACE_NAME)?;

        let rows: Vec<ClassRow> = L::ALL
            .iter()
            .map(|&label| ClassRow {
                label: label.index(),
                name: label.name(),
                metrics: compute_metrics_for_label(y_true, y_pred, label.index()),
            })
            .collect();

        let total_support = rows.iter().map(|r| r.metrics.support).sum();

        Ok(Self {
            label_space: L::SPACE_NAME,
            accuracy: accuracy(y_true, y_pred),
            macro_avg: macro_average(&rows),
            weighted_avg: weighted_average(&rows, total_support),
            rows,
            total_support,
            confusion,
        })
    }

    pub fn row(&self, label: usize) -> Option<&ClassRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn macro_average(rows: &[ClassRow]) -> AveragedMetrics {
    if rows.is_empty() {
        return AveragedMetrics::default();
    }
    let n = rows.len() as f64;
    AveragedMetrics {
        precision: rows.iter().map(|r| r.metrics.precision).sum::<f64>() / n,
        recall: rows.iter().map(|r| r.metrics.recall).sum::<f64>() / n,
        f1: rows.iter().map(|r| r.metrics.f1).sum::<f64>() / n,
    }
}

fn weighted_average(rows: &[ClassRow], total_support: usize) -> AveragedMetrics {
    if total_support == 0 {
        return AveragedMetrics::default();
    }
    let total = total_support as f64;

    AveragedMetrics {
        precision: weighted_mean(rows, total, |m| m.precision),
        recall: weighted_mean(rows, total, |m| m.recall),
        f1: weighted_mean(rows, total, |m| m.f1),
    }
}

fn weighted_mean(rows: &[ClassRow], total: f64, metric: impl Fn(&LabelMetrics) -> f64) -> f64 {
    rows.iter()
        .map(|r| metric(&r.metrics) * r.metrics.support as f64)
        .sum::<f64>()
        / total
}
