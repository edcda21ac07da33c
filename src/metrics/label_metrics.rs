//! Per-label precision, recall, F1 and support
//!
//! Counts over all positions of a ground-truth / prediction pair:
//! - tp: truth == label && pred == label
//! - fp: truth != label && pred == label
//! - fn: truth == label && pred != label
//! - support: truth == label
//!
//! Zero denominators give 0.0 rather than NaN.

use super::ratio_or_zero;
use serde::Serialize;

/// Metrics for a single label
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LabelMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl LabelMetrics {
    /// Build from raw counts.
    pub fn from_counts(tp: usize, fp: usize, fn_: usize) -> Self {
        let precision = ratio_or_zero(tp as f64, (tp + fp) as f64);
        let recall = ratio_or_zero(tp as f64, (tp + fn_) as f64);
        let f1 = ratio_or_zero(2.0 * precision * recall, precision + recall);

        Self {
            precision,
            recall,
            f1,
            support: tp + fn_,
        }
    }
}

/// Compute precision / recall / F1 / support for one label value.
///
/// Sequences are expected to be the same length (see `check_lengths`);
/// positions past the shorter one are ignored.
pub fn compute_metrics_for_label(y_true: &[usize], y_pred: &[usize], label: usize) -> LabelMetrics {
    debug_assert_eq!(y_true.len(), y_pred.len());

    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;

    for (&truth, &pred) in y_true.iter().zip(y_pred) {
        match (truth == label, pred == label) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }

    LabelMetrics::from_counts(tp, fp, fn_)
}
