//! Classification metrics
//!
//! Each metric lives in its own module:
//! - `label_metrics`: per-label precision / recall / F1 / support
//! - `accuracy`: overall fraction of matching positions
//! - `confusion`: ground truth × prediction count matrix
//! - `report`: per-label-space report combining all of the above

pub mod accuracy;
pub mod confusion;
pub mod label_metrics;
pub mod report;

// Re-export metric functions
pub use accuracy::accuracy;
pub use confusion::ConfusionMatrix;
pub use label_metrics::{compute_metrics_for_label, LabelMetrics};
pub use report::{AveragedMetrics, ClassRow, ClassificationReport};

use thiserror::Error;

/// Errors raised when a label-sequence pair breaks its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("label sequences differ in length: {y_true} ground truth vs {y_pred} predicted")]
    LengthMismatch { y_true: usize, y_pred: usize },

    #[error("label {label} is outside the {space} label space (0..{size})")]
    LabelOutOfRange {
        label: usize,
        space: &'static str,
        size: usize,
    },
}

/// Check that two label sequences can be compared position by position.
pub fn check_lengths(y_true: &[usize], y_pred: &[usize]) -> Result<(), MetricsError> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            y_true: y_true.len(),
            y_pred: y_pred.len(),
        });
    }
    Ok(())
}

/// Safe ratio with the zero-denominator convention used by every metric here.
#[inline]
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
