//! Confusion matrix over a fixed number of classes.
//!
//! Entry `(i, j)` counts positions whose ground truth is `i` and prediction
//! is `j`.

use super::{check_lengths, MetricsError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// `counts[truth][pred]`
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn new(n_classes: usize) -> Self {
        Self {
            counts: vec![vec![0; n_classes]; n_classes],
        }
    }

    /// Build from a label-sequence pair.
    ///
    /// `space` only names the label space in error messages.
    pub fn from_labels(
        y_true: &[usize],
        y_pred: &[usize],
        n_classes: usize,
        space: &'static str,
    ) -> Result<Self, MetricsError> {
        check_lengths(y_true, y_pred)?;

        let mut matrix = Self::new(n_classes);
        for (&truth, &pred) in y_true.iter().zip(y_pred) {
            for label in [truth, pred] {
                if label >= n_classes {
                    return Err(MetricsError::LabelOutOfRange {
                        label,
                        space,
                        size: n_classes,
                    });
                }
            }
            matrix.counts[truth][pred] += 1;
        }

        Ok(matrix)
    }

    /// One row per ground-truth label, one column per predicted label
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics_for_label;

    #[test]
    fn test_counts() {
        let y_true = vec![0, 0, 1, 2, 2, 2];
        let y_pred = vec![0, 1, 1, 2, 0, 2];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, 3, "test").unwrap();

        assert_eq!(
            cm.rows(),
            &[vec![1, 1, 0], vec![0, 1, 0], vec![1, 0, 2]][..]
        );
        assert_eq!(cm.total(), 6);
    }

    #[test]
    fn test_row_sums_match_support() {
        let y_true = vec![0, 1, 2, 3, 1, 2, 0, 3, 3];
        let y_pred = vec![0, 2, 2, 3, 1, 1, 3, 3, 0];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, 4, "test").unwrap();

        for (label, row) in cm.rows().iter().enumerate() {
            let support = compute_metrics_for_label(&y_true, &y_pred, label).support;
            assert_eq!(row.iter().sum::<usize>(), support);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = ConfusionMatrix::from_labels(&[0, 1], &[0], 2, "test").unwrap_err();
        assert_eq!(err, MetricsError::LengthMismatch { y_true: 2, y_pred: 1 });
    }

    #[test]
    fn test_label_out_of_range() {
        let err = ConfusionMatrix::from_labels(&[0, 1], &[0, 4], 3, "Health_Risk").unwrap_err();
        assert_eq!(
            err,
            MetricsError::LabelOutOfRange { label: 4, space: "Health_Risk", size: 3 }
        );
        assert!(err.to_string().contains("Health_Risk"));
    }

    #[test]
    fn test_empty_matrix() {
        let cm = ConfusionMatrix::from_labels(&[], &[], 4, "test").unwrap();
        assert_eq!(cm.total(), 0);
        assert_eq!(cm.rows().len(), 4);
    }
}
