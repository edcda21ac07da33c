//! Overall accuracy
//!
//! Fraction of positions where ground truth equals prediction. An empty pair
//! has accuracy 0.0, matching the zero-denominator rule of the per-label
//! metrics.

use super::ratio_or_zero;

pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());

    let correct = y_true
        .iter()
        .zip(y_pred)
        .filter(|(truth, pred)| truth == pred)
        .count();

    ratio_or_zero(correct as f64, y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_sequences() {
        let y = vec![3, 0, 1, 2, 2];
        assert_relative_eq!(accuracy(&y, &y), 1.0);
    }

    #[test]
    fn test_partial_match() {
        let y_true = vec![0, 1, 2, 0];
        let y_pred = vec![0, 2, 2, 1];
        assert_relative_eq!(accuracy(&y_true, &y_pred), 0.5);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(accuracy(&[0, 0], &[1, 1]), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(accuracy(&[], &[]), 0.0);
    }
}
