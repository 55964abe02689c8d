//! Classification metrics over `+1` / `-1` labels.
//!
//! Provides accuracy, precision, recall, and F1-score with `+1` as the
//! positive class.

/// Confusion counts for a binary problem with positive class `+1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// Predicted +1, actually +1
    pub tp: usize,
    /// Predicted +1, actually -1
    pub fp: usize,
    /// Predicted -1, actually -1
    pub tn: usize,
    /// Predicted -1, actually +1
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Tallies predicted against true labels. Any value `> 0` counts as positive.
    ///
    /// # Panics
    ///
    /// Panics if vectors have different lengths.
    #[must_use]
    pub fn from_labels(y_pred: &[f32], y_true: &[f32]) -> Self {
        assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

        let mut counts = Self::default();
        for (&p, &t) in y_pred.iter().zip(y_true.iter()) {
            match (p > 0.0, t > 0.0) {
                (true, true) => counts.tp += 1,
                (true, false) => counts.fp += 1,
                (false, false) => counts.tn += 1,
                (false, true) => counts.fn_ += 1,
            }
        }
        counts
    }

    /// Total number of samples counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }
}

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// Returns 0.0 for empty input.
///
/// # Panics
///
/// Panics if vectors have different lengths.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::classification::accuracy;
///
/// let y_true = [1.0, 1.0, -1.0, -1.0];
/// let y_pred = [1.0, -1.0, -1.0, -1.0];
/// assert!((accuracy(&y_pred, &y_true) - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[f32], y_true: &[f32]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    if y_true.is_empty() {
        return 0.0;
    }

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f32 / y_true.len() as f32
}

/// Compute precision: TP / (TP + FP), or 0.0 with no positive predictions.
///
/// # Panics
///
/// Panics if vectors have different lengths.
#[must_use]
pub fn precision(y_pred: &[f32], y_true: &[f32]) -> f32 {
    let c = ConfusionCounts::from_labels(y_pred, y_true);
    ratio(c.tp, c.tp + c.fp)
}

/// Compute recall: TP / (TP + FN), or 0.0 with no positive labels.
///
/// # Panics
///
/// Panics if vectors have different lengths.
#[must_use]
pub fn recall(y_pred: &[f32], y_true: &[f32]) -> f32 {
    let c = ConfusionCounts::from_labels(y_pred, y_true);
    ratio(c.tp, c.tp + c.fn_)
}

/// Compute F1 score (harmonic mean of precision and recall) for class `+1`.
///
/// F1 = 2·TP / (2·TP + FP + FN)
///
/// When there are no true positives the score is 0.0; this covers folds
/// whose labels or predictions contain a single class.
///
/// # Panics
///
/// Panics if vectors have different lengths.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::classification::f1_score;
///
/// let y_true = [1.0, 1.0, -1.0, -1.0];
/// let y_pred = [1.0, -1.0, 1.0, -1.0];
/// assert!((f1_score(&y_pred, &y_true) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn f1_score(y_pred: &[f32], y_true: &[f32]) -> f32 {
    let c = ConfusionCounts::from_labels(y_pred, y_true);
    ratio(2 * c.tp, 2 * c.tp + c.fp + c.fn_)
}

fn ratio(num: usize, den: usize) -> f32 {
    if den == 0 {
        0.0
    } else {
        num as f32 / den as f32
    }
}
