//! Evaluation metrics for binary classifiers.
//!
//! [`performance`] is the single entry point used by model selection: it
//! takes continuous decision values, binarizes them for accuracy and F1,
//! and ranks them directly for AUROC.
//!
//! # Degenerate inputs
//!
//! Every metric returns `0.0` rather than panicking or producing NaN when it
//! is undefined: empty inputs, F1 with no true positives, and AUROC when
//! `y_true` holds a single class.

pub mod classification;
pub mod ranking;

pub use classification::{accuracy, f1_score, precision, recall, ConfusionCounts};
pub use ranking::roc_auc_score;

use crate::error::TweetsenseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Score returned by [`performance_by_name`] for an unrecognized metric.
///
/// Lies outside the `[0, 1]` range of every real metric.
pub const INVALID_SCORE: f32 = -1.0;

/// Performance measure used to score predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Fraction of sign predictions matching the labels.
    Accuracy,
    /// Harmonic mean of precision and recall, positive class `+1`.
    F1Score,
    /// Area under the ROC curve of the raw decision values.
    Auroc,
}

impl Metric {
    /// All supported metrics, in reporting order.
    pub const ALL: [Metric; 3] = [Metric::Accuracy, Metric::F1Score, Metric::Auroc];

    /// Canonical name (`accuracy`, `f1_score`, `auroc`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::F1Score => "f1_score",
            Metric::Auroc => "auroc",
        }
    }

    /// Scores continuous predictions against `y_true`. See [`performance`].
    #[must_use]
    pub fn evaluate(self, y_true: &[f32], y_pred: &[f32]) -> f32 {
        match self {
            Metric::Accuracy => accuracy(&binarize(y_pred), y_true),
            Metric::F1Score => f1_score(&binarize(y_pred), y_true),
            // Ranking needs the raw values; binarizing would collapse them into ties
            Metric::Auroc => roc_auc_score(y_true, y_pred),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = TweetsenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accuracy" => Ok(Metric::Accuracy),
            "f1_score" => Ok(Metric::F1Score),
            "auroc" => Ok(Metric::Auroc),
            other => Err(TweetsenseError::UnknownMetric(other.to_string())),
        }
    }
}

/// Maps continuous predictions to `+1.0` / `-1.0` by sign.
///
/// A prediction of exactly zero counts as positive.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::binarize;
///
/// assert_eq!(binarize(&[0.3, 0.0, -0.0, -2.0]), vec![1.0, 1.0, 1.0, -1.0]);
/// ```
#[must_use]
pub fn binarize(y_pred: &[f32]) -> Vec<f32> {
    y_pred
        .iter()
        .map(|&p| if p >= 0.0 { 1.0 } else { -1.0 })
        .collect()
}

/// Scores continuous predictions against true `+1`/`-1` labels.
///
/// Accuracy and F1 use the sign of each prediction (zero is positive);
/// AUROC uses the predictions as-is.
///
/// # Panics
///
/// Panics if `y_true` and `y_pred` have different lengths.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::{performance, Metric};
///
/// let y_true = [1.0, 1.0, -1.0, -1.0];
/// let y_pred = [0.5, 0.5, -0.5, -0.5];
/// assert_eq!(performance(&y_true, &y_pred, Metric::Accuracy), 1.0);
/// ```
#[must_use]
pub fn performance(y_true: &[f32], y_pred: &[f32], metric: Metric) -> f32 {
    assert_eq!(y_true.len(), y_pred.len(), "Vectors must have same length");
    metric.evaluate(y_true, y_pred)
}

/// Like [`performance`], but selects the metric by name.
///
/// Returns [`INVALID_SCORE`] for a name outside `accuracy`, `f1_score`,
/// `auroc` instead of failing. Callers must treat that value as "no valid
/// score"; parse with [`Metric::from_str`] to reject bad names up front.
///
/// # Panics
///
/// Panics if `y_true` and `y_pred` have different lengths.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::{performance_by_name, INVALID_SCORE};
///
/// let y = [1.0, -1.0];
/// assert_eq!(performance_by_name(&y, &y, "accuracy"), 1.0);
/// assert_eq!(performance_by_name(&y, &y, "precision"), INVALID_SCORE);
/// ```
#[must_use]
pub fn performance_by_name(y_true: &[f32], y_pred: &[f32], metric: &str) -> f32 {
    match metric.parse::<Metric>() {
        Ok(metric) => performance(y_true, y_pred, metric),
        Err(_) => {
            warn!(metric, "unsupported metric, returning invalid score");
            INVALID_SCORE
        }
    }
}

#[cfg(test)]
mod tests_metric_contract;
