//! Model selection utilities for cross-validation and hyperparameter search.
//!
//! This module provides tools for:
//! - Fold assignment ([`KFold`], [`StratifiedKFold`]) and ordered train/test splitting
//! - K-fold cross-validated scoring of any [`DecisionClassifier`]
//! - Grid search over the regularization strength of a linear SVM
//! - Held-out evaluation of an already-fit classifier

mod split;

pub use split::{train_test_split, Fold, FoldAssignment, KFold, StratifiedKFold};

use crate::classification::LinearSVM;
use crate::error::{Result, TweetsenseError};
use crate::metrics::{performance, Metric, INVALID_SCORE};
use crate::primitives::{Matrix, Vector};
use crate::traits::DecisionClassifier;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Regularization strengths searched by [`select_param_linear`]: 10^-3 through 10^2.
pub const C_RANGE: [f32; 6] = [1e-3, 1e-2, 1e-1, 1.0, 10.0, 100.0];

/// How folds are evaluated. Both give bit-identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// One fold after another on the calling thread.
    #[default]
    Sequential,
    /// Folds on the rayon thread pool, one fresh classifier per fold.
    Parallel,
}

/// Results from cross-validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossValidationResult {
    /// Score for each fold, in fold order
    pub scores: Vec<f32>,
}

impl CrossValidationResult {
    /// Calculate mean score across folds.
    ///
    /// Scores are summed in sorted order, so the mean does not depend on
    /// the order the folds were evaluated in. Returns NaN for zero folds;
    /// [`cross_validate`] never produces that.
    #[must_use]
    pub fn mean(&self) -> f32 {
        let mut sorted = self.scores.clone();
        sorted.sort_by(f32::total_cmp);
        let total: f64 = sorted.iter().map(|&s| f64::from(s)).sum();
        (total / sorted.len() as f64) as f32
    }

    /// Calculate standard deviation of scores
    #[must_use]
    pub fn std(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|&score| (score - mean).powi(2))
            .sum::<f32>()
            / self.scores.len() as f32;
        variance.sqrt()
    }

    /// Get minimum score
    #[must_use]
    pub fn min(&self) -> f32 {
        self.scores.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Get maximum score
    #[must_use]
    pub fn max(&self) -> f32 {
        self.scores
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

fn validate_inputs(x: &Matrix<f32>, y: &Vector<f32>, folds: &FoldAssignment) -> Result<()> {
    if x.n_rows() != y.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{} labels", x.n_rows()),
            format!("{} labels", y.len()),
        ));
    }
    if folds.n_samples() != y.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("folds over {} samples", y.len()),
            format!("folds over {} samples", folds.n_samples()),
        ));
    }
    if folds.is_empty() {
        return Err(TweetsenseError::EmptyInput(
            "cannot average over zero folds".to_string(),
        ));
    }
    Ok(())
}

fn is_single_class(y: &[f32]) -> bool {
    y.first()
        .map_or(true, |&first| y.iter().all(|&label| label == first))
}

/// Fits on the fold's training rows and scores its validation rows.
fn evaluate_fold<C>(
    clf: &mut C,
    x: &Matrix<f32>,
    y: &Vector<f32>,
    fold_idx: usize,
    fold: &Fold,
    metric: Metric,
) -> Result<f32>
where
    C: DecisionClassifier + ?Sized,
{
    let x_train = x.select_rows(&fold.train);
    let y_train = y.select(&fold.train);
    let x_test = x.select_rows(&fold.test);
    let y_test = y.select(&fold.test);

    if is_single_class(y_train.as_slice()) || is_single_class(y_test.as_slice()) {
        warn!(
            fold = fold_idx,
            %metric,
            "degenerate fold: training or validation labels contain a single class"
        );
    }

    clf.fit(&x_train, &y_train)?;
    let predictions = clf.decision_function(&x_test)?;
    if predictions.len() != y_test.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{} predictions", y_test.len()),
            format!("{} predictions", predictions.len()),
        ));
    }

    let score = performance(y_test.as_slice(), &predictions, metric);
    debug!(
        fold = fold_idx,
        n_train = fold.train.len(),
        n_test = fold.test.len(),
        %metric,
        score,
        "fold evaluated"
    );
    Ok(score)
}

/// Scores `clf` on every fold, refitting it on each fold's training rows.
///
/// # Errors
///
/// Returns an error if `x`, `y`, and `folds` disagree on the number of
/// samples, if there are no folds, or if the classifier fails.
pub fn cross_validate<C>(
    clf: &mut C,
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
) -> Result<CrossValidationResult>
where
    C: DecisionClassifier + ?Sized,
{
    validate_inputs(x, y, folds)?;

    let scores = folds
        .iter()
        .enumerate()
        .map(|(i, fold)| evaluate_fold(clf, x, y, i, fold, metric))
        .collect::<Result<Vec<f32>>>()?;

    Ok(CrossValidationResult { scores })
}

/// Like [`cross_validate`], evaluating folds in parallel.
///
/// `make` builds an unfit classifier for each fold.
///
/// # Errors
///
/// Same conditions as [`cross_validate`].
pub fn cross_validate_parallel<C, F>(
    make: F,
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
) -> Result<CrossValidationResult>
where
    C: DecisionClassifier,
    F: Fn() -> C + Sync,
{
    validate_inputs(x, y, folds)?;

    let scores = folds
        .folds()
        .par_iter()
        .enumerate()
        .map(|(i, fold)| {
            let mut clf = make();
            evaluate_fold(&mut clf, x, y, i, fold, metric)
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok(CrossValidationResult { scores })
}

/// Mean cross-validated score of `clf` under `metric`.
///
/// # Example
///
/// ```rust
/// use tweetsense::prelude::*;
/// use tweetsense::model_selection::{cv_performance, StratifiedKFold};
///
/// let x = Matrix::from_vec(6, 2, vec![
///     1.0, 0.0,
///     1.0, 0.0,
///     1.0, 0.0,
///     0.0, 1.0,
///     0.0, 1.0,
///     0.0, 1.0,
/// ]).expect("6x2 matrix");
/// let y = Vector::from_slice(&[1.0, 1.0, 1.0, -1.0, -1.0, -1.0]);
/// let folds = StratifiedKFold::new(3).split(&y).expect("valid folds");
///
/// let mut svm = LinearSVM::new().with_c(10.0);
/// let score = cv_performance(&mut svm, &x, &y, &folds, Metric::Accuracy)
///     .expect("cv should succeed");
/// assert!(score > 0.5);
/// ```
///
/// # Errors
///
/// Same conditions as [`cross_validate`].
pub fn cv_performance<C>(
    clf: &mut C,
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
) -> Result<f32>
where
    C: DecisionClassifier + ?Sized,
{
    Ok(cross_validate(clf, x, y, folds, metric)?.mean())
}

/// Mean cross-validated score with folds evaluated in parallel.
///
/// Returns exactly what [`cv_performance`] returns for the same inputs.
///
/// # Errors
///
/// Same conditions as [`cross_validate`].
pub fn cv_performance_parallel<C, F>(
    make: F,
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
) -> Result<f32>
where
    C: DecisionClassifier,
    F: Fn() -> C + Sync,
{
    Ok(cross_validate_parallel(make, x, y, folds, metric)?.mean())
}

/// Cross-validated score for one candidate hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    /// Regularization strength
    pub c: f32,
    /// Mean score across folds, or [`INVALID_SCORE`] for an out-of-range `c`
    pub score: f32,
    /// Standard deviation of the fold scores
    pub std: f32,
    /// Lowest fold score
    pub min: f32,
    /// Highest fold score
    pub max: f32,
}

impl CandidateScore {
    fn from_folds(c: f32, result: &CrossValidationResult) -> Self {
        Self {
            c,
            score: result.mean(),
            std: result.std(),
            min: result.min(),
            max: result.max(),
        }
    }

    fn invalid(c: f32) -> Self {
        Self {
            c,
            score: INVALID_SCORE,
            std: 0.0,
            min: INVALID_SCORE,
            max: INVALID_SCORE,
        }
    }
}

/// Outcome of a hyperparameter search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    /// Metric the search maximized
    pub metric: Metric,
    /// Chosen regularization strength
    pub best_c: f32,
    /// Its mean cross-validated score
    pub best_score: f32,
    /// Every candidate in search order
    pub candidates: Vec<CandidateScore>,
}

/// Searches `candidates` in order and keeps the best mean CV score.
///
/// A candidate replaces the current best when its score is greater than
/// *or equal to* it, so on exact ties the candidate searched later wins.
/// Candidates that are not finite and positive are not fit; they score
/// [`INVALID_SCORE`].
///
/// # Errors
///
/// Returns an error if `candidates` is empty, or on any cross-validation
/// error.
pub fn select_param<C, F>(
    make: F,
    candidates: &[f32],
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
    execution: Execution,
) -> Result<SelectionResult>
where
    C: DecisionClassifier,
    F: Fn(f32) -> C + Sync,
{
    if candidates.is_empty() {
        return Err(TweetsenseError::EmptyInput(
            "hyperparameter grid has no candidates".to_string(),
        ));
    }

    let mut best_c = candidates[0];
    let mut best_score = f32::NEG_INFINITY;
    let mut scored = Vec::with_capacity(candidates.len());

    for &c in candidates {
        let candidate = if c.is_finite() && c > 0.0 {
            let result = match execution {
                Execution::Sequential => cross_validate(&mut make(c), x, y, folds, metric)?,
                Execution::Parallel => cross_validate_parallel(|| make(c), x, y, folds, metric)?,
            };
            CandidateScore::from_folds(c, &result)
        } else {
            warn!(c, "regularization strength must be positive and finite");
            CandidateScore::invalid(c)
        };
        let score = candidate.score;
        info!(%metric, c, score, std = candidate.std, "candidate evaluated");

        if score >= best_score {
            best_score = score;
            best_c = c;
        }
        scored.push(candidate);
    }

    info!(%metric, best_c, best_score, "hyperparameter selected");

    Ok(SelectionResult {
        metric,
        best_c,
        best_score,
        candidates: scored,
    })
}

/// Picks the linear SVM regularization strength from [`C_RANGE`] that
/// maximizes the mean CV score under `metric`.
///
/// # Errors
///
/// Returns an error on any cross-validation error.
pub fn select_param_linear(
    x: &Matrix<f32>,
    y: &Vector<f32>,
    folds: &FoldAssignment,
    metric: Metric,
) -> Result<SelectionResult> {
    select_param(
        |c| LinearSVM::new().with_c(c),
        &C_RANGE,
        x,
        y,
        folds,
        metric,
        Execution::Sequential,
    )
}

/// Scores an already-fit classifier on held-out data.
///
/// # Errors
///
/// Returns an error if `x` and `y` disagree on length, or if the
/// classifier cannot score `x`.
pub fn performance_test<C>(clf: &C, x: &Matrix<f32>, y: &Vector<f32>, metric: Metric) -> Result<f32>
where
    C: DecisionClassifier + ?Sized,
{
    if x.n_rows() != y.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{} labels", x.n_rows()),
            format!("{} labels", y.len()),
        ));
    }

    let predictions = clf.decision_function(x)?;
    if predictions.len() != y.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{} predictions", y.len()),
            format!("{} predictions", predictions.len()),
        ));
    }

    Ok(performance(y.as_slice(), &predictions, metric))
}
