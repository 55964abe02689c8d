//! Linear classification with a hinge-loss support vector machine.
//!
//! [`LinearSVM`] is the concrete [`DecisionClassifier`] behind the default
//! pipeline. It fits `w·x + b` by stochastic subgradient descent on
//!
//! ```text
//! min  λ||w||² + (1/n) Σ max(0, 1 - yᵢ(w·xᵢ + b))     with λ = 1 / (2nC)
//! ```
//!
//! Binary bag-of-words rows are mostly zeros, so training only visits the
//! nonzero entries of each row.

use crate::error::{Result, TweetsenseError};
use crate::metrics::binarize;
use crate::primitives::{Matrix, Vector};
use crate::traits::DecisionClassifier;
use tracing::debug;

/// Linear Support Vector Machine for binary classification.
///
/// Labels must be `+1.0` or `-1.0`. Larger `C` means weaker regularization.
///
/// # Example
///
/// ```
/// use tweetsense::prelude::*;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     1.0, 0.0,
///     1.0, 0.0,
///     0.0, 1.0,
///     0.0, 1.0,
/// ]).unwrap();
/// let y = Vector::from_slice(&[1.0, 1.0, -1.0, -1.0]);
///
/// let mut svm = LinearSVM::new().with_c(10.0);
/// svm.fit(&x, &y).unwrap();
/// assert_eq!(svm.predict(&x).unwrap(), vec![1.0, 1.0, -1.0, -1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearSVM {
    /// Weights for each feature
    weights: Option<Vec<f32>>,
    /// Bias term
    bias: f32,
    /// Regularization parameter (default: 1.0)
    c: f32,
    /// Initial step size, decayed per epoch (default: 0.01)
    learning_rate: f32,
    /// Maximum epochs over the training set (default: 1000)
    max_iter: usize,
    /// Convergence tolerance on the per-epoch parameter change (default: 1e-4)
    tol: f32,
    /// Epochs run by the last fit
    n_iter: usize,
}

impl LinearSVM {
    /// Creates a new Linear SVM with default parameters.
    ///
    /// # Default Parameters
    ///
    /// - C: 1.0
    /// - `learning_rate`: 0.01
    /// - `max_iter`: 1000
    /// - tol: 1e-4
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
            c: 1.0,
            learning_rate: 0.01,
            max_iter: 1000,
            tol: 1e-4,
            n_iter: 0,
        }
    }

    /// Sets the regularization parameter C.
    #[must_use]
    pub fn with_c(mut self, c: f32) -> Self {
        self.c = c;
        self
    }

    /// Sets the learning rate for subgradient descent.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of epochs.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Regularization parameter C.
    #[must_use]
    pub fn c(&self) -> f32 {
        self.c
    }

    /// Learned weights, or `None` before the first fit.
    #[must_use]
    pub fn weights(&self) -> Option<&[f32]> {
        self.weights.as_deref()
    }

    /// Learned bias term.
    #[must_use]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Whether [`DecisionClassifier::fit`] has completed successfully.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Number of epochs run by the last fit.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Predicts `+1.0` or `-1.0` per row. A zero decision value maps to `+1.0`.
    ///
    /// # Errors
    ///
    /// Same as [`DecisionClassifier::decision_function`].
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<f32>> {
        Ok(binarize(&self.decision_function(x)?))
    }

    fn validate(&self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        if x.n_rows() != y.len() {
            return Err(TweetsenseError::dimension_mismatch(
                format!("{} labels", x.n_rows()),
                format!("{} labels", y.len()),
            ));
        }
        if x.n_rows() == 0 {
            return Err(TweetsenseError::EmptyInput(
                "cannot fit LinearSVM with 0 samples".to_string(),
            ));
        }
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(TweetsenseError::InvalidHyperparameter {
                param: "C".to_string(),
                value: self.c.to_string(),
                constraint: "a finite value > 0".to_string(),
            });
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(TweetsenseError::InvalidHyperparameter {
                param: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
                constraint: "a finite value > 0".to_string(),
            });
        }
        if let Some((index, &value)) = y
            .iter()
            .enumerate()
            .find(|(_, &v)| v != 1.0 && v != -1.0)
        {
            return Err(TweetsenseError::InvalidLabel { index, value });
        }
        Ok(())
    }
}

impl Default for LinearSVM {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionClassifier for LinearSVM {
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        self.validate(x, y)?;
        self.weights = None;
        self.bias = 0.0;
        self.n_iter = 0;

        let rows: Vec<SparseRow> = (0..x.n_rows())
            .map(|i| SparseRow::from_dense(x.row(i)))
            .collect();
        let n_samples = x.n_rows();
        let lambda = 1.0 / (2.0 * n_samples as f32 * self.c);

        let mut w = ScaledWeights::zeros(x.n_cols());
        let mut b = 0.0f32;
        let mut prev_w = w.v.clone();

        for epoch in 0..self.max_iter {
            let eta = self.learning_rate / (1.0 + epoch as f32 * 0.01);
            let shrink = 1.0 - 2.0 * eta * lambda;
            let prev_b = b;

            for (row, &y_i) in rows.iter().zip(y.iter()) {
                let margin = y_i * (w.dot(row) + b);
                w.scale_by(shrink);
                if margin < 1.0 {
                    w.add_scaled(row, eta * y_i);
                    b += eta * y_i;
                }
            }

            w.normalize();
            let mut change = (b - prev_b).powi(2);
            for (&cur, prev) in w.v.iter().zip(prev_w.iter_mut()) {
                change += (cur - *prev).powi(2);
                *prev = cur;
            }
            self.n_iter = epoch + 1;

            if change.sqrt() < self.tol {
                debug!(epoch, c = self.c, "LinearSVM converged");
                break;
            }
        }

        debug!(
            c = self.c,
            n_samples,
            n_features = x.n_cols(),
            epochs = self.n_iter,
            "LinearSVM fit"
        );
        self.weights = Some(w.v);
        self.bias = b;
        Ok(())
    }

    fn decision_function(&self, x: &Matrix<f32>) -> Result<Vec<f32>> {
        let weights = self.weights.as_ref().ok_or(TweetsenseError::NotFitted)?;
        if x.n_cols() != weights.len() {
            return Err(TweetsenseError::dimension_mismatch(
                format!("{} features", weights.len()),
                format!("{} features", x.n_cols()),
            ));
        }

        Ok((0..x.n_rows())
            .map(|i| {
                x.row(i)
                    .iter()
                    .zip(weights.iter())
                    .filter(|(&x_j, _)| x_j != 0.0)
                    .fold(self.bias, |acc, (&x_j, &w_j)| acc + w_j * x_j)
            })
            .collect())
    }
}

/// Nonzero `(feature, value)` pairs of one row.
struct SparseRow(Vec<(usize, f32)>);

impl SparseRow {
    fn from_dense(row: &[f32]) -> Self {
        Self(
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0.0)
                .map(|(j, &v)| (j, v))
                .collect(),
        )
    }
}

/// Weight vector stored as `scale * v`, so the per-sample regularization
/// shrink is a single multiply.
struct ScaledWeights {
    scale: f32,
    v: Vec<f32>,
}

impl ScaledWeights {
    /// Below this the scale is folded back into `v` to avoid underflow.
    const MIN_SCALE: f32 = 1e-6;

    fn zeros(n_features: usize) -> Self {
        Self {
            scale: 1.0,
            v: vec![0.0; n_features],
        }
    }

    fn dot(&self, row: &SparseRow) -> f32 {
        self.scale * row.0.iter().map(|&(j, x)| self.v[j] * x).sum::<f32>()
    }

    /// `w ← factor·w`. A non-positive factor would overshoot past zero, so
    /// the weights are clamped to zero instead.
    fn scale_by(&mut self, factor: f32) {
        if factor <= 0.0 {
            self.v.fill(0.0);
            self.scale = 1.0;
            return;
        }
        self.scale *= factor;
        if self.scale < Self::MIN_SCALE {
            self.normalize();
        }
    }

    /// `w ← w + step·x`
    fn add_scaled(&mut self, row: &SparseRow, step: f32) {
        let k = step / self.scale;
        for &(j, x) in &row.0 {
            self.v[j] += k * x;
        }
    }

    fn normalize(&mut self) {
        if self.scale != 1.0 {
            for v in &mut self.v {
                *v *= self.scale;
            }
            self.scale = 1.0;
        }
    }
}
