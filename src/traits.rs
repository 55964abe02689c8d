//! Core traits for tokenizers and classifiers.
//!
//! These traits define the seams between the feature pipeline, the
//! model-selection code, and whatever binary linear model sits behind it.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Splits a line of text into tokens.
pub trait Tokenizer {
    /// Tokenizes `text` into an ordered sequence of tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokenizer cannot process the input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Capability interface for a binary classifier with a continuous decision value.
///
/// Model selection depends only on these two operations, not on any
/// particular model family. Labels are `+1.0` / `-1.0`.
///
/// # Examples
///
/// ```
/// use tweetsense::prelude::*;
///
/// /// Scores every row by its first feature.
/// struct FirstFeature;
///
/// impl DecisionClassifier for FirstFeature {
///     fn fit(&mut self, _x: &Matrix<f32>, _y: &Vector<f32>) -> tweetsense::Result<()> {
///         Ok(())
///     }
///
///     fn decision_function(&self, x: &Matrix<f32>) -> tweetsense::Result<Vec<f32>> {
///         Ok((0..x.n_rows()).map(|i| x.get(i, 0)).collect())
///     }
/// }
///
/// let x = Matrix::from_vec(2, 1, vec![0.5, -0.5]).unwrap();
/// let scores = FirstFeature.decision_function(&x).unwrap();
/// assert_eq!(scores, vec![0.5, -0.5]);
/// ```
pub trait DecisionClassifier {
    /// Fits the model to training data, replacing any previous fit.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (dimension mismatch, empty data, etc.).
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()>;

    /// One continuous value per row of `x`; larger means more confidently positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fit or `x` has the wrong width.
    fn decision_function(&self, x: &Matrix<f32>) -> Result<Vec<f32>>;
}
