//! Error types for tweetsense operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Result type alias for tweetsense operations.
pub type Result<T> = std::result::Result<T, TweetsenseError>;

/// Main error type for tweetsense operations.
///
/// Out-of-vocabulary tokens and unknown metric names passed as raw strings
/// are *not* represented here: the former are dropped during
/// vectorization and the latter yield [`crate::metrics::INVALID_SCORE`].
///
/// # Examples
///
/// ```
/// use tweetsense::error::TweetsenseError;
///
/// let err = TweetsenseError::DimensionMismatch {
///     expected: "630 labels".to_string(),
///     actual: "629 labels".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum TweetsenseError {
    /// Matrix/vector dimensions don't match for the operation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// An operation received no data where at least one item is required.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Metric name outside `accuracy`, `f1_score`, `auroc`.
    #[error("unknown metric '{0}', expected one of: accuracy, f1_score, auroc")]
    UnknownMetric(String),

    /// Classifier scored before it was fit.
    #[error("classifier has not been fit")]
    NotFitted,

    /// Training label outside `{-1, +1}`.
    #[error("invalid label {value} at index {index}, expected -1 or +1")]
    InvalidLabel {
        /// Position in the label vector
        index: usize,
        /// Offending value
        value: f32,
    },

    /// A data file line could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TweetsenseError {
    /// Shorthand for a [`TweetsenseError::DimensionMismatch`] built from displayable parts.
    pub(crate) fn dimension_mismatch(
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
