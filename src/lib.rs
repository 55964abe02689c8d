//! Tweetsense: binary sentiment classification of tweets with linear SVMs.
//!
//! Tweets are lower-cased and split on whitespace after padding punctuation,
//! turned into binary bag-of-words vectors, and scored by a linear SVM whose
//! regularization strength is chosen by K-fold cross-validation.
//!
//! # Quick Start
//!
//! ```
//! use tweetsense::prelude::*;
//!
//! let tweets = [
//!     "love this!", "hate this.", "love it", "hate it",
//!     "so much love", "so much hate",
//! ];
//! let y = Vector::from_slice(&[1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
//!
//! let (vocab, x) = BinaryVectorizer::new().fit_transform(&tweets).unwrap();
//! assert!(vocab.contains("love"));
//!
//! let folds = StratifiedKFold::new(3).split(&y).unwrap();
//! let selection = select_param_linear(&x, &y, &folds, Metric::Accuracy).unwrap();
//!
//! let mut svm = LinearSVM::new().with_c(selection.best_c);
//! svm.fit(&x, &y).unwrap();
//! let accuracy = performance_test(&svm, &x, &y, Metric::Accuracy).unwrap();
//! assert!(accuracy > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`text`]: Tokenization, vocabulary building, and binary vectorization
//! - [`metrics`]: Accuracy, F1-score and AUROC over decision values
//! - [`model_selection`]: Fold assignment, cross-validation and C selection
//! - [`classification`]: Linear SVM
//! - [`data`]: Label and tweet file readers
//! - [`config`]: TOML pipeline configuration
//! - [`pipeline`]: End-to-end selection and held-out evaluation

pub mod classification;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod text;
pub mod traits;

pub use error::{Result, TweetsenseError};
pub use primitives::{Matrix, Vector};
pub use traits::{DecisionClassifier, Tokenizer};
