//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use tweetsense::prelude::*;
//! ```

pub use crate::classification::LinearSVM;
pub use crate::error::{Result, TweetsenseError};
pub use crate::metrics::{performance, Metric};
pub use crate::model_selection::{
    cv_performance, performance_test, select_param_linear, FoldAssignment, KFold,
    StratifiedKFold,
};
pub use crate::primitives::{Matrix, Vector};
pub use crate::text::{BinaryVectorizer, PunctuationTokenizer, Vocabulary};
pub use crate::traits::{DecisionClassifier, Tokenizer};
