//! Pipeline configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives a
//! working configuration:
//!
//! ```toml
//! [data]
//! tweets_path = "data/tweets.txt"
//! labels_path = "data/labels.txt"
//! train_size = 560
//!
//! [cv]
//! n_folds = 5
//! stratified = true
//! parallel = false
//!
//! [model]
//! metrics = ["accuracy", "f1_score", "auroc"]
//! max_iter = 1000
//! learning_rate = 0.01
//! ```

use crate::error::{Result, TweetsenseError};
use crate::metrics::Metric;
use crate::model_selection::Execution;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for [`crate::pipeline::run`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Input files and the train/test boundary
    pub data: DataConfig,
    /// Cross-validation settings
    pub cv: CvConfig,
    /// Metrics and classifier settings
    pub model: ModelConfig,
}

/// Input files and the train/test boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// One tweet per line
    pub tweets_path: PathBuf,
    /// One `+1`/`-1` label per line, aligned with `tweets_path`
    pub labels_path: PathBuf,
    /// Leading examples used for training; the rest are held out
    pub train_size: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            tweets_path: PathBuf::from("data/tweets.txt"),
            labels_path: PathBuf::from("data/labels.txt"),
            train_size: 560,
        }
    }
}

/// Cross-validation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CvConfig {
    /// Number of folds
    pub n_folds: usize,
    /// Preserve the class ratio in every fold
    pub stratified: bool,
    /// Evaluate folds on the rayon thread pool
    pub parallel: bool,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            n_folds: 5,
            stratified: true,
            parallel: false,
        }
    }
}

impl CvConfig {
    /// Execution mode implied by `parallel`.
    #[must_use]
    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        }
    }
}

/// Metrics and classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Metric names; C is selected separately under each
    pub metrics: Vec<String>,
    /// Fixed C for the final model. When unset, the C chosen under the first metric is used.
    pub final_c: Option<f32>,
    /// Maximum training epochs
    pub max_iter: usize,
    /// Initial subgradient step size
    pub learning_rate: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.iter().map(|m| m.name().to_string()).collect(),
            final_c: None,
            max_iter: 1000,
            learning_rate: 0.01,
        }
    }
}

impl ModelConfig {
    /// Resolves metric names, rejecting unknown ones.
    ///
    /// # Errors
    ///
    /// Returns [`TweetsenseError::UnknownMetric`] for the first unrecognized name.
    pub fn resolved_metrics(&self) -> Result<Vec<Metric>> {
        self.metrics.iter().map(|name| name.parse()).collect()
    }
}

impl PipelineConfig {
    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TweetsenseError::Io`] if the file cannot be read, or
    /// [`TweetsenseError::Config`] / [`TweetsenseError::UnknownMetric`] if it
    /// does not parse or validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| match e {
                TweetsenseError::Config(msg) => {
                    TweetsenseError::Config(format!("{}: {msg}", path.display()))
                }
                other => other,
            })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TweetsenseError::Config`] for malformed TOML and any
    /// [`PipelineConfig::validate`] error.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TweetsenseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`TweetsenseError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TweetsenseError::Config(e.to_string()))
    }

    /// Checks value ranges that the types alone do not enforce.
    ///
    /// # Errors
    ///
    /// - [`TweetsenseError::Config`] for fewer than 2 folds, a zero train size,
    ///   an empty metric list, or a non-positive `final_c` / `learning_rate`
    /// - [`TweetsenseError::UnknownMetric`] for an unrecognized metric name
    pub fn validate(&self) -> Result<()> {
        if self.cv.n_folds < 2 {
            return Err(TweetsenseError::Config(format!(
                "cv.n_folds must be at least 2, got {}",
                self.cv.n_folds
            )));
        }
        if self.data.train_size == 0 {
            return Err(TweetsenseError::Config(
                "data.train_size must be at least 1".to_string(),
            ));
        }
        if self.model.metrics.is_empty() {
            return Err(TweetsenseError::Config(
                "model.metrics must name at least one metric".to_string(),
            ));
        }
        self.model.resolved_metrics()?;
        if let Some(c) = self.model.final_c {
            if !(c.is_finite() && c > 0.0) {
                return Err(TweetsenseError::Config(format!(
                    "model.final_c must be a finite value > 0, got {c}"
                )));
            }
        }
        if !(self.model.learning_rate.is_finite() && self.model.learning_rate > 0.0) {
            return Err(TweetsenseError::Config(format!(
                "model.learning_rate must be a finite value > 0, got {}",
                self.model.learning_rate
            )));
        }
        Ok(())
    }
}
