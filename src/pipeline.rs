//! End-to-end sentiment pipeline.
//!
//! 1. Build the vocabulary from every tweet and vectorize them.
//! 2. Split off the first `train_size` examples for training, in file order.
//! 3. For each metric, pick C for a linear SVM by K-fold CV on the training split.
//! 4. Fit one SVM on the whole training split and score it on the held-out rest.

use crate::classification::LinearSVM;
use crate::config::PipelineConfig;
use crate::data::{read_lines, read_vector_file};
use crate::error::{Result, TweetsenseError};
use crate::metrics::Metric;
use crate::model_selection::{
    performance_test, select_param, train_test_split, FoldAssignment, KFold, SelectionResult,
    StratifiedKFold, C_RANGE,
};
use crate::primitives::Vector;
use crate::text::BinaryVectorizer;
use crate::traits::DecisionClassifier;
use serde::Serialize;
use tracing::info;

/// Held-out score under one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScore {
    /// Metric used
    pub metric: Metric,
    /// Score on the held-out split
    pub score: f32,
}

/// Everything a pipeline run measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Examples read (rows of the feature matrix)
    pub n_examples: usize,
    /// Vocabulary size (columns of the feature matrix)
    pub n_features: usize,
    /// Examples used for selection and the final fit
    pub n_train: usize,
    /// Held-out examples
    pub n_test: usize,
    /// Number of CV folds
    pub n_folds: usize,
    /// Whether folds were stratified by label
    pub stratified: bool,
    /// One search per configured metric, in configuration order
    pub selections: Vec<SelectionResult>,
    /// Regularization strength of the final model
    pub final_c: f32,
    /// Held-out score per configured metric
    pub test_scores: Vec<MetricScore>,
}

/// Reads the configured tweet and label files and runs the pipeline.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or on any
/// error from [`run_on`].
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let tweets = read_lines(&config.data.tweets_path)?;
    let labels = read_vector_file(&config.data.labels_path)?;
    run_on(&tweets, &labels, config)
}

/// Runs the pipeline on tweets and labels already in memory.
///
/// # Errors
///
/// - [`TweetsenseError::DimensionMismatch`] if tweets and labels differ in count
/// - [`TweetsenseError::InvalidHyperparameter`] if `train_size` leaves either split
///   empty or the training split has fewer examples than folds
/// - [`TweetsenseError::InvalidLabel`] if a label is not `+1` or `-1`
/// - any configuration validation error
pub fn run_on<S: AsRef<str>>(
    tweets: &[S],
    labels: &Vector<f32>,
    config: &PipelineConfig,
) -> Result<PipelineReport> {
    config.validate()?;
    let metrics = config.model.resolved_metrics()?;

    if tweets.len() != labels.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{} labels (one per tweet)", tweets.len()),
            format!("{} labels", labels.len()),
        ));
    }

    let (vocabulary, x) = BinaryVectorizer::new().fit_transform(tweets)?;
    info!(
        n_examples = x.n_rows(),
        n_features = x.n_cols(),
        "feature matrix built"
    );
    if vocabulary.is_empty() {
        return Err(TweetsenseError::EmptyInput(
            "tweets contain no tokens".to_string(),
        ));
    }

    let (x_train, x_test, y_train, y_test) = train_test_split(&x, labels, config.data.train_size)?;
    let folds = make_folds(config, &y_train)?;

    let make = |c: f32| {
        LinearSVM::new()
            .with_c(c)
            .with_max_iter(config.model.max_iter)
            .with_learning_rate(config.model.learning_rate)
    };

    let mut selections = Vec::with_capacity(metrics.len());
    for &metric in &metrics {
        let selection = select_param(
            make,
            &C_RANGE,
            &x_train,
            &y_train,
            &folds,
            metric,
            config.cv.execution(),
        )?;
        selections.push(selection);
    }

    let final_c = match config.model.final_c {
        Some(c) => c,
        None => selections
            .first()
            .map(|s| s.best_c)
            .ok_or_else(|| TweetsenseError::EmptyInput("no metrics configured".to_string()))?,
    };

    let mut clf = make(final_c);
    clf.fit(&x_train, &y_train)?;

    let mut test_scores = Vec::with_capacity(metrics.len());
    for &metric in &metrics {
        let score = performance_test(&clf, &x_test, &y_test, metric)?;
        info!(%metric, final_c, score, "held-out performance");
        test_scores.push(MetricScore { metric, score });
    }

    Ok(PipelineReport {
        n_examples: x.n_rows(),
        n_features: x.n_cols(),
        n_train: x_train.n_rows(),
        n_test: x_test.n_rows(),
        n_folds: folds.len(),
        stratified: config.cv.stratified,
        selections,
        final_c,
        test_scores,
    })
}

fn make_folds(config: &PipelineConfig, y_train: &Vector<f32>) -> Result<FoldAssignment> {
    if config.cv.stratified {
        StratifiedKFold::new(config.cv.n_folds).split(y_train)
    } else {
        KFold::new(config.cv.n_folds).split(y_train.len())
    }
}
