//! Fold assignments and data splitting.
//!
//! Partitioning is kept separate from scoring: a splitter produces a
//! [`FoldAssignment`] value, and the cross-validator only consumes it.

use crate::error::{Result, TweetsenseError};
use crate::primitives::{Matrix, Vector};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// One train/validation split. Both index lists are ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Indices used to fit the classifier
    pub train: Vec<usize>,
    /// Held-out indices used to score it
    pub test: Vec<usize>,
}

/// Ordered sequence of folds over `n_samples` examples.
///
/// # Examples
///
/// ```
/// use tweetsense::model_selection::KFold;
///
/// let folds = KFold::new(3).split(7).expect("7 samples fit in 3 folds");
/// assert_eq!(folds.len(), 3);
/// assert_eq!(folds.folds()[0].test, vec![0, 1, 2]);
/// assert_eq!(folds.folds()[2].train, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    n_samples: usize,
    folds: Vec<Fold>,
}

impl FoldAssignment {
    /// Wraps hand-built folds after checking them against `n_samples`.
    ///
    /// A zero-fold assignment is accepted here; cross-validating over it is
    /// what fails.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range, a test set is empty, or
    /// a fold's train and test sets overlap.
    pub fn new(n_samples: usize, folds: Vec<Fold>) -> Result<Self> {
        for (i, fold) in folds.iter().enumerate() {
            if fold.test.is_empty() {
                return Err(TweetsenseError::EmptyInput(format!(
                    "fold {i} has no validation examples"
                )));
            }

            let mut seen = vec![false; n_samples];
            for &idx in fold.train.iter().chain(fold.test.iter()) {
                if idx >= n_samples {
                    return Err(TweetsenseError::dimension_mismatch(
                        format!("indices below {n_samples}"),
                        format!("index {idx} in fold {i}"),
                    ));
                }
                if seen[idx] {
                    return Err(TweetsenseError::dimension_mismatch(
                        "disjoint train and test indices",
                        format!("index {idx} repeated in fold {i}"),
                    ));
                }
                seen[idx] = true;
            }
        }
        Ok(Self { n_samples, folds })
    }

    /// Number of examples the folds index into.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of folds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    /// True if there are no folds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Folds in iteration order.
    #[must_use]
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// The same folds, iterated last to first.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut folds = self.folds.clone();
        folds.reverse();
        Self {
            n_samples: self.n_samples,
            folds,
        }
    }

    /// Iterates over the folds.
    pub fn iter(&self) -> std::slice::Iter<'_, Fold> {
        self.folds.iter()
    }

    /// Builds folds from a per-sample fold id in `0..n_splits`.
    fn from_fold_ids(fold_of: &[usize], n_splits: usize) -> Self {
        let folds = (0..n_splits)
            .map(|f| {
                let (test, train): (Vec<usize>, Vec<usize>) =
                    (0..fold_of.len()).partition(|&i| fold_of[i] == f);
                Fold { train, test }
            })
            .collect();
        Self {
            n_samples: fold_of.len(),
            folds,
        }
    }
}

impl<'a> IntoIterator for &'a FoldAssignment {
    type Item = &'a Fold;
    type IntoIter = std::slice::Iter<'a, Fold>;

    fn into_iter(self) -> Self::IntoIter {
        self.folds.iter()
    }
}

fn check_n_splits(n_splits: usize, n_samples: usize) -> Result<()> {
    if n_splits < 2 {
        return Err(TweetsenseError::InvalidHyperparameter {
            param: "n_splits".to_string(),
            value: n_splits.to_string(),
            constraint: "at least 2".to_string(),
        });
    }
    if n_samples < n_splits {
        return Err(TweetsenseError::InvalidHyperparameter {
            param: "n_splits".to_string(),
            value: n_splits.to_string(),
            constraint: format!("no more than the number of samples ({n_samples})"),
        });
    }
    Ok(())
}

fn shuffle_in_place(indices: &mut [usize], rng: &mut rand::rngs::StdRng) {
    indices.shuffle(rng);
}

fn make_rng(random_state: Option<u64>) -> rand::rngs::StdRng {
    match random_state {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    }
}

/// K-Fold cross-validator.
///
/// Splits data into K consecutive folds. Each fold is used once as the
/// validation set while the remaining K-1 folds form the training set.
#[derive(Debug, Clone)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    random_state: Option<u64>,
}

impl KFold {
    /// Create a new K-Fold cross-validator.
    ///
    /// # Arguments
    ///
    /// * `n_splits` - Number of folds. Must be at least 2.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: false,
            random_state: None,
        }
    }

    /// Set random state for reproducible shuffling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true; // Shuffle is implied when random_state is set
        self
    }

    /// Assigns `n_samples` examples to folds.
    ///
    /// The first `n_samples % n_splits` folds receive one extra example.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_splits < 2` or `n_samples < n_splits`.
    pub fn split(&self, n_samples: usize) -> Result<FoldAssignment> {
        check_n_splits(self.n_splits, n_samples)?;

        let mut order: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            shuffle_in_place(&mut order, &mut make_rng(self.random_state));
        }

        let fold_size = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut fold_of = vec![0usize; n_samples];
        let mut start = 0;
        for f in 0..self.n_splits {
            let size = fold_size + usize::from(f < remainder);
            for &idx in &order[start..start + size] {
                fold_of[idx] = f;
            }
            start += size;
        }

        Ok(FoldAssignment::from_fold_ids(&fold_of, self.n_splits))
    }
}

/// Stratified K-Fold cross-validator.
///
/// Each class is cut into K contiguous blocks (in label order, or shuffled
/// order when shuffling is enabled), so every fold keeps the overall class
/// ratio as closely as integer sizes allow. Leftover examples of every class
/// go to the first folds, one each.
///
/// Classes are visited in ascending label order, so the assignment is fully
/// determined by the labels (and the seed, when shuffling).
///
/// # Example
///
/// ```rust
/// use tweetsense::model_selection::StratifiedKFold;
/// use tweetsense::primitives::Vector;
///
/// let y = Vector::from_slice(&[1.0, 1.0, 1.0, 1.0, -1.0, -1.0]);
/// let folds = StratifiedKFold::new(2).split(&y).expect("6 samples fit in 2 folds");
///
/// for fold in &folds {
///     let positives = fold.test.iter().filter(|&&i| y[i] > 0.0).count();
///     assert_eq!(positives, 2);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    random_state: Option<u64>,
}

impl StratifiedKFold {
    /// Create a new Stratified K-Fold cross-validator.
    ///
    /// # Arguments
    ///
    /// * `n_splits` - Number of folds. Must be at least 2.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: false,
            random_state: None,
        }
    }

    /// Set random state for reproducible shuffling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true;
        self
    }

    /// Generate stratified folds for the labels `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_splits < 2` or there are fewer labels than folds.
    pub fn split(&self, y: &Vector<f32>) -> Result<FoldAssignment> {
        let n_samples = y.len();
        check_n_splits(self.n_splits, n_samples)?;
        let k = self.n_splits;

        // Group indices by class label
        let mut class_indices: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (i, &label) in y.iter().enumerate() {
            class_indices.entry(label as i32).or_default().push(i);
        }

        if self.shuffle {
            let mut rng = make_rng(self.random_state);
            for indices in class_indices.values_mut() {
                shuffle_in_place(indices, &mut rng);
            }
        }

        let mut fold_of = vec![0usize; n_samples];
        for indices in class_indices.values() {
            let class_size = indices.len();
            let fold_size = class_size / k;
            let remainder = class_size % k;

            let mut start = 0;
            for f in 0..k {
                let end = start + fold_size + usize::from(f < remainder);
                for &idx in &indices[start..end] {
                    fold_of[idx] = f;
                }
                start = end;
            }
        }

        Ok(FoldAssignment::from_fold_ids(&fold_of, k))
    }
}

/// Splits the first `n_train` rows off as training data, keeping row order.
///
/// Returns `(x_train, x_test, y_train, y_test)`.
///
/// # Errors
///
/// Returns an error if `x` and `y` disagree on length, or if either side
/// of the split would be empty.
///
/// # Example
///
/// ```rust
/// use tweetsense::model_selection::train_test_split;
/// use tweetsense::primitives::{Matrix, Vector};
///
/// let x = Matrix::from_vec(4, 1, vec![0.0, 1.0, 2.0, 3.0]).expect("4x1 matrix");
/// let y = Vector::from_slice(&[1.0, -1.0, 1.0, -1.0]);
///
/// let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 3).expect("valid split");
/// assert_eq!(x_train.n_rows(), 3);
/// assert_eq!(x_test.as_slice(), &[3.0]);
/// assert_eq!(y_test.as_slice(), &[-1.0]);
/// # let _ = y_train;
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    x: &Matrix<f32>,
    y: &Vector<f32>,
    n_train: usize,
) -> Result<(Matrix<f32>, Matrix<f32>, Vector<f32>, Vector<f32>)> {
    let n_samples = x.n_rows();
    if n_samples != y.len() {
        return Err(TweetsenseError::dimension_mismatch(
            format!("{n_samples} labels"),
            format!("{} labels", y.len()),
        ));
    }
    if n_train == 0 || n_train >= n_samples {
        return Err(TweetsenseError::InvalidHyperparameter {
            param: "train_size".to_string(),
            value: n_train.to_string(),
            constraint: format!("between 1 and {}", n_samples.saturating_sub(1)),
        });
    }

    let train_idx: Vec<usize> = (0..n_train).collect();
    let test_idx: Vec<usize> = (n_train..n_samples).collect();

    Ok((
        x.select_rows(&train_idx),
        x.select_rows(&test_idx),
        y.select(&train_idx),
        y.select(&test_idx),
    ))
}

#[cfg(test)]
#[path = "tests_kfold_contract.rs"]
mod tests_kfold_contract;
