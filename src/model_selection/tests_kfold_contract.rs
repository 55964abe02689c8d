// =========================================================================
// FALSIFY-KF: fold-assignment contract
//
// Every fold assignment must partition the samples: each index appears in
// exactly one validation set, and train/test never overlap within a fold.
// =========================================================================

use super::*;

fn labels(pattern: &[f32]) -> Vector<f32> {
    Vector::from_slice(pattern)
}

fn assert_partition(folds: &FoldAssignment, n: usize) {
    let mut test_count = vec![0usize; n];
    for (f, fold) in folds.iter().enumerate() {
        assert_eq!(
            fold.train.len() + fold.test.len(),
            n,
            "fold {f} must cover every sample"
        );
        for &i in &fold.test {
            assert!(!fold.train.contains(&i), "fold {f}: index {i} in both sets");
            test_count[i] += 1;
        }
        assert!(fold.test.windows(2).all(|w| w[0] < w[1]), "fold {f} test unsorted");
        assert!(fold.train.windows(2).all(|w| w[0] < w[1]), "fold {f} train unsorted");
    }
    assert!(
        test_count.iter().all(|&c| c == 1),
        "each sample must be validated exactly once: {test_count:?}"
    );
}

/// FALSIFY-KF-001: KFold yields exactly k folds
#[test]
fn falsify_kf_001_kfold_split_count() {
    for k in 2..=6 {
        let folds = KFold::new(k).split(23).expect("valid folds");
        assert_eq!(folds.len(), k);
        assert_eq!(folds.n_samples(), 23);
    }
}

/// FALSIFY-KF-002: KFold partitions the samples, shuffled or not
#[test]
fn falsify_kf_002_kfold_partition() {
    assert_partition(&KFold::new(4).split(10).expect("valid folds"), 10);
    assert_partition(
        &KFold::new(4).with_random_state(7).split(10).expect("valid folds"),
        10,
    );
}

/// FALSIFY-KF-003: KFold puts the remainder in the first folds
#[test]
fn falsify_kf_003_kfold_remainder_first() {
    let folds = KFold::new(3).split(10).expect("valid folds");
    let sizes: Vec<usize> = folds.iter().map(|f| f.test.len()).collect();
    assert_eq!(sizes, vec![4, 3, 3]);
    assert_eq!(folds.folds()[0].test, vec![0, 1, 2, 3]);
}

/// FALSIFY-KF-004: StratifiedKFold keeps the class ratio in every fold
#[test]
fn falsify_kf_004_stratified_ratio() {
    // 12 positives, 6 negatives
    let mut pattern = vec![1.0f32; 12];
    pattern.extend(vec![-1.0f32; 6]);
    let y = labels(&pattern);

    let folds = StratifiedKFold::new(3).split(&y).expect("valid folds");
    assert_partition(&folds, 18);
    for fold in &folds {
        let pos = fold.test.iter().filter(|&&i| y[i] > 0.0).count();
        let neg = fold.test.len() - pos;
        assert_eq!((pos, neg), (4, 2));
    }
}

/// FALSIFY-KF-005: when every class leaves leftovers, each fold still
/// matches the overall class ratio as closely as integer sizes allow
#[test]
fn falsify_kf_005_stratified_leftovers_keep_ratio() {
    // 7 negatives and 7 positives over 4 folds: both classes leave 3 leftovers
    let pattern: Vec<f32> = (0..14).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let y = labels(&pattern);

    let folds = StratifiedKFold::new(4).split(&y).expect("valid folds");
    assert_partition(&folds, 14);
    for fold in &folds {
        let pos = fold.test.iter().filter(|&&i| y[i] > 0.0).count();
        let neg = fold.test.len() - pos;
        assert_eq!(pos, neg, "fold {:?}", fold.test);
    }
    let sizes: Vec<usize> = folds.iter().map(|f| f.test.len()).collect();
    assert_eq!(sizes, vec![4, 4, 4, 2]);
}

/// FALSIFY-KF-005b: leftovers of every class go to the leading folds
#[test]
fn falsify_kf_005b_stratified_leftovers_to_first_folds() {
    let y = labels(&[-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]);

    let folds = StratifiedKFold::new(3).split(&y).expect("valid folds");
    let tests: Vec<Vec<usize>> = folds.iter().map(|f| f.test.clone()).collect();
    assert_eq!(tests, vec![vec![0, 1, 4, 5], vec![2, 6], vec![3, 7]]);
}

/// FALSIFY-KF-006: stratification never yields a single-class validation fold
/// when both classes have at least k members
#[test]
fn falsify_kf_006_stratified_both_classes_present() {
    let pattern = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0];
    let y = labels(&pattern);
    let folds = StratifiedKFold::new(3).split(&y).expect("valid folds");
    for fold in &folds {
        assert!(fold.test.iter().any(|&i| y[i] > 0.0));
        assert!(fold.test.iter().any(|&i| y[i] < 0.0));
    }
}

/// FALSIFY-KF-007: a seed fixes the assignment
#[test]
fn falsify_kf_007_seeded_reproducible() {
    let pattern: Vec<f32> = (0..30).map(|i| if i % 3 == 0 { -1.0 } else { 1.0 }).collect();
    let y = labels(&pattern);

    let a = StratifiedKFold::new(5).with_random_state(42).split(&y).expect("valid folds");
    let b = StratifiedKFold::new(5).with_random_state(42).split(&y).expect("valid folds");
    assert_eq!(a, b);
    assert_partition(&a, 30);

    let unshuffled = StratifiedKFold::new(5).split(&y).expect("valid folds");
    let again = StratifiedKFold::new(5).split(&y).expect("valid folds");
    assert_eq!(unshuffled, again);

    let k1 = KFold::new(5).with_random_state(3).split(30).expect("valid folds");
    let k2 = KFold::new(5).with_random_state(3).split(30).expect("valid folds");
    assert_eq!(k1, k2);
}

/// FALSIFY-KF-008: fewer than two folds is rejected
#[test]
fn falsify_kf_008_rejects_k_below_two() {
    assert!(matches!(
        KFold::new(1).split(10),
        Err(TweetsenseError::InvalidHyperparameter { .. })
    ));
    assert!(KFold::new(0).split(10).is_err());
    assert!(StratifiedKFold::new(1).split(&labels(&[1.0, -1.0])).is_err());
}

/// FALSIFY-KF-009: more folds than samples is rejected
#[test]
fn falsify_kf_009_rejects_more_folds_than_samples() {
    assert!(KFold::new(5).split(4).is_err());
    assert!(StratifiedKFold::new(3).split(&labels(&[1.0, -1.0])).is_err());
}

/// FALSIFY-KF-010: hand-built folds are validated
#[test]
fn falsify_kf_010_fold_assignment_validation() {
    let ok = FoldAssignment::new(
        4,
        vec![
            Fold {
                train: vec![2, 3],
                test: vec![0, 1],
            },
            Fold {
                train: vec![0, 1],
                test: vec![2, 3],
            },
        ],
    )
    .expect("valid folds");
    assert_partition(&ok, 4);

    let overlap = FoldAssignment::new(
        3,
        vec![Fold {
            train: vec![0, 1],
            test: vec![1, 2],
        }],
    );
    assert!(overlap.is_err());

    let out_of_range = FoldAssignment::new(
        3,
        vec![Fold {
            train: vec![0],
            test: vec![3],
        }],
    );
    assert!(matches!(
        out_of_range,
        Err(TweetsenseError::DimensionMismatch { .. })
    ));

    let empty_test = FoldAssignment::new(
        3,
        vec![Fold {
            train: vec![0, 1, 2],
            test: Vec::new(),
        }],
    );
    assert!(matches!(empty_test, Err(TweetsenseError::EmptyInput(_))));
}

/// FALSIFY-KF-011: reversing keeps the folds and flips their order
#[test]
fn falsify_kf_011_reversed() {
    let folds = KFold::new(3).split(9).expect("valid folds");
    let rev = folds.reversed();
    assert_eq!(rev.len(), 3);
    assert_eq!(rev.folds()[0], folds.folds()[2]);
    assert_eq!(rev.folds()[2], folds.folds()[0]);
    assert_eq!(rev.n_samples(), 9);
}
