// =========================================================================
// FALSIFY-PERF: performance() contract
//
//   - performance(y, y) with accuracy is exactly 1.0
//   - sign(0) predictions are positive-class predictions
//   - every metric stays in [0, 1] on valid input
//   - AUROC depends only on the ordering of scores
// =========================================================================

use super::*;

/// FALSIFY-PERF-001: labels scored against themselves are perfectly accurate
#[test]
fn falsify_perf_001_self_accuracy_is_one() {
    let y = [1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0];
    let score = performance(&y, &y, Metric::Accuracy);
    assert_eq!(score, 1.0, "FALSIFIED PERF-001: accuracy(y, y) = {score}");
}

/// FALSIFY-PERF-002: exact zeros behave like +1 predictions under every binarized metric
#[test]
fn falsify_perf_002_zero_is_positive() {
    let y_true = [1.0, -1.0, 1.0, -1.0];
    let zeros = [0.0, 0.0, 0.0, 0.0];
    let ones = [1.0, 1.0, 1.0, 1.0];

    for metric in [Metric::Accuracy, Metric::F1Score] {
        let a = performance(&y_true, &zeros, metric);
        let b = performance(&y_true, &ones, metric);
        assert_eq!(a, b, "FALSIFIED PERF-002: {metric} zeros={a}, ones={b}");
    }
}

/// FALSIFY-PERF-003: scores stay within [0, 1]
#[test]
fn falsify_perf_003_scores_in_unit_interval() {
    let y_true = [1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0];
    let y_pred = [0.3, -2.0, -0.1, 4.0, 0.0, -0.5, 0.2, 1.5];

    for metric in Metric::ALL {
        let score = performance(&y_true, &y_pred, metric);
        assert!(
            (0.0..=1.0).contains(&score),
            "FALSIFIED PERF-003: {metric} = {score} outside [0, 1]"
        );
    }
}

/// FALSIFY-PERF-004: AUROC is invariant under a strictly increasing transform
#[test]
fn falsify_perf_004_auroc_rank_invariant() {
    let y_true = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
    let y_pred = [0.9f32, 0.4, 0.35, 0.8, 0.1, -0.2];
    let shifted: Vec<f32> = y_pred.iter().map(|p| p * 3.0 + 10.0).collect();

    let a = roc_auc_score(&y_true, &y_pred);
    let b = roc_auc_score(&y_true, &shifted);
    assert!(
        (a - b).abs() < 1e-6,
        "FALSIFIED PERF-004: auroc changed from {a} to {b} under monotone transform"
    );
}

/// FALSIFY-PERF-005: flipping every score flips AUROC around 0.5
#[test]
fn falsify_perf_005_auroc_negation() {
    let y_true = [1.0, -1.0, 1.0, -1.0, -1.0];
    let y_pred = [0.7f32, 0.1, 0.3, 0.5, -0.4];
    let negated: Vec<f32> = y_pred.iter().map(|p| -p).collect();

    let a = roc_auc_score(&y_true, &y_pred);
    let b = roc_auc_score(&y_true, &negated);
    assert!(
        (a + b - 1.0).abs() < 1e-6,
        "FALSIFIED PERF-005: auroc={a}, auroc(-s)={b}, sum != 1"
    );
}
