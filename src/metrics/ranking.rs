//! Ranking metrics computed from continuous scores.

/// Area under the ROC curve.
///
/// Sorts by score descending and integrates the curve with the trapezoid
/// rule, treating every group of tied scores as one threshold. This equals
/// the probability that a random positive outranks a random negative, with
/// ties counted as one half.
///
/// Labels `> 0` are positive. Returns 0.0 when `y_true` has no positives
/// or no negatives, since the curve is undefined.
///
/// # Panics
///
/// Panics if vectors have different lengths.
///
/// # Examples
///
/// ```
/// use tweetsense::metrics::ranking::roc_auc_score;
///
/// let y_true = [1.0, 1.0, -1.0, -1.0];
/// assert_eq!(roc_auc_score(&y_true, &[0.9, 0.8, 0.2, 0.1]), 1.0);
/// assert_eq!(roc_auc_score(&y_true, &[0.1, 0.2, 0.8, 0.9]), 0.0);
/// assert_eq!(roc_auc_score(&y_true, &[0.5, 0.5, 0.5, 0.5]), 0.5);
/// ```
#[must_use]
pub fn roc_auc_score(y_true: &[f32], y_score: &[f32]) -> f32 {
    assert_eq!(y_true.len(), y_score.len(), "Vectors must have same length");

    let n_pos = y_true.iter().filter(|&&t| t > 0.0).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return 0.0;
    }

    let mut pairs: Vec<(f32, bool)> = y_score
        .iter()
        .zip(y_true.iter())
        .map(|(&s, &t)| (s, t > 0.0))
        .collect();
    pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut auc = 0.0f64;
    let (mut tp, mut fp) = (0usize, 0usize);
    let (mut prev_tp, mut prev_fp) = (0usize, 0usize);

    let mut i = 0;
    while i < pairs.len() {
        let score = pairs[i].0;
        loop {
            if pairs[i].1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
            // NaN never equals itself, so each NaN closes its own group
            if i == pairs.len() || pairs[i].0 != score {
                break;
            }
        }

        auc += (fp - prev_fp) as f64 * (tp + prev_tp) as f64 / 2.0;
        prev_tp = tp;
        prev_fp = fp;
    }

    (auc / (n_pos as f64 * n_neg as f64)) as f32
}
