pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(TweetsenseError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_zero_rows_and_zero_cols() {
    let no_rows = Matrix::zeros(0, 4);
    assert_eq!(no_rows.shape(), (0, 4));
    assert!(no_rows.as_slice().is_empty());

    let no_cols = Matrix::zeros(3, 0);
    assert_eq!(no_cols.shape(), (3, 0));
    assert!(no_cols.row(2).is_empty());
}

#[test]
fn test_set_and_row() {
    let mut m = Matrix::zeros(2, 3);
    m.set(1, 2, 1.0);
    assert_eq!(m.row(1), &[0.0, 0.0, 1.0]);
    assert_eq!(m.row(0), &[0.0, 0.0, 0.0]);
    assert!((m.row_sum(1) - 1.0).abs() < 1e-6);
}

#[test]
fn test_select_rows_preserves_order() {
    let m = Matrix::from_vec(3, 2, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("3x2 matrix with 6 values");
    let picked = m.select_rows(&[2, 0]);
    assert_eq!(picked.shape(), (2, 2));
    assert_eq!(picked.as_slice(), &[5.0, 6.0, 1.0, 2.0]);
}

#[test]
fn test_select_rows_empty() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]).expect("2x2 matrix");
    let picked = m.select_rows(&[]);
    assert_eq!(picked.shape(), (0, 2));
}
