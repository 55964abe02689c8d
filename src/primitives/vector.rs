//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A 1D vector of values.
///
/// Label vectors in this crate hold `+1.0` / `-1.0`.
///
/// # Examples
///
/// ```
/// use tweetsense::primitives::Vector;
///
/// let y = Vector::from_slice(&[1.0, -1.0, 1.0]);
/// assert_eq!(y.len(), 3);
/// assert_eq!(y[1], -1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector taking ownership of the data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Gathers the given positions, in the given order, into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            data: indices.iter().map(|&i| self.data[i]).collect(),
        }
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_and_index() {
        let v = Vector::from_slice(&[1.0_f32, -1.0, 1.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], -1.0);
    }

    #[test]
    fn test_select() {
        let v = Vector::from_slice(&[10.0_f32, 20.0, 30.0, 40.0]);
        let picked = v.select(&[3, 1]);
        assert_eq!(picked.as_slice(), &[40.0, 20.0]);
    }

    #[test]
    fn test_empty() {
        let v: Vector<f32> = Vector::from_vec(Vec::new());
        assert!(v.is_empty());
        assert!(v.select(&[]).is_empty());
    }
}
