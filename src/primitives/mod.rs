//! Core compute primitives (Vector, Matrix).
//!
//! Feature matrices and label vectors flow through every stage of the
//! pipeline as these two types.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
