//! Vectors, matrices and exact fractions.
//!
//! `Vector` and the two `Matrix` backings are generic over a [`Scalar`] domain, so the same row
//! operations run on `f64` and on exact [`Fraction`]s.
pub mod dense;
pub mod fraction;
pub mod matrix;
pub mod scalar;
pub mod sparse;
pub mod vector;

pub use dense::DenseMatrix;
pub use fraction::{gcd, Fraction};
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use sparse::SparseMatrix;
pub use vector::Vector;
