//! linrat: vectors, dense and sparse matrices, exact fractions and permutations.
//!
//! The crate provides the data layer beneath elimination-style algorithms: a `Matrix` contract
//! shared by dense and sparse backings, the three row operations (swap, scale, scaled add),
//! an exact `Fraction` type that stays in lowest terms, and `Permutation` for recording and
//! undoing row exchanges. A few activation/loss helpers live in `functions`.
//!
//! Everything is single threaded and eager; errors are reported through `LinAlgError`.
pub mod config;
pub mod error;
pub mod factory;
pub mod functions;
pub mod math;
pub mod permutation;

pub use error::{LinAlgError, Result};
