//! Activation and loss functions over real vectors.

use crate::error::{check_dimension, LinAlgError, Result};
use crate::math::Vector;

pub fn sigmoid(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}

pub fn relu(value: f64) -> f64 {
    value.max(0.0)
}

/// Normalized exponentials. Inputs are shifted by their maximum before exponentiation, which
/// leaves the result unchanged but keeps large inputs finite.
pub fn softmax(vector: &Vector<f64>) -> Result<Vector<f64>> {
    let max = vector
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .ok_or(LinAlgError::EmptyVector)?;
    let exps: Vector<f64> = vector.iter().map(|v| (v - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    Ok(exps.iter().map(|v| v / total).collect())
}

pub fn mean_squared_error(lhs: &Vector<f64>, rhs: &Vector<f64>) -> Result<f64> {
    check_dimension(lhs.dimension(), rhs.dimension())?;
    if lhs.is_empty() {
        return Err(LinAlgError::EmptyVector);
    }
    let error: f64 = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(error / lhs.dimension() as f64)
}
