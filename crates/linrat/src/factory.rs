use crate::config::{MatrixConfig, MatrixKind};
use crate::error::Result;
use crate::math::{DenseMatrix, Matrix, SparseMatrix};

/// Build a boxed real matrix from a `MatrixConfig`.
pub fn build_matrix(config: &MatrixConfig) -> Result<Box<dyn Matrix<f64>>> {
    config.validate()?;
    let matrix: Box<dyn Matrix<f64>> = match config.kind {
        MatrixKind::Dense => Box::new(DenseMatrix::zeros(config.rows, config.cols)),
        MatrixKind::Sparse {
            default_value,
            bounded: true,
        } => Box::new(SparseMatrix::with_bounds(
            config.rows,
            config.cols,
            default_value,
        )),
        MatrixKind::Sparse {
            default_value,
            bounded: false,
        } => Box::new(SparseMatrix::new(default_value)),
    };
    log::debug!(
        "built {} matrix with shape {}x{}",
        matrix.name(),
        matrix.rows(),
        matrix.cols()
    );
    Ok(matrix)
}
