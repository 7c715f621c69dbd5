use crate::error::Result;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

/// Contract shared by the dense and sparse backings.
///
/// Elimination-style code written against `Matrix<T>` does not need to know how entries are
/// stored. The three row operations (`swap_rows`, `scale_row`, `add_row`) are the full
/// instruction set for Gaussian elimination.
pub trait Matrix<T: Scalar> {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn get(&self, row: usize, col: usize) -> Result<T>;

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    /// Restore every entry to zero (dense) or to the implicit default (sparse).
    fn reset(&mut self);

    /// Dense matrices visit every coordinate in row-major order. Sparse matrices visit only
    /// stored entries, in no particular order.
    fn for_each(&self, visitor: &mut dyn FnMut(usize, usize, &T));

    fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()>;

    /// `row[destination] += row[source] * scalar`, column by column.
    fn add_row(&mut self, source: usize, destination: usize, scalar: &T) -> Result<()>;

    fn scale_row(&mut self, row: usize, scalar: &T) -> Result<()>;

    /// Matrix-vector product. `vector` must have `cols()` entries; the result has `rows()`.
    fn multiply(&self, vector: &Vector<T>) -> Result<Vector<T>>;

    /// Human readable backing name, used in logs.
    fn name(&self) -> &str {
        "matrix"
    }
}
