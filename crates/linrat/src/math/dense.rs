use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{check_dimension, check_index, LinAlgError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;
use crate::math::vector::{dot_slices, Vector};

/// Row-major matrix over one contiguous buffer; entry `(r, c)` lives at `r * cols + c`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDense<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct DenseMatrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawDense<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawDense<T>> for DenseMatrix<T> {
    type Error = LinAlgError;

    fn try_from(raw: RawDense<T>) -> Result<Self> {
        DenseMatrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

impl<T> DenseMatrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(LinAlgError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(LinAlgError::InvalidShape {
                    rows: nrows,
                    cols: ncols,
                    len: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_coords(&self, row: usize, col: usize) -> Result<()> {
        check_index(row, self.rows)?;
        check_index(col, self.cols)
    }

    /// # Panics
    /// When `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> DenseMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        DenseMatrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> DenseMatrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn column(&self, col: usize) -> Result<Vector<T>> {
        check_index(col, self.cols)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, col)].clone())
            .collect())
    }

    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        check_index(row, self.rows)?;
        Ok(Vector::from_slice(self.row_slice(row)))
    }

    pub fn set_all_values_to(&mut self, value: T) {
        for entry in self.data.iter_mut() {
            *entry = value.clone();
        }
    }
}

impl<T: Scalar> DenseMatrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    pub fn square(size: usize) -> Self {
        Self::zeros(size, size)
    }

    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::square(size);
        for i in 0..size {
            let offset = matrix.offset(i, i);
            matrix.data[offset] = T::one();
        }
        matrix
    }
}

impl DenseMatrix<f64> {
    /// Overwrite every entry with a uniform draw from `[-0.5, 0.5)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::trace!("randomizing {}x{} dense matrix", self.rows, self.cols);
        for entry in self.data.iter_mut() {
            *entry = rng.gen::<f64>() - 0.5;
        }
    }
}

impl<T: Scalar> Matrix<T> for DenseMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_coords(row, col)?;
        Ok(self.data[self.offset(row, col)].clone())
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_coords(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    fn reset(&mut self) {
        log::trace!("resetting {}x{} dense matrix", self.rows, self.cols);
        self.set_all_values_to(T::zero());
    }

    fn for_each(&self, visitor: &mut dyn FnMut(usize, usize, &T)) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                visitor(row, col, &self.data[self.offset(row, col)]);
            }
        }
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        check_index(row1, self.rows)?;
        check_index(row2, self.rows)?;
        if row1 == row2 {
            return Ok(());
        }
        for col in 0..self.cols {
            let a = self.offset(row1, col);
            let b = self.offset(row2, col);
            self.data.swap(a, b);
        }
        Ok(())
    }

    fn add_row(&mut self, source: usize, destination: usize, scalar: &T) -> Result<()> {
        check_index(source, self.rows)?;
        check_index(destination, self.rows)?;
        for col in 0..self.cols {
            let src = self.offset(source, col);
            let dst = self.offset(destination, col);
            let delta = self.data[src].clone() * scalar.clone();
            self.data[dst] = self.data[dst].clone() + delta;
        }
        Ok(())
    }

    fn scale_row(&mut self, row: usize, scalar: &T) -> Result<()> {
        check_index(row, self.rows)?;
        let start = self.offset(row, 0);
        for entry in self.data[start..start + self.cols].iter_mut() {
            *entry = entry.clone() * scalar.clone();
        }
        Ok(())
    }

    fn multiply(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        check_dimension(self.cols, vector.dimension())?;
        Ok((0..self.rows)
            .map(|row| dot_slices(self.row_slice(row), vector.as_slice()))
            .collect())
    }

    fn name(&self) -> &str {
        "dense"
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// One line per row, entries separated by tabs.
impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row != 0 {
                writeln!(f)?;
            }
            for (col, value) in self.row_slice(row).iter().enumerate() {
                if col != 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
