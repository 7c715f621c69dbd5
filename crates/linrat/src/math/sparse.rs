//! Coordinate-map sparse matrix.
//!
//! Only explicitly written coordinates are stored; every other coordinate reads as the matrix's
//! `default_value`. A matrix is either bounded, with declared `rows x cols` that every
//! coordinate is checked against, or unbounded, in which case any coordinate is accepted and the
//! reported extent grows to one past the largest row and column written so far.
//!
//! # Row operations
//!
//! With a zero default, row operations only touch stored entries of the rows involved, so they
//! cost O(k) in the number of stored entries. With a non-zero default, implicit entries carry a
//! real value and `add_row`/`scale_row` run over every column in `0..cols()`.
//!
//! `swap_rows` only moves stored entries. Absent entries stay absent and keep reading as the
//! default, so a swap moves the non-default pattern between the two rows.

use std::collections::HashMap;

use crate::error::{check_dimension, check_index, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix<T = f64> {
    values: HashMap<(usize, usize), T>,
    default_value: T,
    bounds: Option<(usize, usize)>,
    extent: (usize, usize),
}

impl<T: Scalar> SparseMatrix<T> {
    /// Unbounded matrix.
    pub fn new(default_value: T) -> Self {
        Self {
            values: HashMap::new(),
            default_value,
            bounds: None,
            extent: (0, 0),
        }
    }

    /// Unbounded matrix with a zero default.
    pub fn zeros() -> Self {
        Self::new(T::zero())
    }

    /// Matrix that rejects coordinates outside `rows x cols`.
    pub fn with_bounds(rows: usize, cols: usize, default_value: T) -> Self {
        Self {
            values: HashMap::new(),
            default_value,
            bounds: Some((rows, cols)),
            extent: (0, 0),
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    pub fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    /// Number of explicitly stored entries.
    pub fn stored_len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.values.contains_key(&(row, col))
    }

    /// Stored entries in map order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.values.iter().map(|(&(row, col), value)| (row, col, value))
    }

    fn check_row(&self, row: usize) -> Result<()> {
        match self.bounds {
            Some((rows, _)) => check_index(row, rows),
            None => Ok(()),
        }
    }

    fn check_coords(&self, row: usize, col: usize) -> Result<()> {
        match self.bounds {
            Some((rows, cols)) => {
                check_index(row, rows)?;
                check_index(col, cols)
            }
            None => Ok(()),
        }
    }

    fn touch(&mut self, row: usize, col: usize) {
        if self.bounds.is_none() {
            self.extent.0 = self.extent.0.max(row + 1);
            self.extent.1 = self.extent.1.max(col + 1);
        }
    }

    fn store(&mut self, row: usize, col: usize, value: T) {
        self.touch(row, col);
        self.values.insert((row, col), value);
    }

    fn value_at(&self, row: usize, col: usize) -> T {
        self.values
            .get(&(row, col))
            .cloned()
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Columns a row operation on `row` has to visit.
    fn active_columns(&self, row: usize) -> Vec<usize> {
        if self.default_value.is_zero() {
            let mut cols: Vec<usize> = self
                .values
                .keys()
                .filter(|(r, _)| *r == row)
                .map(|&(_, c)| c)
                .collect();
            cols.sort_unstable();
            cols
        } else {
            (0..self.cols()).collect()
        }
    }
}

impl<T: Scalar> Matrix<T> for SparseMatrix<T> {
    fn rows(&self) -> usize {
        self.bounds.map_or(self.extent.0, |(rows, _)| rows)
    }

    fn cols(&self) -> usize {
        self.bounds.map_or(self.extent.1, |(_, cols)| cols)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_coords(row, col)?;
        Ok(self.value_at(row, col))
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_coords(row, col)?;
        self.store(row, col, value);
        Ok(())
    }

    fn reset(&mut self) {
        log::trace!("clearing {} stored sparse entries", self.values.len());
        self.values.clear();
        self.extent = (0, 0);
    }

    fn for_each(&self, visitor: &mut dyn FnMut(usize, usize, &T)) {
        for (&(row, col), value) in self.values.iter() {
            visitor(row, col, value);
        }
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        if row1 == row2 {
            return Ok(());
        }
        let keys: Vec<(usize, usize)> = self
            .values
            .keys()
            .filter(|(row, _)| *row == row1 || *row == row2)
            .copied()
            .collect();
        let moved: Vec<((usize, usize), T)> = keys
            .into_iter()
            .filter_map(|key| self.values.remove(&key).map(|value| (key, value)))
            .collect();
        for ((row, col), value) in moved {
            let target = if row == row1 { row2 } else { row1 };
            self.values.insert((target, col), value);
        }
        if self.bounds.is_none() {
            self.extent.0 = self.extent.0.max(row1.max(row2) + 1);
        }
        Ok(())
    }

    fn add_row(&mut self, source: usize, destination: usize, scalar: &T) -> Result<()> {
        self.check_row(source)?;
        self.check_row(destination)?;
        for col in self.active_columns(source) {
            let delta = self.value_at(source, col) * scalar.clone();
            let updated = self.value_at(destination, col) + delta;
            self.store(destination, col, updated);
        }
        Ok(())
    }

    fn scale_row(&mut self, row: usize, scalar: &T) -> Result<()> {
        self.check_row(row)?;
        for col in self.active_columns(row) {
            let scaled = self.value_at(row, col) * scalar.clone();
            self.store(row, col, scaled);
        }
        Ok(())
    }

    fn multiply(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        check_dimension(self.cols(), vector.dimension())?;
        // Every row starts from default * sum(v); stored entries then add their difference.
        let base = vector
            .iter()
            .fold(T::zero(), |acc, v| acc + v.clone())
            * self.default_value.clone();
        let mut result = Vector::from_elem(self.rows(), base);
        for (&(row, col), value) in self.values.iter() {
            let delta = (value.clone() - self.default_value.clone()) * vector[col].clone();
            result[row] = result[row].clone() + delta;
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        if self.is_bounded() {
            "sparse-bounded"
        } else {
            "sparse"
        }
    }
}
