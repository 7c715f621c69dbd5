use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{check_dimension, check_index, LinAlgError, Result};
use crate::math::scalar::Scalar;

/// Fixed-dimension vector. The dimension is set at construction and never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn swap_values(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.dimension())?;
        check_index(j, self.dimension())?;
        self.data.swap(i, j);
        Ok(())
    }

    /// Visit `(index, value)` in ascending index order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, value) in self.data.iter().enumerate() {
            visitor(index, value);
        }
    }

    /// Iterator form of [`for_each`](Self::for_each); restartable.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.data.iter().enumerate()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T: Clone> Vector<T> {
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    pub fn from_elem(dimension: usize, value: T) -> Self {
        Self::from_vec(vec![value; dimension])
    }

    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.dimension())?;
        Ok(self.data[index].clone())
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.dimension())?;
        self.data[index] = value;
        Ok(())
    }
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(dimension: usize) -> Self {
        Self::from_vec(vec![T::zero(); dimension])
    }

    pub fn scale_value(&mut self, index: usize, scalar: &T) -> Result<()> {
        check_index(index, self.dimension())?;
        self.data[index] = self.data[index].clone() * scalar.clone();
        Ok(())
    }

    pub fn scale(&mut self, scalar: &T) {
        for value in self.data.iter_mut() {
            *value = value.clone() * scalar.clone();
        }
    }

    /// Elementwise `self += other`.
    pub fn add(&mut self, other: &Vector<T>) -> Result<()> {
        check_dimension(self.dimension(), other.dimension())?;
        for (lhs, rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *lhs = lhs.clone() + rhs.clone();
        }
        Ok(())
    }

    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        check_dimension(self.dimension(), other.dimension())?;
        Ok(dot_slices(&self.data, &other.data))
    }

    /// `v[destination] += v[source] * scalar`.
    pub fn add_scaled(&mut self, source: usize, destination: usize, scalar: &T) -> Result<()> {
        check_index(source, self.dimension())?;
        check_index(destination, self.dimension())?;
        let delta = self.data[source].clone() * scalar.clone();
        self.data[destination] = self.data[destination].clone() + delta;
        Ok(())
    }
}

impl<T: Scalar + PartialOrd> Vector<T> {
    /// Index of the largest value; the first occurrence wins on ties.
    pub fn argmax(&self) -> Result<usize> {
        let mut iter = self.data.iter().enumerate();
        let (mut max_index, mut max_value) = iter.next().ok_or(LinAlgError::EmptyVector)?;
        for (index, value) in iter {
            if value > max_value {
                max_index = index;
                max_value = value;
            }
        }
        Ok(max_index)
    }
}

impl Vector<f64> {
    /// Overwrite every component with a uniform draw from `[-0.5, 0.5)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = rng.gen::<f64>() - 0.5;
        }
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().copied().sum::<f64>() / self.dimension() as f64)
        }
    }
}

pub(crate) fn dot_slices<T: Scalar>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
