//! Index permutations built from transpositions.
//!
//! A [`Permutation`] records a sequence of index swaps, e.g. the row exchanges made while
//! pivoting, so the reordering can be replayed on other data or undone with [`Permutation::inverse`].

use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

use crate::error::{check_index, Result};
use crate::math::Vector;

/// Swaps `i` and `j`, fixes every other index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transposition {
    i: usize,
    j: usize,
}

impl Transposition {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    pub fn i(&self) -> usize {
        self.i
    }

    pub fn j(&self) -> usize {
        self.j
    }

    pub fn apply(&self, value: usize) -> usize {
        if value == self.i {
            self.j
        } else if value == self.j {
            self.i
        } else {
            value
        }
    }
}

impl fmt::Display for Transposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.i, self.j)
    }
}

/// Append-only composition of transpositions, applied in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    transpositions: Vec<Transposition>,
}

impl Permutation {
    /// The identity.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(&mut self, transposition: Transposition) {
        self.transpositions.push(transposition);
    }

    pub fn apply(&self, value: usize) -> usize {
        self.transpositions
            .iter()
            .fold(value, |acc, transposition| transposition.apply(acc))
    }

    /// Transpositions are involutions, so reversing the order inverts the composition.
    pub fn inverse(&self) -> Permutation {
        self.transpositions.iter().rev().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.transpositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transpositions.is_empty()
    }

    pub fn transpositions(&self) -> &[Transposition] {
        &self.transpositions
    }

    /// Move entry `k` of `vector` to position `apply(k)`.
    ///
    /// Fails with `IndexOutOfRange` if a recorded transposition points past the vector.
    pub fn apply_to_vector<T: Clone>(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        let dimension = vector.dimension();
        for transposition in &self.transpositions {
            check_index(transposition.i, dimension)?;
            check_index(transposition.j, dimension)?;
        }
        let mut permuted = vector.clone();
        for (index, value) in vector.entries() {
            permuted[self.apply(index)] = value.clone();
        }
        Ok(permuted)
    }
}

impl FromIterator<Transposition> for Permutation {
    fn from_iter<I: IntoIterator<Item = Transposition>>(iter: I) -> Self {
        Self {
            transpositions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Transposition> for Permutation {
    fn extend<I: IntoIterator<Item = Transposition>>(&mut self, iter: I) {
        self.transpositions.extend(iter);
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.transpositions.is_empty() {
            return write!(f, "id");
        }
        for transposition in &self.transpositions {
            write!(f, "{}", transposition)?;
        }
        Ok(())
    }
}
