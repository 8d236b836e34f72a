//! Row permutations produced by partial pivoting
//!
//! A [`Permutation`] is stored in compact form: `source[i]` is the row of the
//! original matrix that ends up in row `i`, i.e. the dense permutation matrix
//! has `P[i][j] = 1` exactly when `j == source[i]`. Applying it to a vector
//! costs O(n).
//!
//! The number of row transpositions performed while building the permutation
//! is recorded alongside it, so the determinant sign never has to be
//! recovered from the shape of `P`.

use crate::traits::Scalar;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Row permutation with an explicit transposition count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    source: Vec<usize>,
    transpositions: usize,
}

impl Permutation {
    /// Identity permutation on `n` rows
    pub fn identity(n: usize) -> Self {
        Self {
            source: (0..n).collect(),
            transpositions: 0,
        }
    }

    /// Build a permutation from a source-row index array.
    ///
    /// Returns `None` if `source` is not a bijection on `0..source.len()`.
    /// The transposition count is taken as the minimal one, `n - cycles`.
    pub fn from_source_rows(source: Vec<usize>) -> Option<Self> {
        let n = source.len();
        let mut seen = vec![false; n];
        for &j in &source {
            if j >= n || seen[j] {
                return None;
            }
            seen[j] = true;
        }
        let cycles = count_cycles(&source);
        Some(Self {
            source,
            transpositions: n - cycles,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// True for the permutation of an empty matrix
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Swap output rows `a` and `b`, counting one transposition.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            self.source.swap(a, b);
            self.transpositions += 1;
        }
    }

    /// Source row for every output row
    pub fn source_rows(&self) -> &[usize] {
        &self.source
    }

    /// Row of the original matrix that lands in output row `i`
    pub fn source_row(&self, i: usize) -> usize {
        self.source[i]
    }

    /// Row transpositions performed while building this permutation
    pub fn transpositions(&self) -> usize {
        self.transpositions
    }

    /// Whether the permutation is odd
    pub fn is_odd(&self) -> bool {
        self.transpositions % 2 == 1
    }

    /// det(P): `-1.0` for an odd permutation, `1.0` otherwise
    pub fn sign(&self) -> f64 {
        if self.is_odd() { -1.0 } else { 1.0 }
    }

    /// det(P) derived from the cycle structure of the index array.
    ///
    /// Agrees with [`sign`](Self::sign) for every permutation; used to
    /// cross-check the recorded transposition count.
    pub fn cycle_parity_sign(&self) -> f64 {
        let n = self.source.len();
        if (n - count_cycles(&self.source)) % 2 == 1 {
            -1.0
        } else {
            1.0
        }
    }

    /// Inverse permutation (P^T)
    pub fn inverse(&self) -> Self {
        let mut source = vec![0; self.source.len()];
        for (i, &j) in self.source.iter().enumerate() {
            source[j] = i;
        }
        Self {
            source,
            transpositions: self.transpositions,
        }
    }

    /// Compute P * b
    pub fn apply<T: Scalar>(&self, b: ArrayView1<'_, T>) -> Array1<T> {
        self.source.iter().map(|&j| b[j]).collect()
    }

    /// Compute P * A by reordering rows
    pub fn apply_rows<T: Scalar>(&self, a: ArrayView2<'_, T>) -> Array2<T> {
        a.select(Axis(0), &self.source)
    }

    /// Dense 0/1 permutation matrix
    pub fn to_matrix<T: Scalar>(&self) -> Array2<T> {
        let n = self.source.len();
        let mut p = Array2::zeros((n, n));
        for (i, &j) in self.source.iter().enumerate() {
            p[[i, j]] = T::one();
        }
        p
    }
}

fn count_cycles(source: &[usize]) -> usize {
    let mut visited = vec![false; source.len()];
    let mut cycles = 0;
    for start in 0..source.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            i = source[i];
        }
    }
    cycles
}
