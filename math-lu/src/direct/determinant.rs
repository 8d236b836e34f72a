//! Determinant from the LU factors

use super::decompose::LuDecomposition;
use crate::permutation::Permutation;
use crate::traits::Scalar;
use ndarray::Array2;

/// det(A) = det(P) * prod(diag(U))
///
/// The sign of `P` comes from the transposition count recorded while the
/// permutation was built, not from its dense shape.
pub fn determinant<T: Scalar>(u: &Array2<T>, p: &Permutation) -> T {
    let product = u.diag().iter().fold(T::one(), |acc, &d| acc * d);
    if p.is_odd() { -product } else { product }
}

impl<T: Scalar> LuDecomposition<T> {
    /// Determinant of the factored matrix
    pub fn determinant(&self) -> T {
        determinant(self.u(), self.permutation())
    }
}
