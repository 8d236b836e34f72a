//! Matrix inversion from a single LU factorization

use super::decompose::{LuDecomposition, decompose_with};
use crate::config::LuConfig;
use crate::error::Result;
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

impl<T: Scalar> LuDecomposition<T> {
    /// Compute `A^-1` column by column.
    ///
    /// Column `j` is the solution of `A x = e_j`; all columns share this
    /// factorization. No accuracy check is performed here, see
    /// [`verify_inverse`](crate::verify_inverse).
    pub fn inverse(&self) -> Result<Array2<T>> {
        let n = self.dim();
        let mut inverse = Array2::zeros((n, n));
        for j in 0..n {
            let mut e = Array1::zeros(n);
            e[j] = T::one();
            let column = self.solve(&e)?;
            inverse.column_mut(j).assign(&column);
        }
        Ok(inverse)
    }
}

/// Invert `a` using LU decomposition with partial pivoting
pub fn inverse_matrix<T: Scalar>(a: &Array2<T>) -> Result<Array2<T>> {
    inverse_matrix_with(a, &LuConfig::default())
}

/// [`inverse_matrix`] with explicit tolerances
pub fn inverse_matrix_with<T: Scalar>(a: &Array2<T>, config: &LuConfig) -> Result<Array2<T>> {
    let inverse = decompose_with(a, config)?.inverse()?;
    if config.verbosity > 0 {
        log::info!("Inverted {}x{} matrix with LU", inverse.nrows(), inverse.ncols());
    }
    Ok(inverse)
}
