//! Permuted forward/back substitution

use super::decompose::{LuDecomposition, decompose_with};
use crate::config::LuConfig;
use crate::error::{LuError, Result};
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

impl<T: Scalar> LuDecomposition<T> {
    /// Solve `A x = b` using the pre-computed factorization
    ///
    /// Applies `P` to `b`, then solves `L z = P b` and `U x = z`.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let n = self.dim();
        if b.len() != n {
            return Err(LuError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }

        let pb = self.permutation().apply(b.view());
        let z = forward_substitution(self.l(), &pb)?;
        back_substitution(self.u(), &z)
    }

    /// Solve `A X = B` for every column of `B`
    pub fn solve_matrix(&self, b: &Array2<T>) -> Result<Array2<T>> {
        let n = self.dim();
        if b.nrows() != n {
            return Err(LuError::DimensionMismatch {
                expected: n,
                got: b.nrows(),
            });
        }

        let mut x = Array2::zeros(b.raw_dim());
        for (j, column) in b.columns().into_iter().enumerate() {
            let xj = self.solve(&column.to_owned())?;
            x.column_mut(j).assign(&xj);
        }
        Ok(x)
    }
}

/// Solve `L z = b` for a unit lower triangular `L`
///
/// The diagonal of `L` is assumed to be 1 and is not read.
pub fn forward_substitution<T: Scalar>(l: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let n = check_triangular_dims(l, b)?;
    let mut z = Array1::zeros(n);
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..i {
            sum += l[[i, j]] * z[j];
        }
        z[i] = b[i] - sum;
    }
    Ok(z)
}

/// Solve `U x = z` for an upper triangular `U`
///
/// Fails with [`LuError::SingularMatrix`] if a diagonal entry is exactly zero.
pub fn back_substitution<T: Scalar>(u: &Array2<T>, z: &Array1<T>) -> Result<Array1<T>> {
    let n = check_triangular_dims(u, z)?;
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += u[[i, j]] * x[j];
        }
        let u_ii = u[[i, i]];
        if u_ii == T::zero() {
            return Err(LuError::SingularMatrix {
                column: i,
                pivot: 0.0,
            });
        }
        x[i] = (z[i] - sum) / u_ii;
    }
    Ok(x)
}

fn check_triangular_dims<T>(m: &Array2<T>, v: &Array1<T>) -> Result<usize> {
    let n = m.nrows();
    if m.ncols() != n {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: m.ncols(),
        });
    }
    if v.len() != n {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: v.len(),
        });
    }
    Ok(n)
}

/// Solve `A x = b` using LU decomposition
///
/// Convenience function that combines factorization and solve. Decomposition
/// errors are returned unchanged.
pub fn solve_linear_system<T: Scalar>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    solve_linear_system_with(a, b, &LuConfig::default())
}

/// [`solve_linear_system`] with explicit tolerances
pub fn solve_linear_system_with<T: Scalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &LuConfig,
) -> Result<Array1<T>> {
    let factorization = decompose_with(a, config)?;
    let x = factorization.solve(b)?;
    if config.verbosity > 0 {
        log::info!("Solved {}x{} system with LU", x.len(), x.len());
    }
    Ok(x)
}
