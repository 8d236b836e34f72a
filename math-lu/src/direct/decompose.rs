//! LU decomposition with partial pivoting
//!
//! Gaussian elimination in Doolittle form: `P * A = L * U` with `L` unit
//! lower triangular, `U` upper triangular, and `P` the row permutation chosen
//! by partial pivoting.

use crate::config::LuConfig;
use crate::error::{LuError, Result};
use crate::parallel::eliminate_below;
use crate::permutation::Permutation;
use crate::traits::Scalar;
use ndarray::{Array1, Array2, s};

/// Result of [`decompose`]
///
/// Holds the explicit `L` and `U` factors and the row permutation. Derived
/// operations (`solve`, `inverse`, `determinant`) reuse it without
/// refactoring the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T: Scalar> {
    l: Array2<T>,
    u: Array2<T>,
    permutation: Permutation,
}

impl<T: Scalar> LuDecomposition<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Unit lower triangular factor
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// Upper triangular factor; its diagonal holds the pivots
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// Row permutation `P`
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Consume the decomposition and return `(L, U, P)`
    pub fn into_parts(self) -> (Array2<T>, Array2<T>, Permutation) {
        (self.l, self.u, self.permutation)
    }

    /// Rebuild the original matrix as `P^T * L * U`
    pub fn reconstruct(&self) -> Array2<T> {
        let n = self.dim();
        let mut lu = Array2::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..=i.min(j) {
                    sum += self.l[[i, k]] * self.u[[k, j]];
                }
                lu[[i, j]] = sum;
            }
        }
        self.permutation.inverse().apply_rows(lu.view())
    }
}

/// Decompose `a` with the default [`LuConfig`].
///
/// # Errors
///
/// - [`LuError::DimensionMismatch`] if `a` is empty or not square
/// - [`LuError::SingularMatrix`] if a pivot magnitude is below `1e-12`
pub fn decompose<T: Scalar>(a: &Array2<T>) -> Result<LuDecomposition<T>> {
    decompose_with(a, &LuConfig::default())
}

/// Decompose `a` using the tolerances in `config`.
///
/// The input is copied before elimination and never modified. At each
/// column the pivot is the first row (lowest index) holding the largest
/// magnitude, so repeated calls on the same input give bit-identical
/// factors.
pub fn decompose_with<T: Scalar>(a: &Array2<T>, config: &LuConfig) -> Result<LuDecomposition<T>> {
    let n = check_square(a)?;
    let parallel = config.use_parallel(n);

    let mut u = a.clone();
    let mut l = Array2::<T>::zeros((n, n));
    let mut permutation = Permutation::identity(n);

    for k in 0..n {
        let max_row = pivot_row(&u, k);

        if max_row != k {
            log::debug!("LU column {}: swapping rows {} and {}", k, k, max_row);
            for j in 0..n {
                u.swap([k, j], [max_row, j]);
            }
            // Multipliers already computed belong to their row.
            for j in 0..k {
                l.swap([k, j], [max_row, j]);
            }
            permutation.swap(k, max_row);
        }

        let pivot = u[[k, k]];
        let magnitude = pivot.magnitude();
        // An exact zero is singular even when the tolerance is not positive.
        if magnitude.is_nan() || magnitude == 0.0 || magnitude < config.pivot_tolerance {
            log::warn!(
                "LU decomposition: pivot {:e} in column {} is below tolerance {:e}",
                magnitude,
                k,
                config.pivot_tolerance
            );
            return Err(LuError::SingularMatrix {
                column: k,
                pivot: magnitude,
            });
        }

        let multipliers: Array1<T> = u.slice(s![k + 1.., k]).mapv(|v| v / pivot);
        l.slice_mut(s![k + 1.., k]).assign(&multipliers);
        eliminate_below(&mut u, k, &multipliers, parallel);
    }

    l.diag_mut().fill(T::one());

    if config.verbosity > 0 {
        log::info!(
            "LU decomposition of {}x{} matrix: {} row swaps",
            n,
            n,
            permutation.transpositions()
        );
    }

    Ok(LuDecomposition { l, u, permutation })
}

/// Ensure `a` is a non-empty square matrix and return its dimension.
pub(crate) fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    let n = a.nrows();
    if n == 0 {
        return Err(LuError::DimensionMismatch {
            expected: 1,
            got: 0,
        });
    }
    if a.ncols() != n {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    Ok(n)
}

/// First row in `k..n` with the largest magnitude in column `k`.
fn pivot_row<T: Scalar>(u: &Array2<T>, k: usize) -> usize {
    let mut max_row = k;
    let mut max_val = u[[k, k]].magnitude();
    for i in (k + 1)..u.nrows() {
        let val = u[[i, k]].magnitude();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }
    max_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    fn assert_factors_valid(a: &Array2<f64>, lu: &LuDecomposition<f64>) {
        let n = lu.dim();
        let pa = lu.permutation().apply_rows(a.view());
        let product = lu.l().dot(lu.u());
        for i in 0..n {
            assert_relative_eq!(lu.l()[[i, i]], 1.0);
            for j in 0..n {
                assert!((pa[[i, j]] - product[[i, j]]).abs() < 1e-9);
                if j > i {
                    assert_eq!(lu.l()[[i, j]], 0.0);
                }
                if j < i {
                    assert_eq!(lu.u()[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_decompose_pivots() {
        let a = array![[2.0, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]];
        let lu = decompose(&a).expect("decomposition should succeed");
        assert_factors_valid(&a, &lu);
        // Column 0 already has its largest entry on the diagonal.
        assert_eq!(lu.permutation().source_row(0), 0);
    }

    #[test]
    fn test_decompose_requires_swap() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let lu = decompose(&a).unwrap();
        assert_eq!(lu.permutation().source_rows(), &[1, 0]);
        assert_eq!(lu.permutation().transpositions(), 1);
        assert_eq!(lu.l(), &Array2::<f64>::eye(2));
        assert_eq!(lu.u(), &Array2::<f64>::eye(2));
    }

    #[test]
    fn test_l_entries_follow_row_swaps() {
        // Column 1 pivoting swaps rows 1 and 2 after L[.,0] is filled in.
        let a = array![[4.0, 1.0, 2.0], [2.0, 0.5, 3.0], [1.0, 5.0, 1.0]];
        let lu = decompose(&a).unwrap();
        assert_eq!(lu.permutation().source_rows(), &[0, 2, 1]);
        assert_relative_eq!(lu.l()[[1, 0]], 0.25);
        assert_relative_eq!(lu.l()[[2, 0]], 0.5);
        assert_factors_valid(&a, &lu);
    }

    #[test]
    fn test_tie_break_prefers_lowest_row() {
        let a = array![[1.0, 2.0, 0.0], [-3.0, 1.0, 1.0], [3.0, 0.0, 2.0]];
        let lu = decompose(&a).unwrap();
        assert_eq!(lu.permutation().source_row(0), 1);
    }

    #[test]
    fn test_singular_zero_matrix() {
        let a = array![[0.0, 0.0], [0.0, 0.0]];
        let err = decompose(&a).unwrap_err();
        assert!(matches!(err, LuError::SingularMatrix { column: 0, .. }));
    }

    #[test]
    fn test_singular_dependent_rows() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let err = decompose(&a).unwrap_err();
        assert!(matches!(err, LuError::SingularMatrix { column: 1, .. }));
    }

    #[test]
    fn test_non_square() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let err = decompose(&a).unwrap_err();
        assert!(matches!(
            err,
            LuError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_empty() {
        let a = Array2::<f64>::zeros((0, 0));
        assert!(decompose(&a).unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_one_by_one() {
        let a = array![[5.0]];
        let lu = decompose(&a).unwrap();
        assert_eq!(lu.l(), &array![[1.0]]);
        assert_eq!(lu.u(), &array![[5.0]]);
    }

    #[test]
    fn test_input_untouched() {
        let a = array![[0.0, 2.0], [3.0, 1.0]];
        let copy = a.clone();
        let _ = decompose(&a).unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_idempotent() {
        let a = array![[3.0, -1.0, 2.0], [6.0, 0.5, -4.0], [-3.0, 7.0, 1.0]];
        let first = decompose(&a).unwrap();
        let second = decompose(&a).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pivot_tolerance_from_config() {
        let a = array![[1e-6, 0.0], [0.0, 1e-6]];
        assert!(decompose(&a).is_ok());

        let config = LuConfig {
            pivot_tolerance: 1e-3,
            ..LuConfig::default()
        };
        assert!(decompose_with(&a, &config).unwrap_err().is_singular());
    }

    #[test]
    fn test_zero_pivot_rejected_without_tolerance() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        for tolerance in [0.0, -1.0] {
            let config = LuConfig {
                pivot_tolerance: tolerance,
                ..LuConfig::default()
            };
            match decompose_with(&a, &config) {
                Err(LuError::SingularMatrix { column, pivot }) => {
                    assert_eq!(column, 1);
                    assert_eq!(pivot, 0.0);
                }
                other => panic!("expected singular matrix, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_nan_pivot_is_singular() {
        let a = array![[f64::NAN, 1.0], [1.0, 1.0]];
        // NaN never loses the comparison either, so it stays as the pivot.
        assert!(decompose(&a).unwrap_err().is_singular());
    }

    #[test]
    fn test_reconstruct() {
        let b = array![[1.0, 2.0, 0.0], [3.0, 5.0, -1.0], [1.0, 2.0, 1.0]];
        let lu = decompose(&b).unwrap();
        let rebuilt = lu.reconstruct();
        for (x, y) in rebuilt.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_complex_decompose() {
        let a = array![
            [Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)],
            [Complex64::new(0.0, 3.0), Complex64::new(1.0, -1.0)],
        ];
        let lu = decompose(&a).unwrap();
        assert_eq!(lu.permutation().source_rows(), &[1, 0]);
        let rebuilt = lu.reconstruct();
        for (x, y) in rebuilt.iter().zip(a.iter()) {
            assert!((x - y).norm() < 1e-12);
        }
    }
}
