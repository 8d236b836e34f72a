//! Residual checks for computed solutions and inverses

use super::decompose::check_square;
use crate::config::LuConfig;
use crate::error::{LuError, Result};
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

/// Residual vector `r = A x - b`
pub fn residual<T: Scalar>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let n = check_square(a)?;
    for len in [x.len(), b.len()] {
        if len != n {
            return Err(LuError::DimensionMismatch {
                expected: n,
                got: len,
            });
        }
    }

    Ok(Array1::from_shape_fn(n, |i| {
        let mut sum = T::zero();
        for j in 0..n {
            sum += a[[i, j]] * x[j];
        }
        sum - b[i]
    }))
}

/// Largest absolute residual and the row it occurs in.
///
/// A NaN residual is reported as the worst row.
pub fn max_residual<T: Scalar>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Result<(usize, f64)> {
    let r = residual(a, x, b)?;
    let mut worst = (0, 0.0_f64);
    for (i, ri) in r.iter().enumerate() {
        let magnitude = ri.magnitude();
        if magnitude.is_nan() {
            return Ok((i, magnitude));
        }
        if magnitude > worst.1 {
            worst = (i, magnitude);
        }
    }
    Ok(worst)
}

/// Check `A x ≈ b` with the default residual tolerance (`1e-8`).
pub fn verify_solution<T: Scalar>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Result<()> {
    verify_solution_with(a, x, b, &LuConfig::default())
}

/// Check `A x ≈ b` against `config.residual_tolerance`.
///
/// # Errors
///
/// - [`LuError::DimensionMismatch`] if `A` is not square or the vector lengths differ from it
/// - [`LuError::ResidualExceeded`] if `max_i |(A x - b)_i|` exceeds the tolerance
pub fn verify_solution_with<T: Scalar>(
    a: &Array2<T>,
    x: &Array1<T>,
    b: &Array1<T>,
    config: &LuConfig,
) -> Result<()> {
    let (row, worst) = max_residual(a, x, b)?;
    check_residual(row, worst, config.residual_tolerance)?;
    if config.verbosity > 0 {
        log::info!("Solution verified: max residual {:.2e} in row {}", worst, row);
    }
    Ok(())
}

/// Check `A * inverse ≈ I` entry by entry.
///
/// The reported row is the row of the worst entry of `A * inverse - I`.
pub fn verify_inverse<T: Scalar>(a: &Array2<T>, inverse: &Array2<T>, tolerance: f64) -> Result<()> {
    let n = check_square(a)?;
    if inverse.dim() != (n, n) {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: if inverse.nrows() != n {
                inverse.nrows()
            } else {
                inverse.ncols()
            },
        });
    }

    let mut worst = (0, 0.0_f64);
    for i in 0..n {
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum += a[[i, k]] * inverse[[k, j]];
            }
            if i == j {
                sum -= T::one();
            }
            let magnitude = sum.magnitude();
            if magnitude.is_nan() {
                return check_residual(i, magnitude, tolerance);
            }
            if magnitude > worst.1 {
                worst = (i, magnitude);
            }
        }
    }
    check_residual(worst.0, worst.1, tolerance)
}

fn check_residual(row: usize, residual: f64, tolerance: f64) -> Result<()> {
    if residual.is_nan() || residual > tolerance {
        log::warn!(
            "Residual check failed: {:.2e} in row {} exceeds {:.2e}",
            residual,
            row,
            tolerance
        );
        return Err(LuError::ResidualExceeded {
            row,
            residual,
            tolerance,
        });
    }
    Ok(())
}
