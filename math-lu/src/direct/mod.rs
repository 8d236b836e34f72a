//! Dense direct solvers built on LU decomposition
//!
//! This module provides the factorization and everything derived from it:
//! - [`decompose`]: `P A = L U` with partial pivoting
//! - [`solve_linear_system`]: permuted forward/back substitution
//! - [`inverse_matrix`]: one factorization, one solve per basis vector
//! - [`determinant`]: product of pivots with the permutation sign
//! - [`verify_solution`]: residual check of a candidate solution

mod decompose;
mod determinant;
mod inverse;
mod solve;
mod verify;

pub use decompose::{LuDecomposition, decompose, decompose_with};
pub use determinant::determinant;
pub use inverse::{inverse_matrix, inverse_matrix_with};
pub use solve::{
    back_substitution, forward_substitution, solve_linear_system, solve_linear_system_with,
};
pub use verify::{
    max_residual, residual, verify_inverse, verify_solution, verify_solution_with,
};
