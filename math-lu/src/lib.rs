//! Dense linear-system kernel based on LU decomposition with partial pivoting
//!
//! This crate factors a square matrix as `P A = L U` and derives from that
//! factorization everything a small dense solver needs.
//!
//! # Features
//!
//! - **Decomposition**: Doolittle elimination with partial pivoting and a
//!   deterministic lowest-index tie-break
//! - **Solve**: permuted forward/back substitution, one or many right-hand sides
//! - **Inverse**: one factorization shared across all columns
//! - **Determinant**: pivot product with a sign from counted row swaps
//! - **Verification**: residual checks for solutions and inverses
//! - **Generic Scalar Types**: f64, f32, Complex64, Complex32
//! - **Optional parallel row updates** with the `rayon` feature
//!
//! # Example
//!
//! ```
//! use math_lu::{solve_linear_system, verify_solution};
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]];
//! let b = array![4.0, 5.0, 6.0];
//!
//! let x = solve_linear_system(&a, &b)?;
//! verify_solution(&a, &x, &b)?;
//! # Ok::<(), math_lu::LuError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod parallel;
pub mod permutation;
pub mod traits;

pub use config::LuConfig;
pub use error::{ConfigError, LuError, Result};
pub use permutation::Permutation;
pub use traits::Scalar;

pub use direct::{
    LuDecomposition, back_substitution, decompose, decompose_with, determinant,
    forward_substitution, inverse_matrix, inverse_matrix_with, max_residual, residual,
    solve_linear_system, solve_linear_system_with, verify_inverse, verify_solution,
    verify_solution_with,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
