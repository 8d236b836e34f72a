//! Error types for the LU kernel.
//!
//! Every failure is a deterministic property of the input: retrying the same
//! call cannot change the outcome, so callers decide whether to abort, report,
//! or switch to a different method.

use thiserror::Error;

/// Errors that can occur during decomposition, solving, or verification.
#[derive(Debug, Error)]
pub enum LuError {
    /// Matrix is not square, is empty, or a vector length disagrees with it.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// A pivot magnitude fell below the pivot tolerance during elimination.
    #[error("matrix is singular: pivot {pivot:e} in column {column}")]
    SingularMatrix {
        /// Elimination column where the degenerate pivot was found
        column: usize,
        /// Magnitude of the rejected pivot
        pivot: f64,
    },

    /// A candidate solution does not satisfy the system within tolerance.
    #[error("residual {residual:e} in row {row} exceeds tolerance {tolerance:e}")]
    ResidualExceeded {
        /// Row with the largest absolute residual
        row: usize,
        /// Absolute residual of that row
        residual: f64,
        /// Tolerance that was exceeded
        tolerance: f64,
    },
}

/// A specialized `Result` type for LU operations.
pub type Result<T> = std::result::Result<T, LuError>;

impl LuError {
    /// Returns `true` if this is a dimension error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, LuError::DimensionMismatch { .. })
    }

    /// Returns `true` if the input matrix was found to be singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, LuError::SingularMatrix { .. })
    }

    /// Returns `true` if a residual check failed.
    pub fn is_residual_error(&self) -> bool {
        matches!(self, LuError::ResidualExceeded { .. })
    }
}

/// Errors that can occur while loading or validating an [`LuConfig`](crate::LuConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid JSON for [`LuConfig`](crate::LuConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tolerance is out of range or not finite.
    #[error("invalid {name}: {value} (out of range or not finite)")]
    InvalidTolerance {
        /// Name of the offending field
        name: &'static str,
        /// The invalid value
        value: f64,
    },
}
