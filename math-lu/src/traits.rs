//! Scalar abstraction for the LU kernel
//!
//! [`Scalar`] abstracts over the real and complex element types the
//! factorization works with. Pivot selection and every tolerance check only
//! need a magnitude, which is always reported as `f64` so that tolerances in
//! [`LuConfig`](crate::LuConfig) apply uniformly.

use num_complex::{Complex32, Complex64};
use num_traits::{NumAssign, One, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Trait for matrix element types.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most problems)
/// - `f32`
/// - `Complex64`
/// - `Complex32`
pub trait Scalar:
    NumAssign + Clone + Copy + Send + Sync + Debug + Zero + One + Neg<Output = Self> + 'static
{
    /// Magnitude |z|
    fn magnitude(&self) -> f64;

    /// Create from a real value
    fn from_real(r: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn magnitude(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        r
    }
}

impl Scalar for f32 {
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::from(self.abs())
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        r as f32
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        Complex64::new(r, 0.0)
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::from(self.norm())
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        Complex32::new(r as f32, 0.0)
    }
}
