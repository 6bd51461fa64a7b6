//! Numeric element traits for the tabula workspace.
//!
//! Every container in the workspace is generic over [`Scalar`], the
//! floating-point element abstraction that tables, determinants, matrices
//! and linear systems share. The trait builds on `num_traits` for the
//! additive and multiplicative identities.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// An element type usable in numeric tables.
///
/// # Laws
///
/// - Arithmetic behaves as field arithmetic on the represented values
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - `from_f64` and `to_f64` round-trip within the type's precision
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Converts from an `f64` value.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Returns the absolute value.
    fn abs(self) -> Self;
}

impl Scalar for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }
}

/// Compares two scalars within an absolute tolerance.
#[must_use]
pub fn approx_eq<T: Scalar>(left: T, right: T, tolerance: f64) -> bool {
    (left - right).abs().to_f64() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert!(f64::zero().is_zero());
    }

    #[test]
    fn f64_round_trip() {
        let value = f64::from_f64(2.5);
        assert_eq!(value.to_f64(), 2.5);
    }

    #[test]
    fn f32_conversion() {
        let value = f32::from_f64(1.5);
        assert_eq!(value, 1.5f32);
        assert_eq!(value.to_f64(), 1.5);
    }

    #[test]
    fn absolute_value() {
        assert_eq!((-3.0f64).abs(), 3.0);
        assert_eq!(3.0f64.abs(), 3.0);
    }

    #[test]
    fn approximate_comparison() {
        assert!(approx_eq(1.0f64, 1.0 + 1e-12, 1e-9));
        assert!(!approx_eq(1.0f64, 1.1, 1e-9));
    }
}
