//! Elementwise algebra over scalar sequences.
//!
//! Matrix addition, dot products and the elementary row operations all
//! reduce to these functions. Every binary operation requires equal-length
//! operands and returns `None` otherwise; callers check the result rather
//! than catching an error.

use num_traits::Zero;

use tabula_scalar::Scalar;

/// Elementwise sum of two sequences. `None` when the lengths differ.
#[must_use]
pub fn add<T: Scalar>(left: &[T], right: &[T]) -> Option<Vec<T>> {
    if left.len() != right.len() {
        return None;
    }
    Some(left.iter().zip(right).map(|(&a, &b)| a + b).collect())
}

/// Scales every element of `values` by `k`.
#[must_use]
pub fn scale<T: Scalar>(values: &[T], k: T) -> Vec<T> {
    values.iter().map(|&v| v * k).collect()
}

/// Dot product of two sequences. `None` when the lengths differ.
#[must_use]
pub fn dot<T: Scalar>(left: &[T], right: &[T]) -> Option<T> {
    if left.len() != right.len() {
        return None;
    }
    Some(
        left.iter()
            .zip(right)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b),
    )
}

/// Elementwise product of two sequences. `None` when the lengths differ.
#[must_use]
pub fn hadamard<T: Scalar>(left: &[T], right: &[T]) -> Option<Vec<T>> {
    if left.len() != right.len() {
        return None;
    }
    Some(left.iter().zip(right).map(|(&a, &b)| a * b).collect())
}

/// Elementwise equality of two sequences. `None` when the lengths differ.
#[must_use]
pub fn equal<T: Scalar>(left: &[T], right: &[T]) -> Option<bool> {
    if left.len() != right.len() {
        return None;
    }
    Some(left.iter().zip(right).all(|(a, b)| a == b))
}

/// Whether `left` equals `right` scaled by a single ratio.
///
/// The ratio of the first pair is compared against every subsequent pair.
/// `None` when the lengths differ or the sequences are empty.
#[must_use]
pub fn proportional<T: Scalar>(left: &[T], right: &[T]) -> Option<bool> {
    if left.len() != right.len() || left.is_empty() {
        return None;
    }
    let ratio = left[0] / right[0];
    Some(left.iter().zip(right).all(|(&a, &b)| b * ratio == a))
}
