//! Higher-order sequence combinators.
//!
//! ## Purpose
//!
//! Each combinator is a factory: it takes a scalar function and returns a new
//! function that applies it across slices.
//!
//! ## Design notes
//!
//! * **Stateless**: The returned closures only capture the scalar function (and
//!   the seed, for `reduce`), so they implement `Fn` and can be reused freely.
//! * **Non-mutating**: Inputs are borrowed as `&[T]`; results are fresh `Vec`s.
//! * **Generic**: Element types only need `Copy`, so any scalar function fits.
//!
//! ## Invariants
//!
//! * `map` preserves length and order.
//! * `zip_with` output length is `min(left.len(), right.len())`.
//! * `reduce` folds left to right and returns `start` for an empty slice.
//!
//! ## Non-goals
//!
//! * No broadcasting and no parallel evaluation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::{OperatorError, OperatorResult};

// ============================================================================
// Total Combinators
// ============================================================================

/// Lift a unary scalar function to an element-wise function over slices.
pub fn map<T, F>(f: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Copy,
    F: Fn(T) -> T,
{
    move |ls: &[T]| -> Vec<T> { ls.iter().map(|&x| f(x)).collect() }
}

/// Lift a binary scalar function to a pairwise function over two slices.
///
/// The result stops at the end of the shorter slice.
pub fn zip_with<T, F>(f: F) -> impl Fn(&[T], &[T]) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    move |left: &[T], right: &[T]| -> Vec<T> {
        left.iter()
            .zip(right.iter())
            .map(|(&x, &y)| f(x, y))
            .collect()
    }
}

/// Build a left fold `f(...f(f(start, x0), x1)..., xn)` over slices.
pub fn reduce<T, F>(f: F, start: T) -> impl Fn(&[T]) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    move |ls: &[T]| ls.iter().fold(start, |acc, &x| f(acc, x))
}

// ============================================================================
// Fallible Combinators
// ============================================================================

/// Like [`map`], for operators that can fail (e.g. `inv`).
///
/// Evaluation stops at the first error, which is returned unchanged.
pub fn try_map<T, F>(f: F) -> impl Fn(&[T]) -> OperatorResult<Vec<T>>
where
    T: Copy,
    F: Fn(T) -> OperatorResult<T>,
{
    move |ls: &[T]| -> OperatorResult<Vec<T>> { ls.iter().map(|&x| f(x)).collect() }
}

/// Like [`zip_with`], but both slices must have the same length.
///
/// # Errors
///
/// Returns [`OperatorError::LengthMismatch`] when the lengths differ.
pub fn zip_with_exact<T, F>(f: F) -> impl Fn(&[T], &[T]) -> OperatorResult<Vec<T>>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let zipper = zip_with(f);
    move |left: &[T], right: &[T]| {
        if left.len() != right.len() {
            return Err(OperatorError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(zipper(left, right))
    }
}
