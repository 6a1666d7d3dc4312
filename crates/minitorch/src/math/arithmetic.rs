//! Arithmetic operators.
//!
//! ## Purpose
//!
//! Exact arithmetic on a single float type: product, sum, negation, identity
//! and reciprocal.
//!
//! ## Invariants
//!
//! * `mul`, `add`, `neg` and `id` are total and follow IEEE-754 exactly.
//! * `inv` fails only when its argument compares equal to zero (either sign).

// Internal dependencies
use crate::primitives::errors::{OperatorError, OperatorResult};

// External dependencies
use num_traits::Float;

/// `f(x, y) = x * y`
#[inline]
pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

/// `f(x) = x`
#[inline]
pub fn id<T: Float>(x: T) -> T {
    x
}

/// `f(x, y) = x + y`
#[inline]
pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

/// `f(x) = -x`
#[inline]
pub fn neg<T: Float>(x: T) -> T {
    -x
}

/// `f(x) = 1 / x`
///
/// # Errors
///
/// Returns [`OperatorError::DivisionByZero`] when `x == 0`.
#[inline]
pub fn inv<T: Float>(x: T) -> OperatorResult<T> {
    if x == T::zero() {
        return Err(OperatorError::DivisionByZero { operator: "inv" });
    }
    Ok(x.recip())
}
