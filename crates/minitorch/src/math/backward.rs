//! Backward operators.
//!
//! ## Purpose
//!
//! Each function here takes the forward input `x` and the upstream derivative
//! `d`, and returns `d * f'(x)` for the matching forward operator `f`. This is
//! the contribution a reverse-mode engine pushes to `x` through the chain rule.
//!
//! ## Key concepts
//!
//! * **Fallible divisors**: `log_back` and `inv_back` divide by a function of `x`
//!   and report [`OperatorError::DivisionByZero`] when that divisor is zero.
//! * **ReLU kink**: The derivative of `relu` is taken as zero at `x = 0`.
//!
//! ## Invariants
//!
//! * `log_back` divides by `x + EPS`, the exact argument `log` passes to `ln`.
//! * Backward operators never mutate or cache anything.

// Internal dependencies
use crate::math::activation::sigmoid;
use crate::primitives::constants::eps;
use crate::primitives::errors::{OperatorError, OperatorResult};

// External dependencies
use num_traits::Float;

// ============================================================================
// Fallible Backward Operators
// ============================================================================

/// `d * f'(x)` for `f = log`, i.e. `d / (x + EPS)`.
///
/// # Errors
///
/// Returns [`OperatorError::DivisionByZero`] when `x + EPS == 0`.
#[inline]
pub fn log_back<T: Float>(x: T, d: T) -> OperatorResult<T> {
    let shifted = x + eps();
    if shifted == T::zero() {
        return Err(OperatorError::DivisionByZero {
            operator: "log_back",
        });
    }
    Ok(d / shifted)
}

/// `d * f'(x)` for `f(x) = 1 / x`, i.e. `-d / x^2`.
///
/// # Errors
///
/// Returns [`OperatorError::DivisionByZero`] when `x^2` evaluates to zero,
/// which includes `x == 0` and arguments small enough to underflow.
#[inline]
pub fn inv_back<T: Float>(x: T, d: T) -> OperatorResult<T> {
    let squared = x * x;
    if squared == T::zero() {
        return Err(OperatorError::DivisionByZero {
            operator: "inv_back",
        });
    }
    Ok(-d / squared)
}

// ============================================================================
// Total Backward Operators
// ============================================================================

/// `d` if `x > 0`, else `0`.
#[inline]
pub fn relu_back<T: Float>(x: T, d: T) -> T {
    if x > T::zero() { d } else { T::zero() }
}

/// `d * s * (1 - s)` with `s = sigmoid(x)`.
#[inline]
pub fn sigmoid_back<T: Float>(x: T, d: T) -> T {
    let s = sigmoid(x);
    d * s * (T::one() - s)
}

/// `d * e^x`
#[inline]
pub fn exp_back<T: Float>(x: T, d: T) -> T {
    d * x.exp()
}
