//! Activation and transcendental functions.
//!
//! ## Purpose
//!
//! Forward functions for the non-linear operators of the autodiff engine.
//!
//! ## Design notes
//!
//! * **Stable sigmoid**: The exponent is always non-positive, so `exp` never
//!   overflows no matter how negative `x` gets.
//! * **Biased log**: `log` adds `EPS` to its argument; `log(0)` is finite and
//!   every result carries a small bias.
//! * **Unguarded exp**: `exp` overflows to `+inf` for large arguments.
//!
//! ## Non-goals
//!
//! * This module does not compute derivatives (see `backward`).

// Internal dependencies
use crate::math::compare::max;
use crate::primitives::constants::eps;

// External dependencies
use num_traits::Float;

/// Logistic sigmoid `f(x) = 1 / (1 + e^{-x})`.
///
/// Evaluated as `1 / (1 + e^{-x})` for `x >= 0` and as `e^x / (1 + e^x)` for
/// `x < 0`. Both forms are equal; only the second is safe for large negative `x`.
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// `f(x) = max(0, x)`
#[inline]
pub fn relu<T: Float>(x: T) -> T {
    max(T::zero(), x)
}

/// `f(x) = ln(x + EPS)`
#[inline]
pub fn log<T: Float>(x: T) -> T {
    (x + eps()).ln()
}

/// `f(x) = e^x`
#[inline]
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}
