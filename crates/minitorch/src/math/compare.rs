//! Comparison operators.
//!
//! ## Purpose
//!
//! Comparisons in this module return numeric booleans (`1.0` for true, `0.0`
//! for false) so that their results can be multiplied and added like any other
//! operator output.
//!
//! ## Key concepts
//!
//! * **Strictness**: `lt` and `max` use strict `>` / `<`; ties fall to the second argument.
//! * **Tolerance**: `is_close` is a coarse absolute comparison, not exact equality.
//!
//! ## Invariants
//!
//! * `lt`, `eq` and `is_close` only ever return `0.0` or `1.0`.
//! * Any comparison involving NaN is false.

// Internal dependencies
use crate::primitives::boolean::from_bool;
use crate::primitives::constants::close_tolerance;

// External dependencies
use num_traits::Float;

/// `1.0` if `x < y`, else `0.0`.
#[inline]
pub fn lt<T: Float>(x: T, y: T) -> T {
    from_bool(x < y)
}

/// `1.0` if `x == y`, else `0.0`.
#[inline]
pub fn eq<T: Float>(x: T, y: T) -> T {
    from_bool(x == y)
}

/// `x` if `x > y`, else `y`.
#[inline]
pub fn max<T: Float>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// `1.0` if `|x - y| < 1e-2`, else `0.0`.
#[inline]
pub fn is_close<T: Float>(x: T, y: T) -> T {
    from_bool((x - y).abs() < close_tolerance())
}
