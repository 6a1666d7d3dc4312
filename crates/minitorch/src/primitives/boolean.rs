//! Numeric-boolean conversions.
//!
//! Comparison operators return `1.0` for true and `0.0` for false so their
//! results compose with arithmetic. These helpers convert at the boundary
//! where a native `bool` is wanted.

// External dependencies
use num_traits::Float;

/// Encode a `bool` as `1` or `0`.
#[inline]
pub fn from_bool<T: Float>(value: bool) -> T {
    if value { T::one() } else { T::zero() }
}

/// Decode a numeric boolean. Any non-zero value (including NaN) is true.
#[inline]
pub fn to_bool<T: Float>(value: T) -> bool {
    value != T::zero()
}
