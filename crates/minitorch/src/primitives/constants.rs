//! Fixed numerical constants shared across operators.
//!
//! ## Invariants
//!
//! * `log` and `log_back` read the same `EPS`, so the bias in the forward
//!   value and in its derivative always agree.

// External dependencies
use num_traits::Float;

/// Bias added to the argument of `log` (and the divisor of `log_back`) to
/// keep `log(0)` finite.
pub const EPS: f64 = 1e-6;

/// Absolute tolerance used by `is_close`.
pub const CLOSE_TOLERANCE: f64 = 1e-2;

/// `EPS` converted to the working float type.
#[inline]
pub fn eps<T: Float>() -> T {
    T::from(EPS).unwrap_or_else(T::epsilon)
}

/// `CLOSE_TOLERANCE` converted to the working float type.
#[inline]
pub fn close_tolerance<T: Float>() -> T {
    T::from(CLOSE_TOLERANCE).unwrap_or_else(T::epsilon)
}
