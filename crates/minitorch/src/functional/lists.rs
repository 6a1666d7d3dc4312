//! List utilities derived from the combinators.
//!
//! Every function here is a combinator specialised with a scalar operator and
//! carries no logic of its own.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::functional::combinators::{map, reduce, zip_with};
use crate::math::arithmetic::{add, mul, neg};

// External dependencies
use num_traits::Float;

/// Negate every element.
pub fn neg_list<T: Float>(ls: &[T]) -> Vec<T> {
    map(neg::<T>)(ls)
}

/// Element-wise sum of two slices, truncated to the shorter one.
pub fn add_lists<T: Float>(left: &[T], right: &[T]) -> Vec<T> {
    zip_with(add::<T>)(left, right)
}

/// Sum of all elements; `0` for an empty slice.
pub fn sum<T: Float>(ls: &[T]) -> T {
    reduce(add::<T>, T::zero())(ls)
}

/// Product of all elements; `1` for an empty slice.
pub fn prod<T: Float>(ls: &[T]) -> T {
    reduce(mul::<T>, T::one())(ls)
}
