//! Tests for the higher-order sequence combinators.
//!
//! These tests verify:
//! - `map` preserves length and order
//! - `zip_with` truncates to the shorter input
//! - `reduce` folds left to right from its seed
//! - Fallible variants stop on the first error
//! - Inputs are never modified
//!
//! ## Test Organization
//!
//! 1. **Map** - element-wise application
//! 2. **ZipWith** - pairwise application and truncation
//! 3. **Reduce** - folding order and empty input
//! 4. **Fallible Combinators** - try_map, zip_with_exact

use std::cell::Cell;

use minitorch::prelude::*;

// ============================================================================
// Map Tests
// ============================================================================

/// Test `map` with a closure.
#[test]
fn test_map_doubles() {
    let double = map(|v: f64| v * 2.0);
    assert_eq!(double(&[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
}

/// Test `map` with scalar operators.
#[test]
fn test_map_with_operators() {
    assert_eq!(map(neg::<f64>)(&[1.0, -2.0]), vec![-1.0, 2.0]);
    assert_eq!(map(relu::<f64>)(&[-1.0, 0.5, 3.0]), vec![0.0, 0.5, 3.0]);
    assert_eq!(map(id::<f32>)(&[4.0, 5.0]), vec![4.0f32, 5.0]);
}

/// Test `map` on an empty slice.
#[test]
fn test_map_empty() {
    let empty: [f64; 0] = [];
    assert!(map(exp::<f64>)(&empty).is_empty());
}

/// Test that `map` applies the function in input order.
#[test]
fn test_map_preserves_order() {
    let seen = Cell::new(0.0f64);
    let record = map(|v: f64| {
        let previous = seen.get();
        seen.set(v);
        previous
    });

    assert_eq!(record(&[1.0, 2.0, 3.0]), vec![0.0, 1.0, 2.0]);
}

/// Test that the returned function can be reused and leaves inputs intact.
#[test]
fn test_map_reusable_and_non_mutating() {
    let shift = 10.0;
    let add_shift = map(move |v: f64| v + shift);

    let first = vec![1.0, 2.0];
    let second = vec![-1.0];

    assert_eq!(add_shift(&first), vec![11.0, 12.0]);
    assert_eq!(add_shift(&second), vec![9.0]);
    assert_eq!(add_shift(&first), vec![11.0, 12.0]);
    assert_eq!(first, vec![1.0, 2.0]);
    assert_eq!(second, vec![-1.0]);
}

// ============================================================================
// ZipWith Tests
// ============================================================================

/// Test `zip_with` truncation to the shorter input.
#[test]
fn test_zip_with_truncates() {
    let pairwise = zip_with(add::<f64>);
    assert_eq!(pairwise(&[1.0, 2.0, 3.0], &[4.0, 5.0]), vec![5.0, 7.0]);
    assert_eq!(pairwise(&[1.0], &[4.0, 5.0, 6.0]), vec![5.0]);
    assert!(pairwise(&[], &[4.0, 5.0]).is_empty());
}

/// Test `zip_with` argument order with a non-commutative function.
#[test]
fn test_zip_with_argument_order() {
    let minus = zip_with(|x: f64, y: f64| x - y);
    assert_eq!(minus(&[10.0, 20.0], &[1.0, 2.0]), vec![9.0, 18.0]);
    assert_eq!(minus(&[1.0, 2.0], &[10.0, 20.0]), vec![-9.0, -18.0]);
}

/// Test `zip_with` with comparison operators.
#[test]
fn test_zip_with_comparisons() {
    let less = zip_with(lt::<f64>);
    assert_eq!(less(&[1.0, 5.0, 3.0], &[2.0, 4.0, 3.0]), vec![1.0, 0.0, 0.0]);

    let larger = zip_with(max::<f64>);
    assert_eq!(larger(&[1.0, 5.0], &[2.0, 4.0]), vec![2.0, 5.0]);
}

/// Test that `zip_with` does not modify its inputs.
#[test]
fn test_zip_with_non_mutating() {
    let left = vec![1.0, 2.0];
    let right = vec![3.0, 4.0];
    let _ = zip_with(mul::<f64>)(&left, &right);
    assert_eq!(left, vec![1.0, 2.0]);
    assert_eq!(right, vec![3.0, 4.0]);
}

// ============================================================================
// Reduce Tests
// ============================================================================

/// Test `reduce` with sum and product.
#[test]
fn test_reduce_values() {
    assert_eq!(reduce(add::<f64>, 0.0)(&[]), 0.0);
    assert_eq!(reduce(add::<f64>, 0.0)(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(reduce(mul::<f64>, 1.0)(&[1.0, 2.0, 3.0, 4.0]), 24.0);
}

/// Test that an empty slice returns the seed unchanged.
#[test]
fn test_reduce_empty_returns_start() {
    assert_eq!(reduce(mul::<f64>, 7.5)(&[]), 7.5);
    assert!(reduce(add::<f64>, f64::NAN)(&[]).is_nan());
}

/// Test that `reduce` folds from the left.
#[test]
fn test_reduce_left_fold() {
    let digits = reduce(|acc: f64, x: f64| acc * 10.0 + x, 0.0);
    assert_eq!(digits(&[1.0, 2.0, 3.0]), 123.0);

    let minus = reduce(|acc: f64, x: f64| acc - x, 10.0);
    assert_eq!(minus(&[1.0, 2.0, 3.0]), 4.0);
}

/// Test `reduce` with `max` as a running maximum.
#[test]
fn test_reduce_max() {
    let largest = reduce(max::<f64>, f64::NEG_INFINITY);
    assert_eq!(largest(&[3.0, -1.0, 8.0, 2.0]), 8.0);
    assert_eq!(largest(&[]), f64::NEG_INFINITY);
}

// ============================================================================
// Fallible Combinator Tests
// ============================================================================

/// Test `try_map` with a fallible operator.
#[test]
fn test_try_map_success() {
    assert_eq!(try_map(inv::<f64>)(&[1.0, 2.0, 4.0]), Ok(vec![1.0, 0.5, 0.25]));
    assert_eq!(try_map(inv::<f64>)(&[]), Ok(vec![]));
}

/// Test that `try_map` stops at the first failure.
#[test]
fn test_try_map_stops_on_first_error() {
    let calls = Cell::new(0usize);
    let counted_inv = try_map(|v: f64| {
        calls.set(calls.get() + 1);
        inv(v)
    });

    assert_eq!(
        counted_inv(&[1.0, 0.0, 2.0]),
        Err(OperatorError::DivisionByZero { operator: "inv" })
    );
    assert_eq!(calls.get(), 2);
}

/// Test `try_map` with a backward operator bound to an upstream derivative.
#[test]
fn test_try_map_backward() {
    let grads = try_map(|x: f64| inv_back(x, 1.0));
    assert_eq!(grads(&[1.0, 2.0]), Ok(vec![-1.0, -0.25]));
    assert!(grads(&[1.0, 0.0]).is_err());
}

/// Test `zip_with_exact` on equal and unequal lengths.
#[test]
fn test_zip_with_exact() {
    let strict = zip_with_exact(add::<f64>);
    assert_eq!(strict(&[1.0, 2.0], &[3.0, 4.0]), Ok(vec![4.0, 6.0]));
    assert_eq!(
        strict(&[1.0, 2.0, 3.0], &[4.0, 5.0]),
        Err(OperatorError::LengthMismatch { left: 3, right: 2 })
    );
    assert_eq!(strict(&[], &[]), Ok(vec![]));
}
