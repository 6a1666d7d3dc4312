//! # minitorch — Scalar Operators and List Combinators
//!
//! The scalar building blocks of a small, from-scratch automatic
//! differentiation library. Everything here is a pure function over a float
//! type: the autodiff engine calls the forward operators while evaluating a
//! graph, and the `*_back` operators while propagating derivatives.
//!
//! ## Quick Start
//!
//! ```rust
//! use minitorch::prelude::*;
//!
//! // Scalar operators
//! assert_eq!(mul(3.0, 4.0), 12.0);
//! assert_eq!(lt(1.0, 2.0), 1.0);
//! assert_eq!(relu(-3.0), 0.0);
//! assert!((sigmoid(0.0_f64) - 0.5).abs() < 1e-12);
//!
//! // Combinators
//! let double = map(|v: f64| v * 2.0);
//! assert_eq!(double(&[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
//!
//! let pairwise = zip_with(add::<f64>);
//! assert_eq!(pairwise(&[1.0, 2.0, 3.0], &[4.0, 5.0]), vec![5.0, 7.0]);
//!
//! // Derived list utilities
//! assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
//! assert_eq!(prod(&[1.0, 2.0, 3.0, 4.0]), 24.0);
//! ```
//!
//! ## Numeric Booleans
//!
//! Comparisons (`lt`, `eq`, `is_close`) return `1.0` or `0.0` instead of
//! `bool`, so their output can flow straight into arithmetic:
//!
//! ```rust
//! use minitorch::prelude::*;
//!
//! // Keep only the elements below 2.0, zeroing the rest.
//! let xs = [1.0, 2.0, 3.0, 0.5];
//! let masked = map(|v: f64| mul(v, lt(v, 2.0)))(&xs);
//! assert_eq!(masked, vec![1.0, 0.0, 0.0, 0.5]);
//! ```
//!
//! ## Result and Error Handling
//!
//! Float division in Rust does not trap, so the operators whose divisor may
//! vanish (`inv`, `inv_back`, `log_back`) return
//! `Result<T, OperatorError>`. They do not recover; use `?` to propagate:
//!
//! ```rust
//! use minitorch::prelude::*;
//!
//! fn reciprocal_sum(xs: &[f64]) -> Result<f64, OperatorError> {
//!     let recips = try_map(inv::<f64>)(xs)?;
//!     Ok(sum(&recips))
//! }
//!
//! assert_eq!(reciprocal_sum(&[1.0, 2.0, 4.0]), Ok(1.75));
//! assert_eq!(
//!     reciprocal_sum(&[1.0, 0.0]),
//!     Err(OperatorError::DivisionByZero { operator: "inv" })
//! );
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency.
//! Transcendental functions then come from `libm` via `num-traits`:
//!
//! ```toml
//! [dependencies]
//! minitorch = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type, numeric booleans, constants.
mod primitives;

// Layer 2: Math - scalar operators and their backward counterparts.
mod math;

// Layer 3: Functional - combinators and derived list utilities.
mod functional;

// Standard minitorch prelude.
pub mod prelude {
    pub use crate::functional::combinators::{map, reduce, try_map, zip_with, zip_with_exact};
    pub use crate::functional::lists::{add_lists, neg_list, prod, sum};
    pub use crate::math::activation::{exp, log, relu, sigmoid};
    pub use crate::math::arithmetic::{add, id, inv, mul, neg};
    pub use crate::math::backward::{exp_back, inv_back, log_back, relu_back, sigmoid_back};
    pub use crate::math::compare::{eq, is_close, lt, max};
    pub use crate::primitives::boolean::{from_bool, to_bool};
    pub use crate::primitives::constants::{CLOSE_TOLERANCE, EPS};
    pub use crate::primitives::errors::{OperatorError, OperatorResult};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod functional {
        pub use crate::functional::*;
    }
}
