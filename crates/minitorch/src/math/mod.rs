//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the scalar operators consumed by the autodiff engine:
//! - Exact arithmetic identities
//! - Comparisons returning numeric booleans
//! - Numerically stabilised activation and transcendental functions
//! - Backward (derivative-scaling) counterparts of the differentiable operators
//!
//! Every function is pure and generic over `num_traits::Float`.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functional
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Arithmetic identities and reciprocal.
pub mod arithmetic;

/// Comparisons returning `1.0` / `0.0`.
pub mod compare;

/// Activation and transcendental functions.
pub mod activation;

/// Backward (chain-rule) operators.
pub mod backward;
