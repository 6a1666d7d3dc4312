//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type, the numeric-boolean helpers and
//! the fixed numerical constants used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functional
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Numeric-boolean conversions.
pub mod boolean;

/// Fixed numerical constants.
pub mod constants;
