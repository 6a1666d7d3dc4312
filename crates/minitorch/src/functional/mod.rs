//! Layer 3: Functional
//!
//! # Purpose
//!
//! This layer provides higher-order combinators over sequences of scalars and
//! the list utilities derived from them:
//! - `map`, `zip_with`, `reduce` (plus the fallible `try_map` and strict `zip_with_exact`)
//! - `neg_list`, `add_lists`, `sum`, `prod`
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Functional ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Higher-order sequence combinators.
pub mod combinators;

/// List utilities built from the combinators.
pub mod lists;
