//! Error types for scalar operators and list combinators.
//!
//! ## Purpose
//!
//! This module defines the error conditions an operator can report. Rust float
//! division never traps, so operators whose divisor may vanish check it
//! explicitly and surface the failure as a value.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the operator (or the lengths) that failed.
//! * **No recovery**: Operators return the error immediately; callers propagate it with `?`.
//! * **No-std**: Only `&'static str` and `usize` payloads, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * `DivisionByZero` is only produced when the divisor compares equal to zero.
//! * `LengthMismatch` is only produced by the strict zip combinator.
//!
//! ## Non-goals
//!
//! * This module does not perform any arithmetic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for operator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorError {
    /// The operator's divisor evaluated to exactly zero.
    DivisionByZero {
        /// Name of the failing operator (e.g., "inv", "log_back").
        operator: &'static str,
    },

    /// Two sequences passed to a strict pairwise combinator differ in length.
    LengthMismatch {
        /// Number of elements in the first sequence.
        left: usize,
        /// Number of elements in the second sequence.
        right: usize,
    },
}

/// Result alias used by fallible operators and combinators.
pub type OperatorResult<T> = core::result::Result<T, OperatorError>;

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OperatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivisionByZero { operator } => {
                write!(f, "Division by zero in operator '{operator}'")
            }
            Self::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Length mismatch: left has {left} elements, right has {right}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for OperatorError {}
