//! Error types for hyperbolic number operations.
//!
//! Every failure is an immediate, synchronous `Err` at the call site of the
//! violating operation. There is no recovery or retry logic, and no partial
//! value is ever produced.

use thiserror::Error;

/// Error type for the checked hyperbolic number operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// An operation requiring a numeric scalar (or, for `pow`, an integer)
    /// received an operand of a different kind.
    #[error("argument of wrong type: expected {expected}, found {found}")]
    InvalidOperand {
        /// What the operation accepts.
        expected: &'static str,
        /// The kind of operand actually supplied.
        found: &'static str,
    },

    /// `pow` received a negative exponent.
    #[error("number can only be raised to a non-negative power, got {0}")]
    InvalidExponent(i64),
}
