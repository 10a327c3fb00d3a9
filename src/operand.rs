//! Dynamically-typed operands for checked arithmetic.
//!
//! The operator impls on [`HyperbolicNumber`] are statically typed and
//! cannot fail. Callers whose operands are only classified at run time
//! (an integer, a float, or another hyperbolic number) route them through
//! [`Operand`]: the checked operations match on the variant at the call
//! site and reject the kinds an operation does not accept.

use crate::number::HyperbolicNumber;

/// A loosely-typed operand: an integer scalar, a float scalar, or a full
/// hyperbolic number.
///
/// `Int` and `Float` stay distinct variants because exponentiation accepts
/// only integers; a float exponent is rejected even when its value is
/// integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// A full hyperbolic number.
    Number(HyperbolicNumber),
}

impl Operand {
    /// Variant name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Number(_) => "hyperbolic number",
        }
    }

    /// The scalar value, if this operand is one.
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Operand::Int(n) => Some(n as f64),
            Operand::Float(x) => Some(x),
            Operand::Number(_) => None,
        }
    }

    /// Lift to a hyperbolic number: a scalar s becomes (s, 0), a number
    /// passes through unchanged.
    #[inline]
    pub fn lift(self) -> HyperbolicNumber {
        match self {
            Operand::Int(n) => HyperbolicNumber::from_scalar(n as f64),
            Operand::Float(x) => HyperbolicNumber::from_scalar(x),
            Operand::Number(h) => h,
        }
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Int(i64::from(n))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Float(x)
    }
}

impl From<HyperbolicNumber> for Operand {
    fn from(h: HyperbolicNumber) -> Self {
        Operand::Number(h)
    }
}
