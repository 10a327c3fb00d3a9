//! Hyperbolic (Split-Complex) Number Arithmetic
//!
//! Implements the hyperbolic number a + bj where j² = +1. The algebra
//! mirrors the complex numbers with the alternate sign convention: because
//! the unit j squares to +1, the cross terms of a product add to the real
//! part instead of subtracting.
//!
//! # Mathematical Background
//!
//! For x = a₁ + b₁j and y = a₂ + b₂j:
//!
//! ```text
//! x + y = (a₁ + a₂) + (b₁ + b₂)j
//! x · y = (a₁a₂ + b₁b₂) + (a₁b₂ + b₁a₂)j
//! ```
//!
//! Both operations are commutative and associative; multiplication
//! distributes over addition with identities (0, 0) and (1, 0).
//!
//! # Scalar Interaction
//!
//! A scalar s on the right-hand side is lifted to (s, 0) before the
//! operation. A scalar on the left-hand side follows its own rules:
//! `s + x` adds s to BOTH components, `s * x` scales both components.
//! The asymmetry between `x + s` and `s + x` is part of the algebra's
//! contract and is pinned by tests.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::NumberError;
use crate::operand::Operand;

/// Hyperbolic number a + bj with `f64` components.
///
/// Values are immutable: every operation returns a newly constructed
/// instance. The type is `Copy` and safe to share freely.
///
/// # Example
///
/// ```
/// use hypernum::HyperbolicNumber;
///
/// let x = HyperbolicNumber::new(1.0, 2.0);
/// let y = HyperbolicNumber::new(3.0, 4.0);
/// assert_eq!(x + y, HyperbolicNumber::new(4.0, 6.0));
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperbolicNumber {
    /// Real part (a)
    pub a: f64,
    /// Hyperbolic part (b)
    pub b: f64,
}

impl HyperbolicNumber {
    /// Create a new hyperbolic number from its components.
    #[inline]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Lift a scalar s to the hyperbolic number (s, 0).
    #[inline]
    pub const fn from_scalar(s: f64) -> Self {
        Self::new(s, 0.0)
    }

    /// Additive identity (0, 0).
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Multiplicative identity (1, 0).
    pub const fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The unit hyperbolic element (0, 1), satisfying j · j = 1.
    pub const fn j() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Real part.
    #[inline]
    pub fn re(&self) -> f64 {
        self.a
    }

    /// Hyperbolic part.
    #[inline]
    pub fn hyp(&self) -> f64 {
        self.b
    }

    /// Squared magnitude a² + b².
    #[inline]
    pub fn mag_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b
    }

    /// Magnitude sqrt(a² + b²).
    ///
    /// This is the Euclidean norm of the component pair, not the indefinite
    /// Minkowski norm √(a² − b²).
    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Checked form of `scalar + self` for a dynamically-typed left operand.
    ///
    /// A scalar s yields (s + a, s + b): the scalar is added to BOTH
    /// components, unlike `self + s` which lifts s to (s, 0) first.
    ///
    /// # Errors
    ///
    /// [`NumberError::InvalidOperand`] if the left operand is not a genuine
    /// scalar.
    pub fn left_add(self, lhs: impl Into<Operand>) -> Result<Self, NumberError> {
        let lhs = lhs.into();
        match lhs.as_scalar() {
            Some(s) => Ok(Self::new(s + self.a, s + self.b)),
            None => Err(NumberError::InvalidOperand {
                expected: "int or float",
                found: lhs.kind(),
            }),
        }
    }

    /// Checked form of `scalar * self` for a dynamically-typed left operand.
    ///
    /// A scalar s yields (s·a, s·b).
    ///
    /// # Errors
    ///
    /// [`NumberError::InvalidOperand`] if the left operand is not a genuine
    /// scalar.
    pub fn left_mul(self, lhs: impl Into<Operand>) -> Result<Self, NumberError> {
        let lhs = lhs.into();
        match lhs.as_scalar() {
            Some(s) => Ok(Self::new(s * self.a, s * self.b)),
            None => Err(NumberError::InvalidOperand {
                expected: "int or float",
                found: lhs.kind(),
            }),
        }
    }

    /// Raise to a non-negative integer power by exponentiation by squaring,
    /// O(log n) multiplications.
    ///
    /// A zero exponent returns the base unchanged rather than the
    /// multiplicative identity (1, 0); callers relying on x⁰ = 1 must
    /// special-case it themselves.
    ///
    /// # Errors
    ///
    /// - [`NumberError::InvalidOperand`] if the exponent is not an integer.
    ///   Float exponents are rejected even when their value is integral.
    /// - [`NumberError::InvalidExponent`] if the exponent is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use hypernum::HyperbolicNumber;
    ///
    /// let j = HyperbolicNumber::j();
    /// assert_eq!(j.pow(2).unwrap(), HyperbolicNumber::one());
    /// assert!(j.pow(-1).is_err());
    /// ```
    pub fn pow(self, exponent: impl Into<Operand>) -> Result<Self, NumberError> {
        let mut n = match exponent.into() {
            Operand::Int(n) => n,
            other => {
                return Err(NumberError::InvalidOperand {
                    expected: "int",
                    found: other.kind(),
                })
            }
        };

        if n < 0 {
            return Err(NumberError::InvalidExponent(n));
        }
        if n == 0 {
            return Ok(self);
        }

        let mut num = self;
        let mut result = Self::one();
        while n > 1 {
            if n % 2 == 0 {
                num = num * num;
                n /= 2;
            } else {
                result = num * result;
                num = num * num;
                n = (n - 1) / 2;
            }
        }
        Ok(num * result)
    }
}

impl From<f64> for HyperbolicNumber {
    fn from(s: f64) -> Self {
        Self::from_scalar(s)
    }
}

impl From<i32> for HyperbolicNumber {
    fn from(s: i32) -> Self {
        Self::from_scalar(f64::from(s))
    }
}

impl From<i64> for HyperbolicNumber {
    fn from(s: i64) -> Self {
        Self::from_scalar(s as f64)
    }
}

// =============================================================================
// Arithmetic Operators
// =============================================================================

impl Add for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.a + other.a, self.b + other.b)
    }
}

/// Lifted addition: the scalar becomes (s, 0) before the sum.
impl Add<f64> for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        self + Self::from_scalar(rhs)
    }
}

/// Left-scalar addition: the scalar is added to both components.
impl Add<HyperbolicNumber> for f64 {
    type Output = HyperbolicNumber;

    #[inline]
    fn add(self, rhs: HyperbolicNumber) -> HyperbolicNumber {
        HyperbolicNumber::new(self + rhs.a, self + rhs.b)
    }
}

impl Sub for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.a - other.a, self.b - other.b)
    }
}

impl Neg for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b)
    }
}

/// Split-complex product
///
/// x · y = (a₁a₂ + b₁b₂) + (a₁b₂ + b₁a₂)j
///
/// The cross terms add because j² = +1.
impl Mul for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.b,
            self.a * other.b + self.b * other.a,
        )
    }
}

/// Lifted multiplication: the scalar becomes (s, 0) before the product.
impl Mul<f64> for HyperbolicNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self * Self::from_scalar(rhs)
    }
}

/// Left-scalar multiplication: scales both components.
impl Mul<HyperbolicNumber> for f64 {
    type Output = HyperbolicNumber;

    #[inline]
    fn mul(self, rhs: HyperbolicNumber) -> HyperbolicNumber {
        HyperbolicNumber::new(self * rhs.a, self * rhs.b)
    }
}

// =============================================================================
// Scalar Equality
// =============================================================================

/// A scalar compares equal to a hyperbolic number iff the number equals the
/// lifted (s, 0).
impl PartialEq<f64> for HyperbolicNumber {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == Self::from_scalar(*other)
    }
}

impl PartialEq<HyperbolicNumber> for f64 {
    #[inline]
    fn eq(&self, other: &HyperbolicNumber) -> bool {
        HyperbolicNumber::from_scalar(*self) == *other
    }
}

// =============================================================================
// Hashing
// =============================================================================

/// Bit pattern used for hashing, with -0.0 folded into 0.0 so that equal
/// values hash identically.
#[inline]
fn component_bits(x: f64) -> u64 {
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// Hashes the (a, b) pair, consistent with `==` for non-NaN components.
///
/// The components are floats, so the type is `PartialEq` but not `Eq`;
/// lookup-key use requires NaN-free values.
impl Hash for HyperbolicNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        component_bits(self.a).hash(state);
        component_bits(self.b).hash(state);
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

/// Renders as the component tuple `(a, b)`.
impl fmt::Display for HyperbolicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Debug uses the same tuple rendering as Display.
impl fmt::Debug for HyperbolicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Real part of a hyperbolic number.
#[inline]
pub fn re(h: HyperbolicNumber) -> f64 {
    h.re()
}

/// Hyperbolic part of a hyperbolic number.
#[inline]
pub fn hyp(h: HyperbolicNumber) -> f64 {
    h.hyp()
}

/// Magnitude of a hyperbolic number: sqrt(a² + b²).
#[inline]
pub fn mag(h: HyperbolicNumber) -> f64 {
    h.mag()
}
