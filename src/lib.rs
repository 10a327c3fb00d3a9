//! Hyperbolic (split-complex) number arithmetic.
//!
//! A hyperbolic number has the form a + bj where the unit j satisfies
//! j² = +1, the complex numbers' alternate-sign sibling. This crate
//! provides the value type, its operator surface, integer exponentiation
//! by squaring, and checked operations for dynamically-typed operands.
//!
//! # Architecture
//!
//! - **number**: [`HyperbolicNumber`] and the free functions
//!   [`re`], [`hyp`], [`mag`]
//! - **operand**: [`Operand`], the tagged union for operands classified
//!   at run time
//! - **error**: [`NumberError`], the failure taxonomy of the checked ops
//!
//! # Example
//!
//! ```
//! use hypernum::{mag, HyperbolicNumber};
//!
//! let x = HyperbolicNumber::new(1.0, 2.0);
//! let y = HyperbolicNumber::new(3.0, 4.0);
//! assert_eq!(x + y, HyperbolicNumber::new(4.0, 6.0));
//!
//! // j² = +1: the unit hyperbolic element squares to one
//! let j = HyperbolicNumber::j();
//! assert_eq!(j * j, HyperbolicNumber::one());
//!
//! // Scalars interact from either side
//! assert_eq!(2.0 * x, HyperbolicNumber::new(2.0, 4.0));
//! assert_eq!(mag(HyperbolicNumber::new(1.0, 0.0)), 1.0);
//! ```

pub mod error;
pub mod number;
pub mod operand;

// Re-exports for convenience
pub use error::NumberError;
pub use number::{hyp, mag, re, HyperbolicNumber};
pub use operand::Operand;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
