//! # bigrat
//!
//! Arbitrary-precision signed integers (`BigInt`) and, on top of them,
//! exact rational numbers (`Rational`).
//!
//! Integers are stored as base `BASE` digits, least significant first, in
//! a canonical form (no leading zero digit, zero is never negative).
//! Rationals are always kept in lowest terms with a positive denominator.
//!
//! Operations that can fail return `Result<_, ArithError>`:
//!
//! ```
//! use bigrat::{ArithError, BigInt, Rational};
//!
//! let half = Rational::new(BigInt::from(2), BigInt::from(4))?;
//! let third = Rational::new(BigInt::from(1), BigInt::from(3))?;
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!(half.checked_div(&Rational::from(2)).map(|r| r.to_string()), Ok("1/4".to_string()));
//! assert_eq!(
//! 	Rational::new(BigInt::from(1), BigInt::from(0)),
//! 	Err(ArithError::ZeroDenominator)
//! );
//! # Ok::<(), ArithError>(())
//! ```

#![warn(clippy::all)]

mod bigint;
mod error;
mod magnitude;
mod rational;

#[cfg(test)]
mod proptests;

pub use bigint::BigInt;
pub use error::{ArithError, DoesNotFit};
pub use magnitude::{BASE, DIGIT_WIDTH};
pub use rational::Rational;
