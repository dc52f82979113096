use thiserror::Error;

/// An arithmetic operation was asked something it cannot do.
///
/// These are contract violations by the caller, they are never turned into
/// some default value by the library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
	/// A digit given to `BigInt::from_digits` is not in `[0, BASE)`.
	#[error("invalid digit {digit} at position {position}, digits must be in [0, {base})", base = crate::BASE)]
	InvalidDigit { digit: u8, position: usize },

	/// Division of a `BigInt` by zero, or of a `Rational` by a zero fraction.
	#[error("division by zero")]
	DivisionByZero,

	/// A `Rational` was constructed with a zero denominator.
	#[error("rational denominator cannot be zero")]
	ZeroDenominator,
}

/// A conversion from a big number into a primitive integer type failed due
/// to the value not being representable by the primitive integer type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the value does not fit in the target integer type")]
pub struct DoesNotFit;
