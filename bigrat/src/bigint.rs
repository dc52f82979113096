//! Signed big integers.
//!
//! A `BigInt` is a sign and a `Magnitude`. All the digit crunching happens in
//! the `magnitude` module, this layer only decides which magnitude operation
//! to run and what sign the result gets.

use std::{
	cmp::Ordering,
	fmt,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};

use crate::{
	error::{ArithError, DoesNotFit},
	magnitude::{Magnitude, BASE},
};

/// Arbitrary-precision signed integer.
///
/// Values are immutable, every operation returns a new `BigInt`.
/// Zero is never negative, so the derived `PartialEq` and `Hash` only ever
/// see one representation per value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
	negative: bool,
	magnitude: Magnitude,
}

impl BigInt {
	/// The only way a `BigInt` gets built, makes sure zero is non-negative.
	fn from_parts(negative: bool, magnitude: Magnitude) -> BigInt {
		let negative = negative && !magnitude.is_zero();
		BigInt { negative, magnitude }
	}

	/// Builds a `BigInt` from a sign and its digits in base `BASE`,
	/// least significant digit first.
	///
	/// For example, `from_digits(true, &[45, 23, 1])` is -12345.
	/// Insignificant leading zeros (at the end of `digits`) are allowed,
	/// and a negative zero is just zero.
	///
	/// # Errors
	///
	/// Returns `ArithError::InvalidDigit` if a digit is not smaller than `BASE`.
	pub fn from_digits(negative: bool, digits: &[u8]) -> Result<BigInt, ArithError> {
		if let Some((position, &digit)) = digits
			.iter()
			.enumerate()
			.find(|&(_, &digit)| u64::from(digit) >= BASE)
		{
			return Err(ArithError::InvalidDigit { digit, position });
		}
		let magnitude = Magnitude::from_digits_with_most_significant_at_the_back(digits.to_vec());
		Ok(BigInt::from_parts(negative, magnitude))
	}

	/// The digits in base `BASE`, least significant first.
	/// Empty for zero, never ends with a zero.
	#[must_use]
	pub fn digits(&self) -> &[u8] {
		self.magnitude.digits()
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}

	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Returns -1, 0 or 1.
	#[must_use]
	pub fn signum(&self) -> i8 {
		if self.magnitude.is_zero() {
			0
		} else if self.negative {
			-1
		} else {
			1
		}
	}

	#[must_use]
	pub fn abs(&self) -> BigInt {
		BigInt::from_parts(false, self.magnitude.clone())
	}

	/// Division truncated toward zero.
	///
	/// Returns `(quotient, remainder)` such that
	/// `self == quotient * divisor + remainder`, with `|remainder| < |divisor|`
	/// and the remainder having the sign of `self` (or being zero).
	///
	/// # Errors
	///
	/// Returns `ArithError::DivisionByZero` if `divisor` is zero.
	pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithError> {
		if divisor.is_zero() {
			return Err(ArithError::DivisionByZero);
		}
		let (quotient, remainder) = self.magnitude.div_rem(&divisor.magnitude);
		Ok((
			BigInt::from_parts(self.negative != divisor.negative, quotient),
			BigInt::from_parts(self.negative, remainder),
		))
	}

	/// Quotient of the truncating division, see `div_rem`.
	///
	/// # Errors
	///
	/// Returns `ArithError::DivisionByZero` if `divisor` is zero.
	pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, ArithError> {
		self.div_rem(divisor).map(|(quotient, _)| quotient)
	}

	/// Remainder of the truncating division, see `div_rem`.
	///
	/// # Errors
	///
	/// Returns `ArithError::DivisionByZero` if `divisor` is zero.
	pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, ArithError> {
		self.div_rem(divisor).map(|(_, remainder)| remainder)
	}

	/// Greatest common divisor, always non-negative.
	/// `gcd(0, 0)` is 0 and `gcd(x, 0)` is `|x|`.
	#[must_use]
	pub fn gcd(&self, other: &BigInt) -> BigInt {
		BigInt::from_parts(false, self.magnitude.gcd(&other.magnitude))
	}

	/// Least common multiple, always non-negative. Zero if either is zero.
	#[must_use]
	pub fn lcm(&self, other: &BigInt) -> BigInt {
		if self.is_zero() || other.is_zero() {
			return BigInt::zero();
		}
		let gcd = self.magnitude.gcd(&other.magnitude);
		let (quotient, _) = self.magnitude.div_rem(&gcd);
		BigInt::from_parts(false, &quotient * &other.magnitude)
	}

	/// Division that is known to be exact with a non-zero divisor,
	/// such as a division by a gcd.
	pub(crate) fn div_exact(&self, divisor: &BigInt) -> BigInt {
		let (quotient, remainder) = self.magnitude.div_rem(&divisor.magnitude);
		debug_assert!(remainder.is_zero(), "inexact division");
		BigInt::from_parts(self.negative != divisor.negative, quotient)
	}
}

/// Both the primitive types and the `From` trait are not local to this crate,
/// so the conversions are written one by one, but all at once.
macro_rules! impl_from_primitive_signed {
	($($primitive_type:ty),*) => {
		$(
			impl From<$primitive_type> for BigInt {
				fn from(value: $primitive_type) -> BigInt {
					// `unsigned_abs` widens, so the minimum value is fine.
					let magnitude = Magnitude::from(value.unsigned_abs() as u128);
					BigInt::from_parts(value < 0, magnitude)
				}
			}
		)*
	}
}
impl_from_primitive_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_from_primitive_unsigned {
	($($primitive_type:ty),*) => {
		$(
			impl From<$primitive_type> for BigInt {
				fn from(value: $primitive_type) -> BigInt {
					BigInt::from_parts(false, Magnitude::from(value as u128))
				}
			}
		)*
	}
}
impl_from_primitive_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_from_big_int {
	($($primitive_type:ty),*) => {
		$(
			impl TryFrom<&BigInt> for $primitive_type {
				type Error = DoesNotFit;

				fn try_from(value: &BigInt) -> Result<$primitive_type, DoesNotFit> {
					let base = <$primitive_type>::try_from(BASE).map_err(|_| DoesNotFit)?;
					// Accumulating toward the sign of the value rather than
					// negating at the end lets the minimum value fit.
					let mut acc: $primitive_type = 0;
					for digit in value.magnitude.iter_digits_from_most_significant() {
						let digit = <$primitive_type>::try_from(digit).map_err(|_| DoesNotFit)?;
						acc = acc.checked_mul(base).ok_or(DoesNotFit)?;
						acc = if value.negative {
							acc.checked_sub(digit)
						} else {
							acc.checked_add(digit)
						}
						.ok_or(DoesNotFit)?;
					}
					Ok(acc)
				}
			}
		)*
	}
}
impl_try_from_big_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Ord for BigInt {
	fn cmp(&self, rhs: &BigInt) -> Ordering {
		match (self.negative, rhs.negative) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(false, false) => self.magnitude.cmp(&rhs.magnitude),
			// The bigger magnitude is the smaller value.
			(true, true) => rhs.magnitude.cmp(&self.magnitude),
		}
	}
}
impl PartialOrd for BigInt {
	fn partial_cmp(&self, rhs: &BigInt) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

impl Neg for &BigInt {
	type Output = BigInt;
	fn neg(self) -> BigInt {
		BigInt::from_parts(!self.negative, self.magnitude.clone())
	}
}
impl Neg for BigInt {
	type Output = BigInt;
	fn neg(self) -> BigInt {
		BigInt::from_parts(!self.negative, self.magnitude)
	}
}

impl BigInt {
	/// `self + (-1)^rhs_negative * rhs_magnitude`, shared by `+` and `-`
	/// so that subtraction does not have to clone `rhs` to negate it.
	fn add_signed(&self, rhs_negative: bool, rhs_magnitude: &Magnitude) -> BigInt {
		if self.negative == rhs_negative {
			return BigInt::from_parts(self.negative, &self.magnitude + rhs_magnitude);
		}
		match self.magnitude.cmp(rhs_magnitude) {
			Ordering::Equal => BigInt::zero(),
			Ordering::Greater => {
				BigInt::from_parts(self.negative, &self.magnitude - rhs_magnitude)
			},
			Ordering::Less => BigInt::from_parts(rhs_negative, rhs_magnitude - &self.magnitude),
		}
	}
}

impl Add<&BigInt> for &BigInt {
	type Output = BigInt;
	fn add(self, rhs: &BigInt) -> BigInt {
		self.add_signed(rhs.negative, &rhs.magnitude)
	}
}

impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;
	fn sub(self, rhs: &BigInt) -> BigInt {
		self.add_signed(!rhs.negative, &rhs.magnitude)
	}
}

impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;
	fn mul(self, rhs: &BigInt) -> BigInt {
		BigInt::from_parts(
			self.negative != rhs.negative,
			&self.magnitude * &rhs.magnitude,
		)
	}
}

/// The `&BigInt op &BigInt` impls do the work, these macros provide
/// the owned variants and the compound assignments on top of them.
macro_rules! forward_binop {
	($type:ty, $trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident) => {
		impl $trait<$type> for $type {
			type Output = $type;
			fn $method(self, rhs: $type) -> $type {
				(&self).$method(&rhs)
			}
		}
		impl $trait<&$type> for $type {
			type Output = $type;
			fn $method(self, rhs: &$type) -> $type {
				(&self).$method(rhs)
			}
		}
		impl $trait<$type> for &$type {
			type Output = $type;
			fn $method(self, rhs: $type) -> $type {
				self.$method(&rhs)
			}
		}
		impl $trait_assign<&$type> for $type {
			fn $method_assign(&mut self, rhs: &$type) {
				*self = (&*self).$method(rhs);
			}
		}
		impl $trait_assign<$type> for $type {
			fn $method_assign(&mut self, rhs: $type) {
				*self = (&*self).$method(&rhs);
			}
		}
	};
}
pub(crate) use forward_binop;

forward_binop!(BigInt, Add, add, AddAssign, add_assign);
forward_binop!(BigInt, Sub, sub, SubAssign, sub_assign);
forward_binop!(BigInt, Mul, mul, MulAssign, mul_assign);

impl Zero for BigInt {
	fn zero() -> BigInt {
		BigInt::from_parts(false, Magnitude::zero())
	}

	fn is_zero(&self) -> bool {
		BigInt::is_zero(self)
	}
}

impl One for BigInt {
	fn one() -> BigInt {
		BigInt::from(1u8)
	}

	fn is_one(&self) -> bool {
		!self.negative && self.magnitude.is_one()
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negative {
			write!(f, "-")?;
		}
		write!(f, "{}", self.magnitude)
	}
}
