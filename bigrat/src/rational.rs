//! Exact rational numbers, as a pair of `BigInt`s kept in lowest terms.

use std::{
	cmp::Ordering,
	fmt,
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{One, Zero};

use crate::{bigint::forward_binop, error::ArithError, BigInt};

/// Arbitrary-precision rational number.
///
/// Always in normal form: the denominator is positive, numerator and
/// denominator are coprime, and zero is `0/1`. Every constructor and every
/// operation goes through the same normalization.
#[derive(Clone, Debug)]
pub struct Rational {
	numerator: BigInt,
	denominator: BigInt,
}

impl Rational {
	/// Builds `numerator / denominator` in lowest terms.
	///
	/// # Errors
	///
	/// Returns `ArithError::ZeroDenominator` if `denominator` is zero.
	pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Rational, ArithError> {
		if denominator.is_zero() {
			return Err(ArithError::ZeroDenominator);
		}
		Ok(Rational::normalized(numerator, denominator))
	}

	/// Builds `n / 1`.
	#[must_use]
	pub fn from_integer(n: BigInt) -> Rational {
		Rational::normalized(n, BigInt::one())
	}

	/// The denominator must not be zero, callers check it beforehand
	/// (or know it from the normal form of the operands).
	fn normalized(numerator: BigInt, denominator: BigInt) -> Rational {
		debug_assert!(!denominator.is_zero(), "zero denominator reached normalization");

		let (mut numerator, mut denominator) = if denominator.is_negative() {
			(-numerator, -denominator)
		} else {
			(numerator, denominator)
		};

		let divisor = numerator.gcd(&denominator);
		if divisor > BigInt::one() {
			numerator = numerator.div_exact(&divisor);
			denominator = denominator.div_exact(&divisor);
		}

		if numerator.is_zero() {
			denominator = BigInt::one();
		}

		Rational { numerator, denominator }
	}

	/// Can be negative.
	#[must_use]
	pub fn numerator(&self) -> &BigInt {
		&self.numerator
	}

	/// Always positive.
	#[must_use]
	pub fn denominator(&self) -> &BigInt {
		&self.denominator
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.numerator.is_zero()
	}

	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.numerator.is_negative()
	}

	/// Returns -1, 0 or 1.
	#[must_use]
	pub fn signum(&self) -> i8 {
		self.numerator.signum()
	}

	#[must_use]
	pub fn is_integer(&self) -> bool {
		self.denominator.is_one()
	}

	/// The integer value if the denominator is 1.
	#[must_use]
	pub fn to_integer(&self) -> Option<BigInt> {
		self.is_integer().then(|| self.numerator.clone())
	}

	#[must_use]
	pub fn abs(&self) -> Rational {
		Rational {
			numerator: self.numerator.abs(),
			denominator: self.denominator.clone(),
		}
	}

	/// Returns `1 / self`.
	///
	/// # Errors
	///
	/// Returns `ArithError::DivisionByZero` if `self` is zero.
	pub fn recip(&self) -> Result<Rational, ArithError> {
		if self.is_zero() {
			return Err(ArithError::DivisionByZero);
		}
		Ok(Rational::normalized(self.denominator.clone(), self.numerator.clone()))
	}

	/// Returns `self / divisor`.
	///
	/// # Errors
	///
	/// Returns `ArithError::DivisionByZero` if `divisor` is zero.
	pub fn checked_div(&self, divisor: &Rational) -> Result<Rational, ArithError> {
		if divisor.is_zero() {
			return Err(ArithError::DivisionByZero);
		}
		Ok(Rational::normalized(
			&self.numerator * &divisor.denominator,
			&self.denominator * &divisor.numerator,
		))
	}
}

impl Default for Rational {
	fn default() -> Rational {
		Rational::zero()
	}
}

impl From<BigInt> for Rational {
	fn from(n: BigInt) -> Rational {
		Rational::from_integer(n)
	}
}

macro_rules! impl_from_primitive {
	($($primitive_type:ty),*) => {
		$(
			impl From<$primitive_type> for Rational {
				fn from(n: $primitive_type) -> Rational {
					Rational::from_integer(BigInt::from(n))
				}
			}
		)*
	}
}
impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PartialEq for Rational {
	/// Cross-multiplication, `a/b == c/d` iff `a*d == c*b`.
	fn eq(&self, rhs: &Rational) -> bool {
		&self.numerator * &rhs.denominator == &rhs.numerator * &self.denominator
	}
}
impl Eq for Rational {}

impl Ord for Rational {
	fn cmp(&self, rhs: &Rational) -> Ordering {
		// Denominators are positive, multiplying by them keeps the order.
		(&self.numerator * &rhs.denominator).cmp(&(&rhs.numerator * &self.denominator))
	}
}
impl PartialOrd for Rational {
	fn partial_cmp(&self, rhs: &Rational) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

impl Neg for &Rational {
	type Output = Rational;
	fn neg(self) -> Rational {
		Rational::normalized(-&self.numerator, self.denominator.clone())
	}
}
impl Neg for Rational {
	type Output = Rational;
	fn neg(self) -> Rational {
		Rational::normalized(-self.numerator, self.denominator)
	}
}

impl Add<&Rational> for &Rational {
	type Output = Rational;
	fn add(self, rhs: &Rational) -> Rational {
		Rational::normalized(
			&(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
			&self.denominator * &rhs.denominator,
		)
	}
}

impl Sub<&Rational> for &Rational {
	type Output = Rational;
	fn sub(self, rhs: &Rational) -> Rational {
		self + &(-rhs)
	}
}

impl Mul<&Rational> for &Rational {
	type Output = Rational;
	fn mul(self, rhs: &Rational) -> Rational {
		Rational::normalized(
			&self.numerator * &rhs.numerator,
			&self.denominator * &rhs.denominator,
		)
	}
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);
forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);
forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);

impl Zero for Rational {
	fn zero() -> Rational {
		Rational {
			numerator: BigInt::zero(),
			denominator: BigInt::one(),
		}
	}

	fn is_zero(&self) -> bool {
		Rational::is_zero(self)
	}
}

impl One for Rational {
	fn one() -> Rational {
		Rational::from_integer(BigInt::one())
	}

	fn is_one(&self) -> bool {
		self.numerator.is_one() && self.denominator.is_one()
	}
}

impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.numerator)?;
		if !self.denominator.is_one() {
			write!(f, "/{}", self.denominator)?;
		}
		Ok(())
	}
}
