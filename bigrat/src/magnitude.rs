//! Unsigned big integers, used as the magnitude (absolute value) of `BigInt`.
//!
//! Everything in here ignores signs. The signed layer is in `bigint`, and it
//! only calls what is here after checking the preconditions (such as
//! "the left operand of a subtraction is not smaller than the right one").

use std::{
	cmp::Ordering,
	fmt,
	ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

/// The type of one digit. The base used for the representation of the digits
/// is `BASE`, which is smaller than the number of values a `Digit` can hold,
/// so every operation must reduce its digits modulo `BASE` explicitly.
pub(crate) type Digit = u8;

/// The base in which digits are stored. Computations on digits are done with
/// `u64`s, which is why the base is a `u64` too.
///
/// A base that is a power of ten makes decimal rendering a matter of padding
/// each digit.
pub const BASE: u64 = 100;

/// Number of decimal characters needed to write the biggest digit, `BASE - 1`.
pub const DIGIT_WIDTH: usize = 2;

/// Unsigned big integer. Actually a list of digits in base `BASE`
/// represented with the integer type `Digit`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
	/// The most significants digits are at the back.
	/// There shall not be insignificant leading zeros.
	/// The value zero is represented by an empty list of digits.
	///
	/// Respecting these rules ensures that each unsigned integer value can be
	/// represented by one unique representation, which makes the derived
	/// `PartialEq` and `Hash` correct.
	///
	/// For example, the number 123456 is stored as `vec![56, 34, 12]`.
	digits: Vec<Digit>,
}

impl Magnitude {
	pub(crate) fn zero() -> Magnitude {
		Magnitude { digits: Vec::new() }
	}

	pub(crate) fn is_zero(&self) -> bool {
		self.digits.is_empty()
	}

	pub(crate) fn is_one(&self) -> bool {
		self.digits == [1]
	}

	/// Removes the insignificant leading zeros that may have been added
	/// by initialisation or for convinience.
	///
	/// All the methods shall not allow `self` or a returned `Magnitude`
	/// to contain insignificant leading zeros.
	fn remove_illegal_leading_zeros(&mut self) {
		while self.digits.last().copied() == Some(0) {
			self.digits.pop();
		}
	}

	/// Interpret the given digits as the digits of the returned `Magnitude`,
	/// least significant first. The digits must all be smaller than `BASE`,
	/// which is checked by the callers that get their digits from outside.
	///
	/// Insignificant leading zeros (at the back) are allowed and removed.
	pub(crate) fn from_digits_with_most_significant_at_the_back(
		digits: Vec<Digit>,
	) -> Magnitude {
		debug_assert!(digits.iter().all(|&digit| u64::from(digit) < BASE));
		let mut magnitude = Magnitude { digits };
		magnitude.remove_illegal_leading_zeros();
		magnitude
	}

	/// The digits, least significant first.
	pub(crate) fn digits(&self) -> &[Digit] {
		&self.digits
	}

	/// Iterate over the digits, beginning with the most significant digits
	/// (i.e. iterating "from the left").
	pub(crate) fn iter_digits_from_most_significant(
		&self,
	) -> impl Iterator<Item = Digit> + '_ {
		self.digits.iter().rev().copied()
	}

	/// Get the `index`th least significant digit when considering that there
	/// are infinitely many insignificant leading zeros.
	fn get_nth_least_significant_digit_with_leading_zeros(&self, index: usize) -> Digit {
		self.digits.get(index).copied().unwrap_or(0)
	}

	/// Perform `self = self * BASE + digit`.
	fn shift_in_least_significant(&mut self, digit: Digit) {
		if self.is_zero() && digit == 0 {
			// Would be an illegal leading zero.
			return;
		}
		self.digits.insert(0, digit);
	}

	/// Long division in base `BASE`, returns `(quotient, remainder)`.
	///
	/// The dividend digits are brought down one by one (most significant
	/// first) into the running remainder, and each quotient digit is found by
	/// subtracting the divisor from that remainder as long as it fits, which
	/// is at most `BASE - 1` times.
	///
	/// # Panics
	///
	/// Panics if `divisor` is zero.
	pub(crate) fn div_rem(&self, divisor: &Magnitude) -> (Magnitude, Magnitude) {
		assert!(!divisor.is_zero(), "dividing a Magnitude by zero");

		if self < divisor {
			return (Magnitude::zero(), self.clone());
		}

		let mut quotient_digits: Vec<Digit> = Vec::with_capacity(self.digits.len());
		let mut remainder = Magnitude::zero();
		for digit in self.iter_digits_from_most_significant() {
			// The remainder is smaller than the divisor before the shift,
			// so it is smaller than `divisor * BASE` after it.
			remainder.shift_in_least_significant(digit);

			let mut quotient_digit: Digit = 0;
			while remainder >= *divisor {
				remainder -= divisor;
				quotient_digit += 1;
			}
			debug_assert!(u64::from(quotient_digit) < BASE);
			quotient_digits.push(quotient_digit);
		}

		// The quotient digits were produced most significant first.
		quotient_digits.reverse();
		(
			Magnitude::from_digits_with_most_significant_at_the_back(quotient_digits),
			remainder,
		)
	}

	/// Greatest common divisor, by Euclid's algorithm.
	/// `gcd(0, 0)` is zero and `gcd(x, 0)` is `x`.
	pub(crate) fn gcd(&self, other: &Magnitude) -> Magnitude {
		let mut a = self.clone();
		let mut b = other.clone();
		while !b.is_zero() {
			let (_, remainder) = a.div_rem(&b);
			a = b;
			b = remainder;
		}
		a
	}
}

impl From<u128> for Magnitude {
	fn from(mut value: u128) -> Magnitude {
		let base = u128::from(BASE);
		let mut digits: Vec<Digit> = Vec::new();

		// Extract the digits in base `BASE` from `value`,
		// with the most significants digits at the back
		// (same layout in `Magnitude` so no reversing).
		while value > 0 {
			digits.push((value % base) as Digit);
			value /= base;
		}

		Magnitude::from_digits_with_most_significant_at_the_back(digits)
	}
}

impl Ord for Magnitude {
	fn cmp(&self, rhs: &Magnitude) -> Ordering {
		// First, look if one integer has more digits than the other,
		// in which case that would be the bigger one (there are no
		// insignificant leading zeros to fool us).
		match self.digits.len().cmp(&rhs.digits.len()) {
			Ordering::Equal => (),
			not_equal => return not_equal,
		}

		// Both integers have the same number of digits.
		// The only digit to digit difference that matters is the most
		// significant one, so we start from there.
		for (digit_self, digit_rhs) in self
			.iter_digits_from_most_significant()
			.zip(rhs.iter_digits_from_most_significant())
		{
			match digit_self.cmp(&digit_rhs) {
				Ordering::Equal => (),
				not_equal => return not_equal,
			}
		}

		Ordering::Equal
	}
}
impl PartialOrd for Magnitude {
	fn partial_cmp(&self, rhs: &Magnitude) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

impl AddAssign<&Magnitude> for Magnitude {
	fn add_assign(&mut self, rhs: &Magnitude) {
		// When a digit to digit addition produces a result too big to fit
		// in the one digit being iterated over, this `carry` gets what
		// remains from the digit to digit sum to carry to the next iteration.
		let mut carry = 0;

		// Make room for the longest operand plus a possible final carry,
		// the unused leading zero is removed before returning.
		let len = self.digits.len().max(rhs.digits.len()) + 1;
		self.digits.resize(len, 0);

		// Iterating beginning from the least significant digits.
		for i in 0..len {
			if i >= rhs.digits.len() && carry == 0 {
				// There is no digit left nor a carry to add to `self`.
				break;
			}

			let self_digit = u64::from(self.digits[i]);
			let rhs_digit = u64::from(rhs.get_nth_least_significant_digit_with_leading_zeros(i));

			let digit_sum = self_digit + rhs_digit + carry;
			self.digits[i] = (digit_sum % BASE) as Digit;
			carry = digit_sum / BASE;
			debug_assert!(carry == 0 || carry == 1);
		}

		self.remove_illegal_leading_zeros();
	}
}
impl Add<&Magnitude> for &Magnitude {
	type Output = Magnitude;
	fn add(self, rhs: &Magnitude) -> Magnitude {
		let mut res = self.clone();
		res += rhs;
		res
	}
}

impl SubAssign<&Magnitude> for Magnitude {
	/// Perform `self = self - rhs`.
	///
	/// # Panics
	///
	/// Panics if `self < rhs`, the result would need a sign.
	fn sub_assign(&mut self, rhs: &Magnitude) {
		// When a digit from `self` is too small to stand the subtraction with
		// the digit from `rhs`, this `borrow` moves some value from the next
		// (more significant) digit of `self`.
		let mut borrow = 0;

		for i in 0.. {
			if i >= rhs.digits.len() && borrow == 0 {
				// There is no digit left nor any borrow to subtract from `self`.
				break;
			}

			if i >= self.digits.len() {
				// Iterating past the most significant digit of `self` while still
				// having something to subtract means that `rhs` was bigger.
				panic!("subtracting a Magnitude from a smaller Magnitude");
			}

			let mut top_digit = u64::from(self.digits[i]);
			let bottom_digit =
				u64::from(rhs.get_nth_least_significant_digit_with_leading_zeros(i)) + borrow;
			borrow = 0;
			if top_digit < bottom_digit {
				top_digit += BASE;
				borrow = 1;
			}
			self.digits[i] = (top_digit - bottom_digit) as Digit;
		}

		// Something like `x - x` makes all the digits become zero.
		self.remove_illegal_leading_zeros();
	}
}
impl Sub<&Magnitude> for &Magnitude {
	type Output = Magnitude;
	fn sub(self, rhs: &Magnitude) -> Magnitude {
		let mut res = self.clone();
		res -= rhs;
		res
	}
}

impl Mul<&Magnitude> for &Magnitude {
	type Output = Magnitude;

	fn mul(self, rhs: &Magnitude) -> Magnitude {
		if self.is_zero() || rhs.is_zero() {
			return Magnitude::zero();
		}

		// Digit by digit products are added directly into their place `i + j`
		// of the result, with a carry for the ongoing addition, instead of
		// building and summing one intermediary product per digit of `rhs`.
		let mut res_digits: Vec<Digit> = vec![0; self.digits.len() + rhs.digits.len()];

		for (i_rhs, &rhs_digit) in rhs.digits.iter().enumerate() {
			let mut carry = 0;
			for (i_self, &self_digit) in self.digits.iter().enumerate() {
				let i_res = i_self + i_rhs;
				let digit_sum = u64::from(res_digits[i_res])
					+ u64::from(self_digit) * u64::from(rhs_digit)
					+ carry;
				res_digits[i_res] = (digit_sum % BASE) as Digit;
				carry = digit_sum / BASE;
			}
			// Nothing was written at this index yet.
			res_digits[self.digits.len() + i_rhs] = carry as Digit;
		}

		Magnitude::from_digits_with_most_significant_at_the_back(res_digits)
	}
}

impl fmt::Display for Magnitude {
	/// Decimal rendering: the most significant digit as is, then every other
	/// digit padded with zeros to `DIGIT_WIDTH` characters.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut digits = self.iter_digits_from_most_significant();
		match digits.next() {
			None => write!(f, "0"),
			Some(most_significant) => {
				write!(f, "{}", most_significant)?;
				for digit in digits {
					write!(f, "{:0width$}", digit, width = DIGIT_WIDTH)?;
				}
				Ok(())
			},
		}
	}
}
