//! Property-based tests for the integer and rational arithmetic.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{BigInt, Rational, BASE};

// Products of two of these still fit in an `i128`, which gives a reference.
fn any_i64() -> impl Strategy<Value = i64> {
	any::<i64>()
}

fn non_zero_i64() -> impl Strategy<Value = i64> {
	any::<i64>().prop_filter("non-zero", |&value| value != 0)
}

fn small_int() -> impl Strategy<Value = i64> {
	-1000i64..1000i64
}

fn non_zero_small_int() -> impl Strategy<Value = i64> {
	prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

// Integers longer than any native type, from raw digits.
fn huge_int() -> impl Strategy<Value = BigInt> {
	(any::<bool>(), prop::collection::vec(0..BASE as u8, 0..40))
		.prop_map(|(negative, digits)| BigInt::from_digits(negative, &digits).unwrap())
}

fn rational() -> impl Strategy<Value = Rational> {
	(small_int(), non_zero_small_int())
		.prop_map(|(n, d)| Rational::new(BigInt::from(n), BigInt::from(d)).unwrap())
}

proptest! {
	// Canonical form and rendering

	#[test]
	fn canonical_form(value in huge_int()) {
		prop_assert_ne!(value.digits().last().copied(), Some(0));
		prop_assert_eq!(value.is_zero(), value.digits().is_empty());
		if value.is_zero() {
			prop_assert!(!value.is_negative());
		}
	}

	#[test]
	fn render_like_native(value in any::<i64>()) {
		prop_assert_eq!(BigInt::from(value).to_string(), value.to_string());
	}

	#[test]
	fn render_like_native_wide(value in any::<i128>()) {
		prop_assert_eq!(BigInt::from(value).to_string(), value.to_string());
	}

	// Integer ring axioms

	#[test]
	fn integer_matches_native(a in any_i64(), b in any_i64()) {
		let (a_big, b_big) = (BigInt::from(a), BigInt::from(b));
		let (a, b) = (i128::from(a), i128::from(b));
		prop_assert_eq!(&a_big + &b_big, BigInt::from(a + b));
		prop_assert_eq!(&a_big - &b_big, BigInt::from(a - b));
		prop_assert_eq!(&a_big * &b_big, BigInt::from(a * b));
		prop_assert_eq!(a_big.cmp(&b_big), a.cmp(&b));
	}

	#[test]
	fn integer_add_identity_and_inverse(a in huge_int()) {
		prop_assert_eq!(&a + &BigInt::zero(), a.clone());
		let sum = &a + &(-&a);
		prop_assert!(sum.is_zero());
		prop_assert!(!sum.is_negative());
	}

	#[test]
	fn integer_add_commutative(a in huge_int(), b in huge_int()) {
		prop_assert_eq!(&a + &b, &b + &a);
	}

	#[test]
	fn integer_add_associative(a in huge_int(), b in huge_int(), c in huge_int()) {
		prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
	}

	#[test]
	fn integer_mul_commutative(a in huge_int(), b in huge_int()) {
		prop_assert_eq!(&a * &b, &b * &a);
	}

	#[test]
	fn integer_mul_associative(a in huge_int(), b in huge_int(), c in huge_int()) {
		prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
	}

	#[test]
	fn integer_distributive(a in huge_int(), b in huge_int(), c in huge_int()) {
		prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
	}

	#[test]
	fn integer_mul_identity(a in huge_int()) {
		prop_assert_eq!(&a * &BigInt::one(), a.clone());
		prop_assert!((&a * &BigInt::zero()).is_zero());
	}

	// Ordering

	#[test]
	fn ordering_total(a in huge_int(), b in huge_int()) {
		let holding = [a < b, a == b, a > b].iter().filter(|&&holds| holds).count();
		prop_assert_eq!(holding, 1);
		prop_assert_eq!(a < b, b > a);
	}

	#[test]
	fn ordering_matches_subtraction(a in huge_int(), b in huge_int()) {
		let difference = &a - &b;
		prop_assert_eq!(a.cmp(&b), difference.signum().cmp(&0));
	}

	// Division

	#[test]
	fn div_rem_contract(a in huge_int(), b in huge_int()) {
		prop_assume!(!b.is_zero());
		let (quotient, remainder) = a.div_rem(&b).unwrap();
		prop_assert_eq!(&(&quotient * &b) + &remainder, a.clone());
		prop_assert!(remainder.abs() < b.abs());
		prop_assert!(remainder.is_zero() || remainder.is_negative() == a.is_negative());
	}

	#[test]
	fn div_rem_matches_native(a in any_i64(), b in non_zero_i64()) {
		let (a, b) = (i128::from(a), i128::from(b));
		let (quotient, remainder) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
		prop_assert_eq!(quotient, BigInt::from(a / b));
		prop_assert_eq!(remainder, BigInt::from(a % b));
	}

	#[test]
	fn gcd_divides_both(a in huge_int(), b in huge_int()) {
		let gcd = a.gcd(&b);
		prop_assert!(!gcd.is_negative());
		if gcd.is_zero() {
			prop_assert!(a.is_zero() && b.is_zero());
		} else {
			prop_assert!(a.checked_rem(&gcd).unwrap().is_zero());
			prop_assert!(b.checked_rem(&gcd).unwrap().is_zero());
			let a_part = a.checked_div(&gcd).unwrap();
			let b_part = b.checked_div(&gcd).unwrap();
			prop_assert!(a_part.gcd(&b_part).is_one());
		}
	}

	#[test]
	fn gcd_commutative(a in huge_int(), b in huge_int()) {
		prop_assert_eq!(a.gcd(&b), b.gcd(&a));
	}

	// Rational normal form and field axioms

	#[test]
	fn rational_normal_form(n in huge_int(), d in huge_int()) {
		prop_assume!(!d.is_zero());
		let r = Rational::new(n, d).unwrap();
		prop_assert!(!r.denominator().is_negative() && !r.denominator().is_zero());
		prop_assert!(r.numerator().gcd(r.denominator()).is_one());
		if r.is_zero() {
			prop_assert_eq!(r.to_string(), "0");
		}
	}

	#[test]
	fn rational_scaling_invariant(n in small_int(), d in non_zero_small_int(), k in non_zero_small_int()) {
		let (n, d, k) = (BigInt::from(n), BigInt::from(d), BigInt::from(k));
		let r = Rational::new(n.clone(), d.clone()).unwrap();
		let scaled = Rational::new(&n * &k, &d * &k).unwrap();
		prop_assert_eq!(r.to_string(), scaled.to_string());
		prop_assert_eq!(r, scaled);
	}

	#[test]
	fn rational_eq_symmetric_transitive(a in rational(), b in rational(), c in rational()) {
		prop_assert_eq!(a == b, b == a);
		if a == b && b == c {
			prop_assert_eq!(a, c);
		}
	}

	#[test]
	fn rational_add_commutative(a in rational(), b in rational()) {
		prop_assert_eq!(&a + &b, &b + &a);
	}

	#[test]
	fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
		prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
	}

	#[test]
	fn rational_mul_commutative(a in rational(), b in rational()) {
		prop_assert_eq!(&a * &b, &b * &a);
	}

	#[test]
	fn rational_distributive(a in rational(), b in rational(), c in rational()) {
		prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
	}

	#[test]
	fn rational_additive_inverse(a in rational()) {
		prop_assert!((&a - &a).is_zero());
		prop_assert_eq!((&a + &(-&a)).to_string(), "0");
	}

	#[test]
	fn rational_multiplicative_inverse(a in rational()) {
		prop_assume!(!a.is_zero());
		let product = &a * &a.recip().unwrap();
		prop_assert!(product.is_one());
		prop_assert!(a.checked_div(&a).unwrap().is_one());
	}

	#[test]
	fn rational_ordering_consistent(a in rational(), b in rational()) {
		prop_assert_eq!(a < b, (&a - &b).is_negative());
	}
}
