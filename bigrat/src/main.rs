mod log;
mod settings;
mod utils;

use bigrat::{ArithError, BigInt, Rational};
use thiserror::Error;

use log::IndentedLog;
use settings::Settings;
use utils::{style_if, styles};

#[derive(Error, Debug)]
pub enum DemoError {
	#[error(transparent)]
	Arith(#[from] ArithError),

	#[error("unknown command line argument `{0}`, try `--help` for usage")]
	UnknownArgument(String),

	#[error("failed to print the debug log")]
	Log(#[from] std::fmt::Error),
}

/// Prints `label: value` lines, followed in debug mode by the internal
/// representation of the value.
struct Demo<'a> {
	settings: &'a Settings,
}

impl<'a> Demo<'a> {
	fn new(settings: &'a Settings) -> Demo<'a> {
		Demo { settings }
	}

	fn section(&self, title: &str) {
		println!("--- {} ---", title);
	}

	fn show_integer(&self, label: &str, value: &BigInt) -> Result<(), DemoError> {
		println!("{}: {}", label, value);
		if self.settings.debug() {
			let mut log = IndentedLog::new();
			self.log_integer(&mut log, label.to_string(), value);
			log.print_to_stdout()?;
		}
		Ok(())
	}

	fn show_rational(&self, label: &str, value: &Rational) -> Result<(), DemoError> {
		println!("{}: {}", label, value);
		if self.settings.debug() {
			let colored = self.settings.colored();
			let mut log = IndentedLog::new();
			log.indent(label.to_string(), style_if(colored, styles::BOLD));
			self.log_integer(&mut log, "numerator".to_string(), value.numerator());
			self.log_integer(&mut log, "denominator".to_string(), value.denominator());
			log.deindent();
			log.print_to_stdout()?;
		}
		Ok(())
	}

	fn show_bool(&self, label: &str, value: bool) {
		println!("{}: {}", label, value);
	}

	fn log_integer(&self, log: &mut IndentedLog, title: String, value: &BigInt) {
		let colored = self.settings.colored();
		log.indent(title, style_if(colored, styles::CYAN));
		let sign = if value.is_negative() { "negative" } else { "non-negative" };
		log.log_line(format!("sign: {}", sign), style_if(colored, styles::YELLOW));
		log.log_line(
			format!("digits (least significant first): {:?}", value.digits()),
			style_if(colored, styles::NORMAL),
		);
		log.deindent();
	}
}

fn main() {
	if let Err(error) = run() {
		eprintln!("{}", error);
		std::process::exit(1);
	}
}

fn run() -> Result<(), DemoError> {
	let settings = Settings::from_args()?;
	if settings.execute_wants() {
		return Ok(());
	}
	let demo = Demo::new(&settings);

	let i1 = BigInt::from_digits(true, &[45, 23, 1])?;
	let i2 = BigInt::from_digits(false, &[99, 66, 33, 0, 0])?;
	let i3 = -&i1;
	let i4 = &i1 + &i2;
	let i5 = &i1 - &i2;
	let i6 = &i1 * &i2;

	if settings.runs_integers() {
		demo.section("Integers");
		demo.show_integer("i1", &i1)?;
		demo.show_integer("i2", &i2)?;
		demo.show_integer("i3 (-i1)", &i3)?;
		demo.show_integer("i4 (i1 + i2)", &i4)?;
		demo.show_integer("i5 (i1 - i2)", &i5)?;
		demo.show_integer("i6 (i1 * i2)", &i6)?;
		let (quotient, remainder) = i2.div_rem(&i1)?;
		demo.show_integer("i2 / i1", &quotient)?;
		demo.show_integer("i2 % i1", &remainder)?;
		demo.show_integer("gcd(i1, i2)", &i1.gcd(&i2))?;
	}

	if settings.runs_rationals() {
		demo.section("Rationals");
		let r1 = Rational::new(i1, i2)?;
		let r2 = Rational::new(i4, i5)?;
		demo.show_rational("r1", &r1)?;
		demo.show_rational("r2", &r2)?;
		demo.show_rational("r3 (-r1)", &-&r1)?;
		demo.show_rational("r4 (r1 + r2)", &(&r1 + &r2))?;
		demo.show_rational("r5 (r1 - r2)", &(&r1 - &r2))?;
		demo.show_rational("r6 (r1 * r2)", &(&r1 * &r2))?;
		demo.show_rational("r7 (r1 / r2)", &r1.checked_div(&r2)?)?;

		demo.section("More rationals");
		let fraction =
			|n: i64, d: i64| Rational::new(BigInt::from(n), BigInt::from(d));
		let r_a = fraction(1, 2)?;
		let r_b = fraction(3, 4)?;
		let r_c = fraction(-1, 3)?;
		let r_d = fraction(2, -5)?;
		let r_zero = fraction(0, 2)?;
		demo.show_rational("r_a", &r_a)?;
		demo.show_rational("r_b", &r_b)?;
		demo.show_rational("r_c", &r_c)?;
		demo.show_rational("r_d", &r_d)?;
		demo.show_rational("r_zero", &r_zero)?;
		demo.show_bool("r_a == 1/2", r_a == fraction(1, 2)?);
		demo.show_bool("r_a == 2/4", r_a == fraction(2, 4)?);
		demo.show_rational("-r_a", &-&r_a)?;
		demo.show_rational("r_a + r_b", &(&r_a + &r_b))?;
		demo.show_rational("r_a - r_b", &(&r_a - &r_b))?;
		demo.show_rational("r_a * r_c", &(&r_a * &r_c))?;
		demo.show_rational("r_a / r_b", &r_a.checked_div(&r_b)?)?;
		demo.show_rational("r_a / r_d", &r_a.checked_div(&r_d)?)?;
	}

	Ok(())
}
