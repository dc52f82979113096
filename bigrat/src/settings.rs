use crate::DemoError;

use std::env;

const HELP_MESSAGE: &str = "\
	Runs a demonstration of the big integer and rational arithmetic.\n\
	\n\
	Options:\n\
	\t-d --debug       Shows the internal representation of every value\n\
	\t-h --help        Prints this help message\n\
	\t-v --version     Prints the version\n\
	\t   --no-color    Does not use colors in debug output\n\
	\t   --integers    Only runs the integer demonstration\n\
	\t   --rationals   Only runs the rational demonstration\n\
	";

const NO_WARRANTY_NOTE: &str = "\
	Please note that there is NO warranty, \
	not even for MERCHANTABILITY or \
	FITNESS FOR A PARTICULAR PURPOSE.";

#[derive(Debug)]
pub struct Settings {
	path: String,
	debug: bool,
	colored: bool,
	only_integers: bool,
	only_rationals: bool,
	wants_help: bool,
	wants_version: bool,
}

impl Settings {
	/// Creates a new `Settings` object filled with default values.
	///
	/// Everything is set as `false` (but colors are on), except `path` that
	/// is set from parameters.
	pub fn new(path: String) -> Settings {
		Settings {
			path,
			debug: false,
			colored: true,
			only_integers: false,
			only_rationals: false,
			wants_help: false,
			wants_version: false,
		}
	}

	/// Retrieves command line arguments to create the settings according to
	/// them.
	pub fn from_args() -> Result<Settings, DemoError> {
		let mut args = env::args(); // retrieved command line arguments
		let path = args.next().unwrap_or_else(|| "bigrat".to_string());
		Settings::from_arg_list(path, args)
	}

	fn from_arg_list(
		path: String,
		args: impl Iterator<Item = String>,
	) -> Result<Settings, DemoError> {
		let mut settings = Settings::new(path);

		for arg in args {
			match arg.as_str() {
				"-d" | "--debug" => {
					settings.debug = true;
				},
				"-h" | "--help" => {
					settings.wants_help = true;
				},
				"-v" | "--version" => {
					settings.wants_version = true;
				},
				"--no-color" => {
					settings.colored = false;
				},
				"--integers" => {
					settings.only_integers = true;
				},
				"--rationals" => {
					settings.only_rationals = true;
				},
				unknown => return Err(DemoError::UnknownArgument(unknown.to_string())),
			}
		}

		Ok(settings)
	}

	/// Executes some wants of the user set in parameters, like version, help.
	///
	/// Returns `true` if the demonstration should not run after that.
	pub fn execute_wants(&self) -> bool {
		let mut did_something = false;

		if self.wants_version {
			println!("bigrat demonstration, version {}", env!("CARGO_PKG_VERSION"));
			println!("{}", NO_WARRANTY_NOTE);
			did_something = true;
		}

		if self.wants_help {
			println!("Usage:\n\t{} [options]\n", self.path);
			println!("{}", HELP_MESSAGE);
			did_something = true;
		}

		did_something
	}

	pub fn debug(&self) -> bool {
		self.debug
	}

	pub fn colored(&self) -> bool {
		self.colored
	}

	/// Both sections run when none is singled out.
	pub fn runs_integers(&self) -> bool {
		self.only_integers || !self.only_rationals
	}

	pub fn runs_rationals(&self) -> bool {
		self.only_rationals || !self.only_integers
	}
}
