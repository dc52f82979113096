/// ANSI escape sequences to put before and after some styled text.
pub type Style = (&'static str, &'static str);

pub mod styles {
	pub const NORMAL: super::Style = ("", "");
	pub const CYAN: super::Style = ("\x1b[36m", "\x1b[39m");
	pub const YELLOW: super::Style = ("\x1b[33m", "\x1b[39m");
	pub const BOLD: super::Style = ("\x1b[1m", "\x1b[22m");
}

/// Picks `style` unless colors are turned off.
pub fn style_if(colored: bool, style: Style) -> Style {
	if colored {
		style
	} else {
		styles::NORMAL
	}
}

/// `std::fmt::Write` adapter over the standard output.
pub struct StdoutWriter;

impl StdoutWriter {
	pub fn new() -> StdoutWriter {
		StdoutWriter
	}
}

impl std::fmt::Write for StdoutWriter {
	fn write_str(&mut self, string: &str) -> Result<(), std::fmt::Error> {
		print!("{}", string);
		Ok(())
	}
}
