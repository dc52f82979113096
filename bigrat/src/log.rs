use crate::utils::{StdoutWriter, Style};

/// Lines of text nested under titled sections, printed with box-drawing
/// characters on the left to show the nesting.
///
/// Items are recorded first and rendered all at once by `print`.
pub struct IndentedLog {
	items: Vec<Item>,
}

impl IndentedLog {
	pub fn new() -> IndentedLog {
		IndentedLog { items: Vec::new() }
	}

	fn push(&mut self, item: Item) {
		self.items.push(item);
	}

	/// Opens a section titled `string`, following lines are nested in it
	/// until the matching `deindent`.
	pub fn indent(&mut self, string: String, style: Style) {
		assert!(!string.contains('\n'));
		self.push(Item::IndentAdd { string, style });
	}

	pub fn deindent(&mut self) {
		self.push(Item::IndentRemove);
	}

	pub fn log_line(&mut self, string: String, style: Style) {
		assert!(!string.contains('\n'));
		self.push(Item::Line { string, style });
	}

	pub fn print_to_stdout(&self) -> std::fmt::Result {
		self.print(&mut StdoutWriter::new())
	}
}

#[derive(Debug)]
enum Item {
	IndentAdd { string: String, style: Style },
	IndentRemove,
	Line { string: String, style: Style },
}

const INDENT_START: &str = "┌ ";
const INDENT_NORMAL: &str = "│ ";

impl IndentedLog {
	pub fn print(&self, writer: &mut impl std::fmt::Write) -> std::fmt::Result {
		let mut indents: Vec<Style> = Vec::new();
		for item in &self.items {
			match item {
				Item::IndentAdd { string, style } => {
					print_indents(writer, &indents)?;
					writeln!(writer, "{}{}{}{}", style.0, INDENT_START, string, style.1)?;
					indents.push(*style);
				},
				Item::IndentRemove => {
					indents.pop();
				},
				Item::Line { string, style } => {
					print_indents(writer, &indents)?;
					writeln!(writer, "{}{}{}", style.0, string, style.1)?;
				},
			}
		}
		Ok(())
	}
}

fn print_indents(writer: &mut impl std::fmt::Write, indents: &[Style]) -> std::fmt::Result {
	for style in indents {
		write!(writer, "{}{}{}", style.0, INDENT_NORMAL, style.1)?;
	}
	Ok(())
}
