//! Loading of the unicode character database text files.
//!
//! Official info:
//! https://www.unicode.org/reports/tr44/

use onca_base::EnumFromNameT;

use crate::{
	builder::{NameTableBuilder, ScriptDataBuilder},
	index::UnicodeIndex,
	Error, Result, Script, MAX_CODE_POINT,
};

pub const UNICODE_DATA_FILE: &str = "UnicodeData.txt";
pub const SCRIPTS_FILE: &str = "Scripts.txt";
pub const SCRIPT_EXTENSIONS_FILE: &str = "ScriptExtensions.txt";

/// Contents of the unicode character database files the tables are built from.
#[derive(Clone, Copy, Debug)]
pub struct UcdSources<'a> {
	/// Contents of `UnicodeData.txt`
	pub unicode_data      : &'a str,
	/// Contents of `Scripts.txt`
	pub scripts           : &'a str,
	/// Contents of `ScriptExtensions.txt`
	pub script_extensions : &'a str,
}

impl UcdSources<'static> {
	/// The complete Unicode 14.0 database files shipped with the crate.
	pub const fn builtin() -> Self {
		Self {
			unicode_data: include_str!("../unicode/UnicodeData.txt"),
			scripts: include_str!("../unicode/Scripts.txt"),
			script_extensions: include_str!("../unicode/ScriptExtensions.txt"),
		}
	}
}

/// Call `f` for every line that is not empty or a comment, with its 1-based line number.
fn parse_lines<'a, F: FnMut(usize, &'a str) -> Result<()>>(text: &'a str, mut f: F) -> Result<usize> {
	let mut count = 0;
	for (idx, line) in text.lines().enumerate() {
		let trimmed = line.trim();
		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}

		f(idx + 1, trimmed)?;
		count += 1;
	}
	Ok(count)
}

fn parse_index(file: &'static str, line: usize, s: &str) -> Result<UnicodeIndex> {
	let index = UnicodeIndex::parse(s).ok_or_else(|| Error::data(file, line, format!("invalid codepoint or range '{s}'")))?;
	if index.last() > MAX_CODE_POINT {
		return Err(Error::data(file, line, format!("codepoint {:#X} is out of range", index.last())));
	}
	Ok(index)
}

/// Give an error returned by a builder the location of the line that caused it.
fn at_line(err: Error, file: &'static str, line: usize) -> Error {
	match err {
		Error::Data { msg, .. } => Error::data(file, line, msg),
		Error::OutOfRange(codepoint) => Error::data(file, line, format!("codepoint {codepoint:#X} is out of range")),
		err => err,
	}
}

/// Add the names in `UnicodeData.txt` to the builder, returns the number of parsed lines.
///
/// Range markers (`<CJK Ideograph, First>`) are skipped, those names are generated. Control codes only have a legacy name.
pub fn load_unicode_data(text: &str, builder: &mut NameTableBuilder) -> Result<usize> {
	parse_lines(text, |line, s| {
		let elems = s.split(';').collect::<Vec<_>>();
		if elems.len() != 15 {
			return Err(Error::data(UNICODE_DATA_FILE, line, format!("expected 15 fields, found {}", elems.len())));
		}

		let codepoint = u32::from_str_radix(elems[0], 16)
			.map_err(|_| Error::data(UNICODE_DATA_FILE, line, format!("invalid codepoint '{}'", elems[0])))?;

		let name = elems[1];
		let modern = if name == "<control>" {
			""
		} else if name.starts_with('<') {
			return Ok(());
		} else {
			name
		};

		builder.add_name(codepoint, modern, elems[10])
			.map(|_| ())
			.map_err(|err| at_line(err, UNICODE_DATA_FILE, line))
	})
}

/// Add the scripts in `Scripts.txt` to the builder, returns the number of parsed lines.
pub fn load_scripts(text: &str, builder: &mut ScriptDataBuilder) -> Result<usize> {
	parse_lines(text, |line, s| {
		let mut elems = s.split(|ch| ch == ';' || ch == '#').map(|s| s.trim());
		let index = parse_index(SCRIPTS_FILE, line, elems.next().unwrap_or_default())?;

		let name = elems.next().unwrap_or_default();
		let script = Script::parse(name).ok_or_else(|| Error::data(SCRIPTS_FILE, line, format!("unknown script '{name}'")))?;
		builder.push_script(index, script);
		Ok(())
	})
}

/// Add the script extensions in `ScriptExtensions.txt` to the builder, returns the number of parsed lines.
pub fn load_script_extensions(text: &str, builder: &mut ScriptDataBuilder) -> Result<usize> {
	parse_lines(text, |line, s| {
		let mut elems = s.split(|ch| ch == ';' || ch == '#').map(|s| s.trim());
		let index = parse_index(SCRIPT_EXTENSIONS_FILE, line, elems.next().unwrap_or_default())?;

		let mut scripts = Vec::new();
		for name in elems.next().unwrap_or_default().split_whitespace() {
			let script = Script::parse(name).ok_or_else(|| Error::data(SCRIPT_EXTENSIONS_FILE, line, format!("unknown script '{name}'")))?;
			scripts.push(script);
		}
		if scripts.is_empty() {
			return Err(Error::data(SCRIPT_EXTENSIONS_FILE, line, "missing script list"));
		}

		builder.push_extensions(index, scripts);
		Ok(())
	})
}
