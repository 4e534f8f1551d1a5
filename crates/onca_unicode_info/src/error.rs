use core::fmt;

/// Unicode info error
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
	/// The codepoint lies outside of `[0, MAX_CODE_POINT]`
	OutOfRange(i64),
	/// An enumeration range was requested where `limit <= start`
	InvalidRange {
		start : i64,
		limit : i64,
	},
	/// Malformed unicode data, or data that does not fit in the packed tables
	Data {
		file : &'static str,
		line : usize,
		msg  : String,
	},
	/// A table does not hold up to its structural invariants
	Integrity(&'static str),
}

impl Error {
	pub(crate) fn data(file: &'static str, line: usize, msg: impl Into<String>) -> Self {
		Self::Data { file, line, msg: msg.into() }
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::OutOfRange(codepoint)      => f.write_fmt(format_args!("Codepoint {codepoint:#X} is out of range")),
			Error::InvalidRange { start, limit } => f.write_fmt(format_args!("Invalid codepoint range [{start}, {limit}): limit must be larger than start")),
			Error::Data { file, line, msg }   => if *line == 0 {
				f.write_fmt(format_args!("{file}: {msg}"))
			} else {
				f.write_fmt(format_args!("{file}:{line}: {msg}"))
			},
			Error::Integrity(msg)             => f.write_fmt(format_args!("Corrupt unicode table: {msg}")),
		}
	}
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
