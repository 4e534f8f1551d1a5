//! Character names
//!
//! Names are either generated for a range of codepoints (e.g. CJK ideographs and hangul syllables), or stored in groups of 32 codepoints.

use core::fmt::Write;

use crate::{Error, Result, MAX_CODE_POINT};

mod algorithmic;
pub use algorithmic::*;

mod groups;
pub use groups::{NameGroup, LINES_PER_GROUP, GROUP_SHIFT};
pub(crate) use groups::{encode_group, split_slot, GroupScratch, GROUP_MASK};

mod enumerator;
pub use enumerator::NameEnumerator;

/// Which name of a codepoint to retrieve
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NameChoice {
	/// Current name of the codepoint
	Modern,
	/// Name from Unicode 1.0, mostly used for control codes, e.g. `NULL` for U+0000
	Legacy,
	/// Current name, or a codepoint label when the codepoint has no name, e.g. `<control-0000>` or `<reserved-0378>`
	Extended,
}

/// Kind of a codepoint, as used in the codepoint label
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CodePointKind {
	Control,
	Noncharacter,
	PrivateUse,
	Surrogate,
	Reserved,
}

impl CodePointKind {
	pub fn of(codepoint: u32) -> Self {
		match codepoint {
			0x0000..=0x001F | 0x007F..=0x009F => CodePointKind::Control,
			0xFDD0..=0xFDEF                   => CodePointKind::Noncharacter,
			_ if codepoint & 0xFFFE == 0xFFFE => CodePointKind::Noncharacter,
			0xD800..=0xDFFF                   => CodePointKind::Surrogate,
			0xE000..=0xF8FF |
			0xF0000..=0xFFFFD |
			0x100000..=0x10FFFD               => CodePointKind::PrivateUse,
			_                                 => CodePointKind::Reserved,
		}
	}

	pub const fn label(self) -> &'static str {
		match self {
			CodePointKind::Control      => "control",
			CodePointKind::Noncharacter => "noncharacter",
			CodePointKind::PrivateUse   => "private-use",
			CodePointKind::Surrogate    => "surrogate",
			CodePointKind::Reserved     => "reserved",
		}
	}
}

fn write_code_point_label(codepoint: u32, out: &mut String) {
	_ = out.write_fmt(format_args!("<{}-{codepoint:04X}>", CodePointKind::of(codepoint).label()));
}

/// Parse an uppercase codepoint label, only checking that the label matches the kind of the codepoint.
fn parse_code_point_label(name: &str) -> Option<u32> {
	let (label, hex) = name.strip_prefix('<')?.strip_suffix('>')?.rsplit_once('-')?;
	let codepoint = algorithmic::parse_hex_suffix(hex).filter(|codepoint| *codepoint <= MAX_CODE_POINT)?;
	CodePointKind::of(codepoint).label().eq_ignore_ascii_case(label).then_some(codepoint)
}

//==============================================================

/// Table with all character names
pub struct NameTable {
	algorithmic : Vec<AlgorithmicNameRange>,
	groups      : Vec<NameGroup>,
	pool        : Vec<u8>,
}

impl NameTable {
	/// Create a name table from its parts.
	///
	/// When the `validation` feature is enabled, the table is checked before it is returned.
	pub fn from_raw_parts(algorithmic: Vec<AlgorithmicNameRange>, groups: Vec<NameGroup>, pool: Vec<u8>) -> Result<Self> {
		let table = Self { algorithmic, groups, pool };
		#[cfg(feature = "validation")]
		table.validate()?;
		Ok(table)
	}

	/// Check the structural invariants of the table.
	pub fn validate(&self) -> Result<()> {
		if self.algorithmic.iter().any(|range| range.is_empty() || range.end > MAX_CODE_POINT + 1) {
			return Err(Error::Integrity("algorithmic name range is empty or out of range"));
		}
		if !self.algorithmic.windows(2).all(|pair| pair[0].end <= pair[1].start) {
			return Err(Error::Integrity("algorithmic name ranges are not sorted and disjoint"));
		}
		if !self.groups.windows(2).all(|pair| pair[0].msb < pair[1].msb) {
			return Err(Error::Integrity("name groups are not sorted"));
		}
		if self.groups.last().map_or(false, |group| group.msb > MAX_CODE_POINT >> GROUP_SHIFT) {
			return Err(Error::Integrity("name group lies outside of the codespace"));
		}

		let mut scratch = GroupScratch::new();
		for (idx, group) in self.groups.iter().enumerate() {
			if !scratch.decode(idx, group, &self.pool) {
				return Err(Error::Integrity("name group data lies outside of the name pool"));
			}
			for line in 0..LINES_PER_GROUP {
				if !scratch.slot(line, &self.pool).is_ascii() {
					return Err(Error::Integrity("stored name is not ascii"));
				}
			}
		}
		Ok(())
	}

	/// Get the algorithmic name ranges, sorted by their start.
	pub fn algorithmic_ranges(&self) -> &[AlgorithmicNameRange] {
		&self.algorithmic
	}

	/// Get the name groups, sorted by their MSB bucket.
	pub fn groups(&self) -> &[NameGroup] {
		&self.groups
	}

	/// Get the shared pool with the encoded group data.
	pub fn pool(&self) -> &[u8] {
		&self.pool
	}

	/// Get the algorithmic range that contains the codepoint.
	pub fn algorithmic_range_for(&self, codepoint: u32) -> Option<&AlgorithmicNameRange> {
		let idx = self.algorithmic.partition_point(|range| range.end <= codepoint);
		self.algorithmic.get(idx).filter(|range| range.contains(codepoint))
	}

	/// Get the name stored for the codepoint in the group decoded in `scratch`.
	pub(crate) fn slot_name<'t>(&'t self, scratch: &GroupScratch, codepoint: u32, choice: NameChoice) -> Option<&'t str> {
		let slot = core::str::from_utf8(scratch.slot(codepoint, &self.pool)).ok()?;
		let (modern, legacy) = split_slot(slot);
		let name = match choice {
			NameChoice::Modern | NameChoice::Extended => modern,
			NameChoice::Legacy => legacy,
		};
		(!name.is_empty()).then_some(name)
	}

	fn stored_name<'t>(&'t self, codepoint: u32, choice: NameChoice, scratch: &mut GroupScratch) -> Option<&'t str> {
		let idx = self.groups.binary_search_by_key(&(codepoint >> GROUP_SHIFT), |group| group.msb).ok()?;
		if !scratch.decode(idx, &self.groups[idx], &self.pool) {
			return None;
		}
		self.slot_name(scratch, codepoint, choice)
	}

	/// Write the name of a codepoint to `out`, returns `false` if the codepoint has no name for the given choice.
	pub(crate) fn write_name(&self, codepoint: u32, choice: NameChoice, scratch: &mut GroupScratch, out: &mut String) -> bool {
		if codepoint > MAX_CODE_POINT {
			return false;
		}

		if let Some(range) = self.algorithmic_range_for(codepoint) {
			// Generated names have no legacy name
			if choice == NameChoice::Legacy {
				return false;
			}
			range.write_name(codepoint, out);
			return true;
		}

		if let Some(name) = self.stored_name(codepoint, choice, scratch) {
			out.push_str(name);
			true
		} else if choice == NameChoice::Extended {
			write_code_point_label(codepoint, out);
			true
		} else {
			false
		}
	}

	/// Get the name of a codepoint, or `None` if the codepoint has no name for the given choice.
	pub fn get_name(&self, codepoint: u32, choice: NameChoice) -> Option<String> {
		let mut scratch = GroupScratch::new();
		let mut name = String::new();
		self.write_name(codepoint, choice, &mut scratch, &mut name).then_some(name)
	}

	/// Get the codepoint with the given name, ignoring ascii case.
	///
	/// With [`NameChoice::Extended`], codepoint labels are recognized for codepoints without a name.
	pub fn get_codepoint(&self, name: &str, choice: NameChoice) -> Option<u32> {
		let name = name.trim().to_ascii_uppercase();
		if name.is_empty() {
			return None;
		}

		if choice != NameChoice::Legacy {
			if let Some(codepoint) = self.algorithmic.iter().find_map(|range| range.parse(&name)) {
				return Some(codepoint);
			}
		}

		let mut scratch = GroupScratch::new();
		for (idx, group) in self.groups.iter().enumerate() {
			if !scratch.decode(idx, group, &self.pool) {
				continue;
			}
			for codepoint in group.first_codepoint()..group.end_codepoint() {
				if self.slot_name(&scratch, codepoint, choice).map_or(false, |stored| stored.eq_ignore_ascii_case(&name)) {
					return Some(codepoint);
				}
			}
		}

		if choice == NameChoice::Extended {
			let codepoint = parse_code_point_label(&name)?;
			if self.get_name(codepoint, NameChoice::Modern).is_none() {
				return Some(codepoint);
			}
		}
		None
	}

	/// Create an enumerator over all names in the codespace.
	pub fn enumerator(&self, choice: NameChoice) -> NameEnumerator<'_> {
		NameEnumerator::new(self, choice)
	}
}
