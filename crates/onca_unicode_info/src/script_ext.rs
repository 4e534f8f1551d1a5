//! Script and script extension resolution from the packed script field.
//!
//! The low 13 bits of the property word hold the script field, split into zones:
//! - `< 0x400`: the field is the script code, the codepoint has no extensions.
//! - `0x400..0x800`: the script is `Common`, the low 10 bits index the extension set.
//! - `0x800..0xC00`: the script is `Inherited`, the low 10 bits index the extension set.
//! - `>= 0xC00`: the low 10 bits index the extension table. Without [`SCRIPT_X_INDIRECT`] this is the start of the set
//!   and the script is the first script in it. With it, the index points to a `[script, set start]` cell.
//!
//! Extension sets are ascending runs of script codes in a shared table, where the last code of a set has bit 15 set.

use core::fmt;

use crate::{
	props::PropertySource,
	script::{Script, ScriptSet, ScriptSetIter},
	Error, Result, MAX_CODE_POINT,
};

/// Mask of the script field in the property word.
pub const SCRIPT_X_MASK: u32 = 0x1FFF;
/// Start of the `Common` zone.
pub const SCRIPT_X_WITH_COMMON: u32 = 0x400;
/// Start of the `Inherited` zone.
pub const SCRIPT_X_WITH_INHERITED: u32 = 0x800;
/// Start of the overflow zone.
pub const SCRIPT_X_WITH_OTHER: u32 = 0xC00;
/// Overflow zone flag marking an indirection cell.
pub const SCRIPT_X_INDIRECT: u32 = 0x1000;
/// Mask of the index stored in a non-direct field.
pub const SCRIPT_INDEX_MASK: u32 = 0x3FF;
/// Bit marking the last script of an extension set.
pub const EXTENSION_TERMINATOR: u16 = 0x8000;
/// Mask of the script code in an extension table entry.
pub const EXTENSION_SCRIPT_MASK: u16 = 0x7FFF;

/// Decoded script field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PackedScriptField {
	/// Script code without extensions
	Direct(u32),
	/// `Common` with the extension set at the given index
	Common(usize),
	/// `Inherited` with the extension set at the given index
	Inherited(usize),
	/// Index into the extension table, either the start of a set or an indirection cell
	Overflow {
		index    : usize,
		indirect : bool,
	},
}

impl PackedScriptField {
	/// Decode the script field of a property word, bits outside of [`SCRIPT_X_MASK`] are ignored.
	pub fn decode(word: u32) -> Self {
		let field = word & SCRIPT_X_MASK;
		let index = (field & SCRIPT_INDEX_MASK) as usize;
		if field < SCRIPT_X_WITH_COMMON {
			Self::Direct(field)
		} else if field < SCRIPT_X_WITH_INHERITED {
			Self::Common(index)
		} else if field < SCRIPT_X_WITH_OTHER {
			Self::Inherited(index)
		} else {
			Self::Overflow { index, indirect: field & SCRIPT_X_INDIRECT != 0 }
		}
	}

	/// Encode the field, `None` if a code or index doesn't fit in its zone.
	pub fn encode(self) -> Option<u32> {
		let fits = |index: usize| index <= SCRIPT_INDEX_MASK as usize;
		match self {
			Self::Direct(code) if code < SCRIPT_X_WITH_COMMON => Some(code),
			Self::Common(index) if fits(index) => Some(SCRIPT_X_WITH_COMMON | index as u32),
			Self::Inherited(index) if fits(index) => Some(SCRIPT_X_WITH_INHERITED | index as u32),
			Self::Overflow { index, indirect } if fits(index) => {
				let flag = if indirect { SCRIPT_X_INDIRECT } else { 0 };
				Some(SCRIPT_X_WITH_OTHER | flag | index as u32)
			},
			_ => None,
		}
	}
}

//==============================================================

/// Shared table holding all extension sets and indirection cells.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ExtensionTable {
	entries : Vec<u16>,
}

impl ExtensionTable {
	/// Create a table from raw entries, the layout is verified by the [`ScriptResolver`] that uses it.
	pub fn new(entries: Vec<u16>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[u16] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Get a view of the set starting at `index`.
	///
	/// An index past the end of the table results in an empty view.
	pub fn set_at(&self, index: usize) -> ExtensionSet<'_> {
		ExtensionSet { entries: self.entries.get(index..).unwrap_or(&[]) }
	}

	fn entry(&self, index: usize) -> u16 {
		self.entries.get(index).copied().unwrap_or(EXTENSION_TERMINATOR | EXTENSION_SCRIPT_MASK)
	}

	/// Check that the set starting at `index` is sorted and terminated, and holds at least 2 known scripts.
	fn validate_set(&self, index: usize) -> Result<()> {
		let mut prev = None;
		let mut len = 0;
		for &entry in self.entries.get(index..).unwrap_or(&[]) {
			let code = entry & EXTENSION_SCRIPT_MASK;
			if Script::from_code(code as u32).is_none() {
				return Err(Error::Integrity("extension set contains an unknown script code"));
			}
			if prev.map_or(false, |prev| prev >= code) {
				return Err(Error::Integrity("extension set is not sorted"));
			}
			prev = Some(code);
			len += 1;

			if entry & EXTENSION_TERMINATOR != 0 {
				return if len < 2 {
					Err(Error::Integrity("extension set holds less than 2 scripts"))
				} else {
					Ok(())
				};
			}
		}
		Err(Error::Integrity("extension set is not terminated"))
	}
}

/// View of a single extension set.
#[derive(Clone, Copy)]
pub struct ExtensionSet<'a> {
	entries : &'a [u16],
}

impl<'a> ExtensionSet<'a> {
	/// Iterate over the script codes in the set, without terminator bits.
	pub fn codes(&self) -> ExtensionSetIter<'a> {
		ExtensionSetIter { entries: self.entries, done: false }
	}

	/// Iterate over the scripts in the set.
	pub fn iter(&self) -> impl Iterator<Item = Script> + 'a {
		self.codes().filter_map(|code| Script::from_code(code as u32))
	}

	/// Get the first, and smallest, script code in the set.
	pub fn first_code(&self) -> Option<u16> {
		self.entries.first().map(|entry| entry & EXTENSION_SCRIPT_MASK)
	}

	/// Check if the set contains the script code.
	pub fn contains_code(&self, code: u32) -> bool {
		if code > EXTENSION_SCRIPT_MASK as u32 {
			return false;
		}

		// The terminator bit makes the last entry larger than any script code, so this never runs past the set
		for &entry in self.entries {
			if code > entry as u32 {
				continue;
			}
			return code == (entry & EXTENSION_SCRIPT_MASK) as u32;
		}
		false
	}

	/// Collect the set into a [`ScriptSet`].
	pub fn to_script_set(&self) -> ScriptSet {
		self.iter().collect()
	}
}

impl fmt::Debug for ExtensionSet<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.codes()).finish()
	}
}

/// Iterator over the script codes of an [`ExtensionSet`].
pub struct ExtensionSetIter<'a> {
	entries : &'a [u16],
	done    : bool,
}

impl<'a> Iterator for ExtensionSetIter<'a> {
	type Item = u16;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let (&entry, rest) = self.entries.split_first()?;
		self.entries = rest;
		self.done = entry & EXTENSION_TERMINATOR != 0;
		Some(entry & EXTENSION_SCRIPT_MASK)
	}
}

//==============================================================

/// Script extensions of a codepoint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScriptExtensions {
	/// The codepoint is only used with its script
	Single(Script),
	/// The codepoint is used with all scripts in the set, which contains at least 2 scripts
	Extended(ScriptSet),
}

impl ScriptExtensions {
	pub fn contains(&self, script: Script) -> bool {
		match self {
			ScriptExtensions::Single(single) => *single == script,
			ScriptExtensions::Extended(set) => set.contains(script),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ScriptExtensions::Single(_) => 1,
			ScriptExtensions::Extended(set) => set.len(),
		}
	}

	/// Iterate over the scripts in ascending script code order.
	pub fn iter(&self) -> ScriptSetIter {
		self.to_script_set().iter()
	}

	/// Get the scripts as a set.
	pub fn to_script_set(&self) -> ScriptSet {
		match self {
			ScriptExtensions::Single(script) => core::iter::once(*script).collect(),
			ScriptExtensions::Extended(set) => *set,
		}
	}

	/// Get the script when there is only a single one.
	pub fn primary_or_none(&self) -> Option<Script> {
		match self {
			ScriptExtensions::Single(script) => Some(*script),
			ScriptExtensions::Extended(_) => None,
		}
	}
}

//==============================================================

/// Resolves scripts and script extensions from a property source and the shared extension table.
pub struct ScriptResolver {
	properties : Box<dyn PropertySource>,
	extensions : ExtensionTable,
}

impl ScriptResolver {
	/// Create a resolver
	pub fn new<P: PropertySource + 'static>(properties: P, extensions: ExtensionTable) -> Self {
		Self { properties: Box::new(properties), extensions }
	}

	/// Verify the script fields of the given codepoints and the extension sets they reference.
	///
	/// The property source can't be iterated, so the caller passes the codepoints to check,
	/// e.g. the first codepoint of every stored range.
	pub fn validate<I: IntoIterator<Item = u32>>(&self, codepoints: I) -> Result<()> {
		codepoints.into_iter().try_for_each(|codepoint| self.validate_codepoint(codepoint))
	}

	/// Get the shared extension table.
	pub fn extension_table(&self) -> &ExtensionTable {
		&self.extensions
	}

	fn field(&self, codepoint: u32) -> Result<PackedScriptField> {
		if codepoint > MAX_CODE_POINT {
			return Err(Error::OutOfRange(codepoint as i64));
		}
		Ok(PackedScriptField::decode(self.properties.property_word(codepoint)))
	}

	/// Resolve the script code and the start of the extension set, if there is one.
	fn resolve(&self, field: PackedScriptField) -> (u32, Option<usize>) {
		match field {
			PackedScriptField::Direct(code) => (code, None),
			PackedScriptField::Common(index) => (Script::Common.code() as u32, Some(index)),
			PackedScriptField::Inherited(index) => (Script::Inherited.code() as u32, Some(index)),
			PackedScriptField::Overflow { index, indirect: false } => {
				((self.extensions.entry(index) & EXTENSION_SCRIPT_MASK) as u32, Some(index))
			},
			PackedScriptField::Overflow { index, indirect: true } => {
				let script = (self.extensions.entry(index) & EXTENSION_SCRIPT_MASK) as u32;
				let set = self.extensions.entry(index + 1) as usize;
				(script, Some(set))
			},
		}
	}

	/// Get the script code of a codepoint.
	pub fn get_script_code(&self, codepoint: u32) -> Result<u32> {
		let field = self.field(codepoint)?;
		Ok(self.resolve(field).0)
	}

	/// Get the script of a codepoint.
	///
	/// For codepoints with script extensions, this is the primary script, `Common` or `Inherited` when the codepoint is shared between scripts.
	///
	/// A codepoint with a single script extension reports that script, not its Script property, e.g. U+0342 is `Greek` instead of `Inherited`.
	pub fn get_script(&self, codepoint: u32) -> Result<Script> {
		let code = self.get_script_code(codepoint)?;
		Ok(Script::from_code(code).unwrap_or(Script::Unknown))
	}

	/// Check if the codepoint is used with the script code.
	///
	/// Returns `false` for invalid codepoints and codes that can't be stored in the extension table.
	pub fn has_script_code(&self, codepoint: u32, code: u32) -> bool {
		let Ok(field) = self.field(codepoint) else {
			return false;
		};

		match self.resolve(field) {
			(script, None) => script == code,
			(_, Some(set)) => self.extensions.set_at(set).contains_code(code),
		}
	}

	/// Check if the codepoint is used with the script.
	pub fn has_script(&self, codepoint: u32, script: Script) -> bool {
		self.has_script_code(codepoint, script.code() as u32)
	}

	/// Get the script extensions of a codepoint.
	pub fn get_script_extensions(&self, codepoint: u32) -> Result<ScriptExtensions> {
		let field = self.field(codepoint)?;
		Ok(match self.resolve(field) {
			(script, None) => ScriptExtensions::Single(Script::from_code(script).unwrap_or(Script::Unknown)),
			(_, Some(set)) => ScriptExtensions::Extended(self.extensions.set_at(set).to_script_set()),
		})
	}

	/// Get a view of the extension set of a codepoint, `None` if the codepoint has no extensions.
	pub fn extension_set(&self, codepoint: u32) -> Result<Option<ExtensionSet<'_>>> {
		let field = self.field(codepoint)?;
		Ok(self.resolve(field).1.map(|set| self.extensions.set_at(set)))
	}

	fn validate_codepoint(&self, codepoint: u32) -> Result<()> {
		let field = self.field(codepoint)?;
		if let PackedScriptField::Direct(code) = field {
			return match Script::from_code(code) {
				Some(_) => Ok(()),
				None => Err(Error::Integrity("direct script field holds an unknown script code")),
			};
		}

		if let PackedScriptField::Overflow { index, indirect: true } = field {
			if index + 1 >= self.extensions.len() {
				return Err(Error::Integrity("indirection cell lies outside of the extension table"));
			}
		}

		match self.resolve(field) {
			(_, Some(set)) => self.extensions.validate_set(set),
			(_, None) => Ok(()),
		}
	}
}

impl fmt::Debug for ScriptResolver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScriptResolver")
			.field("extensions", &self.extensions.len())
			.finish_non_exhaustive()
	}
}
