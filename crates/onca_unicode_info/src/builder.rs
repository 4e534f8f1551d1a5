//! Builders compacting per codepoint data into the packed tables.

use std::collections::HashMap;

use onca_base::EnumNameT;
use onca_logging::log_warning;

use crate::{
	index::{from_index, sort_and_compact, UnicodeIndex},
	names::{encode_group, AlgorithmicNameRange, NameGroup, NameTable, DEFAULT_ALGORITHMIC_RANGES, GROUP_MASK, GROUP_SHIFT, LINES_PER_GROUP},
	props::RangePropertySource,
	script::Script,
	script_ext::{ExtensionTable, PackedScriptField, EXTENSION_TERMINATOR, EXTENSION_SCRIPT_MASK},
	Error, Result, LOG_CAT_NAMES, LOG_CAT_SCRIPTS, MAX_CODE_POINT,
};

/// Builds a [`ScriptResolver`](crate::ScriptResolver) from script and script extension ranges.
///
/// Identical extension sets are shared, and a single script extension is stored as a plain script.
pub struct ScriptDataBuilder {
	scripts    : Vec<(UnicodeIndex, Script)>,
	extensions : Vec<(UnicodeIndex, Vec<Script>)>,
}

impl ScriptDataBuilder {
	pub fn new() -> Self {
		Self { scripts: Vec::new(), extensions: Vec::new() }
	}

	pub(crate) fn push_script(&mut self, index: UnicodeIndex, script: Script) {
		self.scripts.push((index, script));
	}

	pub(crate) fn push_extensions(&mut self, index: UnicodeIndex, scripts: Vec<Script>) {
		self.extensions.push((index, scripts));
	}

	/// Set the script of the inclusive range `[first, last]`.
	pub fn add_script(&mut self, first: u32, last: u32, script: Script) -> Result<&mut Self> {
		self.push_script(Self::checked_index(first, last)?, script);
		Ok(self)
	}

	/// Set the script extensions of the inclusive range `[first, last]`.
	pub fn add_extensions(&mut self, first: u32, last: u32, scripts: &[Script]) -> Result<&mut Self> {
		self.push_extensions(Self::checked_index(first, last)?, scripts.to_vec());
		Ok(self)
	}

	fn checked_index(first: u32, last: u32) -> Result<UnicodeIndex> {
		if first > last {
			return Err(Error::InvalidRange { start: first as i64, limit: last as i64 + 1 });
		}
		if last > MAX_CODE_POINT {
			return Err(Error::OutOfRange(last as i64));
		}
		Ok(UnicodeIndex::new(first, last))
	}

	/// Build the property ranges and the extension table.
	pub fn build(mut self) -> Result<crate::ScriptResolver> {
		sort_and_compact(&mut self.scripts, None);
		sort_and_compact(&mut self.extensions, None);

		let default_word = Script::Unknown.code() as u32;

		// Split the codespace at every range boundary, so each piece has a single script and extension set
		let mut bounds = Vec::with_capacity((self.scripts.len() + self.extensions.len()) * 2);
		for index in self.scripts.iter().map(|val| val.0).chain(self.extensions.iter().map(|val| val.0)) {
			bounds.push(index.first());
			bounds.push(index.last() + 1);
		}
		bounds.sort_unstable();
		bounds.dedup();

		let mut table = ExtensionTableBuilder::default();
		let mut words = Vec::new();
		for piece in bounds.windows(2) {
			let (first, last) = (piece[0], piece[1] - 1);
			let script = from_index(first, &self.scripts).unwrap_or(Script::Unknown);
			let extensions = self.extensions.binary_search_by(|val| val.0.cmp_codepoint(first)).ok().map(|idx| self.extensions[idx].1.as_slice());

			let word = table.encode(first, script, extensions)?;
			if word != default_word {
				words.push((UnicodeIndex::new(first, last), word));
			}
		}
		sort_and_compact(&mut words, None);

		let samples = words.iter().map(|val| val.0.first()).collect::<Vec<_>>();
		let properties = RangePropertySource::new(words, default_word)?;
		let resolver = crate::ScriptResolver::new(properties, ExtensionTable::new(table.entries));

		#[cfg(feature = "validation")]
		resolver.validate(samples)?;
		#[cfg(not(feature = "validation"))]
		drop(samples);

		Ok(resolver)
	}
}

impl Default for ScriptDataBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Extension table under construction, with deduplication of sets and indirection cells.
#[derive(Default)]
struct ExtensionTableBuilder {
	entries : Vec<u16>,
	sets    : HashMap<Vec<u16>, usize>,
	cells   : HashMap<(u16, usize), usize>,
}

impl ExtensionTableBuilder {
	fn intern_set(&mut self, codes: Vec<u16>) -> usize {
		if let Some(&start) = self.sets.get(&codes) {
			return start;
		}

		let start = self.entries.len();
		self.entries.extend_from_slice(&codes);
		if let Some(last) = self.entries.last_mut() {
			*last |= EXTENSION_TERMINATOR;
		}
		self.sets.insert(codes, start);
		start
	}

	fn intern_cell(&mut self, script: u16, set: usize) -> usize {
		*self.cells.entry((script, set)).or_insert_with(|| {
			let start = self.entries.len();
			// set starts fit in 15 bits, as the table can't be larger than the extension mask
			self.entries.push(script);
			self.entries.push(set as u16);
			start
		})
	}

	/// Get the property word for a piece of the codespace.
	fn encode(&mut self, codepoint: u32, script: Script, extensions: Option<&[Script]>) -> Result<u32> {
		let mut codes = extensions.unwrap_or(&[]).iter().map(|script| script.code()).collect::<Vec<_>>();
		codes.sort_unstable();
		codes.dedup();

		let field = match codes.len() {
			0 => PackedScriptField::Direct(script.code() as u32),
			1 => {
				// A single script extension is just a script
				if codes[0] != script.code() && !script.is_shared() {
					log_warning!(LOG_CAT_SCRIPTS, "Script extension of U+{codepoint:04X} replaces its script {}", script.short_name());
				}
				PackedScriptField::Direct(codes[0] as u32)
			},
			_ => {
				let primary = script.code();
				let contains_primary = codes.contains(&primary);
				let first = codes[0];
				let set = self.intern_set(codes);
				match script {
					Script::Common => PackedScriptField::Common(set),
					Script::Inherited => PackedScriptField::Inherited(set),
					_ if first == primary => PackedScriptField::Overflow { index: set, indirect: false },
					_ => {
						if !contains_primary {
							log_warning!(LOG_CAT_SCRIPTS, "Script extensions of U+{codepoint:04X} don't contain its script {}", script.short_name());
						}
						PackedScriptField::Overflow { index: self.intern_cell(primary, set), indirect: true }
					},
				}
			},
		};

		if self.entries.len() > EXTENSION_SCRIPT_MASK as usize {
			return Err(Error::data("ScriptExtensions.txt", 0, "too many script extension entries"));
		}
		field.encode().ok_or_else(|| Error::data("ScriptExtensions.txt", 0, format!("script extensions of U+{codepoint:04X} can't be indexed by the packed script field")))
	}
}

//==============================================================

/// Builds a [`NameTable`] from stored names and algorithmic ranges.
pub struct NameTableBuilder {
	algorithmic : Vec<AlgorithmicNameRange>,
	names       : Vec<(u32, String)>,
}

impl NameTableBuilder {
	/// Create a builder without any algorithmic ranges.
	pub fn new() -> Self {
		Self { algorithmic: Vec::new(), names: Vec::new() }
	}

	/// Create a builder with the algorithmic ranges of the unicode standard.
	pub fn with_default_algorithmic_ranges() -> Self {
		Self { algorithmic: DEFAULT_ALGORITHMIC_RANGES.to_vec(), names: Vec::new() }
	}

	pub fn add_algorithmic_range(&mut self, range: AlgorithmicNameRange) -> &mut Self {
		self.algorithmic.push(range);
		self
	}

	/// Store the modern and legacy name of a codepoint, either may be empty.
	pub fn add_name(&mut self, codepoint: u32, modern: &str, legacy: &str) -> Result<&mut Self> {
		if codepoint > MAX_CODE_POINT {
			return Err(Error::OutOfRange(codepoint as i64));
		}
		if modern.contains(';') || legacy.contains(';') || !modern.is_ascii() || !legacy.is_ascii() {
			return Err(Error::data("UnicodeData.txt", 0, format!("name of U+{codepoint:04X} can't be stored")));
		}

		if !modern.is_empty() || !legacy.is_empty() {
			let slot = if legacy.is_empty() {
				modern.to_owned()
			} else {
				format!("{modern};{legacy}")
			};
			self.names.push((codepoint, slot));
		}
		Ok(self)
	}

	pub fn build(mut self) -> Result<NameTable> {
		self.algorithmic.sort_by_key(|range| range.start);
		self.names.sort_by_key(|val| val.0);

		let mut groups = Vec::new();
		let mut pool = Vec::new();
		let mut slots = vec![String::new(); LINES_PER_GROUP as usize];
		let mut current_msb = None;
		let mut prev_codepoint = None;

		for (codepoint, slot) in self.names {
			if prev_codepoint == Some(codepoint) {
				log_warning!(LOG_CAT_NAMES, "Duplicate name for U+{codepoint:04X}, keeping the first");
				continue;
			}
			prev_codepoint = Some(codepoint);

			// Generated names take precedence
			if self.algorithmic.iter().any(|range| range.contains(codepoint)) {
				continue;
			}

			let msb = codepoint >> GROUP_SHIFT;
			if current_msb != Some(msb) {
				if let Some(prev_msb) = current_msb {
					groups.push(NameGroup { msb: prev_msb, offset: encode_group(&slots, &mut pool)? });
					slots.iter_mut().for_each(String::clear);
				}
				current_msb = Some(msb);
			}
			slots[(codepoint & GROUP_MASK) as usize] = slot;
		}
		if let Some(msb) = current_msb {
			groups.push(NameGroup { msb, offset: encode_group(&slots, &mut pool)? });
		}

		NameTable::from_raw_parts(self.algorithmic, groups, pool)
	}
}

impl Default for NameTableBuilder {
	fn default() -> Self {
		Self::new()
	}
}
