use onca_logging::log_verbose;

use super::{GroupScratch, NameChoice, NameTable};
use crate::{Error, Result, LOG_CAT_NAMES, MAX_CODE_POINT};

const CODESPACE_END: u32 = MAX_CODE_POINT + 1;

/// Forward iterator over the names of a range of codepoints, in ascending codepoint order.
///
/// Generated names and stored names are merged into a single sequence. Each enumerator keeps its own decode buffers,
/// so multiple enumerators over the same table can be used independently.
///
/// ```
/// use onca_unicode_info::{name_enumerator, NameChoice};
///
/// let mut names = name_enumerator(NameChoice::Modern);
/// names.set_range(0x41, 0x44).unwrap();
/// while names.move_next() {
///     let (codepoint, name) = names.current().unwrap();
///     assert!(name.starts_with("LATIN CAPITAL LETTER"), "{codepoint:X}");
/// }
/// ```
pub struct NameEnumerator<'a> {
	table           : &'a NameTable,
	choice          : NameChoice,
	start           : u32,
	limit           : u32,
	current         : u32,
	/// Index of the first algorithmic range that ends after `current`
	algorithm_index : Option<usize>,
	/// Index of the first group that ends after `current`
	group_index     : Option<usize>,
	scratch         : GroupScratch,
	item_codepoint  : Option<u32>,
	item_name       : String,
}

impl<'a> NameEnumerator<'a> {
	pub(crate) fn new(table: &'a NameTable, choice: NameChoice) -> Self {
		Self {
			table,
			choice,
			start: 0,
			limit: CODESPACE_END,
			current: 0,
			algorithm_index: None,
			group_index: None,
			scratch: GroupScratch::new(),
			item_codepoint: None,
			item_name: String::new(),
		}
	}

	/// Get the name choice the enumerator was created with.
	pub fn choice(&self) -> NameChoice {
		self.choice
	}

	/// Get the `[start, limit)` range of the enumerator, after clamping to the codespace.
	pub fn range(&self) -> (u32, u32) {
		(self.start, self.limit)
	}

	/// Go back to the start of the range.
	pub fn reset(&mut self) {
		self.current = self.start;
		self.algorithm_index = None;
		self.group_index = None;
		self.item_codepoint = None;
	}

	/// Restrict the enumerator to `[start, limit)` and reset it.
	///
	/// The range is clamped to the codespace, an error is returned when `limit <= start`, before clamping.
	pub fn set_range(&mut self, start: i64, limit: i64) -> Result<()> {
		if limit <= start {
			return Err(Error::InvalidRange { start, limit });
		}

		let end = CODESPACE_END as i64;
		let clamped_start = start.clamp(0, end);
		let clamped_limit = limit.clamp(0, end);
		if clamped_start != start || clamped_limit != limit {
			log_verbose!(LOG_CAT_NAMES, "Name enumeration range [{start}, {limit}) clamped to [{clamped_start}, {clamped_limit})");
		}

		self.start = clamped_start as u32;
		self.limit = clamped_limit as u32;
		self.reset();
		Ok(())
	}

	/// Get the current codepoint and its name, `None` before the first call to `move_next` or once the enumerator is exhausted.
	pub fn current(&self) -> Option<(u32, &str)> {
		self.item_codepoint.map(|codepoint| (codepoint, self.item_name.as_str()))
	}

	/// Move to the next codepoint with a name, returns `false` when there are no more names in the range.
	pub fn move_next(&mut self) -> bool {
		let table = self.table;
		let ranges = table.algorithmic_ranges();
		while self.current < self.limit {
			let mut alg_idx = self.algorithm_index.unwrap_or_else(|| ranges.partition_point(|range| range.end <= self.current));
			while ranges.get(alg_idx).map_or(false, |range| range.end <= self.current) {
				alg_idx += 1;
			}
			self.algorithm_index = Some(alg_idx);

			let next_start = ranges.get(alg_idx).map_or(CODESPACE_END, |range| range.start);
			if self.current < next_start {
				if self.scan_groups(next_start.min(self.limit)) {
					return true;
				}
				continue;
			}

			let range = ranges[alg_idx];
			self.group_index = None;
			if self.choice == NameChoice::Legacy {
				self.current = range.end;
				continue;
			}

			let codepoint = self.current;
			self.current += 1;
			self.item_name.clear();
			range.write_name(codepoint, &mut self.item_name);
			self.item_codepoint = Some(codepoint);
			return true;
		}

		self.item_codepoint = None;
		false
	}

	/// Look for the next stored name in `[current, window_end)`, or the next label for extended names.
	fn scan_groups(&mut self, window_end: u32) -> bool {
		let table = self.table;
		let groups = table.groups();

		let mut idx = self.group_index.unwrap_or_else(|| groups.partition_point(|group| group.end_codepoint() <= self.current));
		while self.current < window_end {
			while groups.get(idx).map_or(false, |group| group.end_codepoint() <= self.current) {
				idx += 1;
			}
			self.group_index = Some(idx);

			let group = match groups.get(idx) {
				Some(group) if group.first_codepoint() <= self.current => group,
				next => {
					// No group covers the current codepoint
					if self.choice == NameChoice::Extended {
						let codepoint = self.current;
						self.current += 1;
						self.set_label(codepoint);
						return true;
					}
					self.current = next.map_or(window_end, |group| group.first_codepoint().min(window_end));
					continue;
				},
			};

			let group_end = group.end_codepoint().min(window_end);
			let decoded = self.scratch.decode(idx, group, table.pool());
			while self.current < group_end {
				let codepoint = self.current;
				self.current += 1;

				if let Some(name) = decoded.then(|| table.slot_name(&self.scratch, codepoint, self.choice)).flatten() {
					self.item_name.clear();
					self.item_name.push_str(name);
					self.item_codepoint = Some(codepoint);
					return true;
				}
				if self.choice == NameChoice::Extended {
					self.set_label(codepoint);
					return true;
				}
			}
		}
		false
	}

	fn set_label(&mut self, codepoint: u32) {
		self.item_name.clear();
		super::write_code_point_label(codepoint, &mut self.item_name);
		self.item_codepoint = Some(codepoint);
	}
}

impl Iterator for NameEnumerator<'_> {
	type Item = (u32, String);

	fn next(&mut self) -> Option<Self::Item> {
		if self.move_next() {
			self.current().map(|(codepoint, name)| (codepoint, name.to_owned()))
		} else {
			None
		}
	}
}
