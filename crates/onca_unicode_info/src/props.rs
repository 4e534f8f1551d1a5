use crate::{
	index::{from_index_or, is_sorted_and_disjoint, UnicodeIndex},
	Error, Result,
};

/// Source of the packed property word of a codepoint.
///
/// The script resolver only looks at the bits covered by [`SCRIPT_X_MASK`](crate::SCRIPT_X_MASK),
/// any other bits are left to the implementation.
pub trait PropertySource: Send + Sync {
	/// Get the property word of a valid codepoint.
	fn property_word(&self, codepoint: u32) -> u32;
}

impl<F: Fn(u32) -> u32 + Send + Sync> PropertySource for F {
	fn property_word(&self, codepoint: u32) -> u32 {
		self(codepoint)
	}
}

/// Property source storing a word per range of codepoints, codepoints not in any range get the default word.
pub struct RangePropertySource {
	ranges  : Vec<(UnicodeIndex, u32)>,
	default : u32,
}

impl RangePropertySource {
	pub(crate) fn new(ranges: Vec<(UnicodeIndex, u32)>, default: u32) -> Result<Self> {
		if !is_sorted_and_disjoint(&ranges) {
			return Err(Error::Integrity("property ranges are not sorted and disjoint"));
		}
		Ok(Self { ranges, default })
	}

	/// Create a property source from inclusive `(first, last, word)` ranges.
	pub fn from_ranges<I: IntoIterator<Item = (u32, u32, u32)>>(ranges: I, default: u32) -> Result<Self> {
		let mut ranges = ranges.into_iter()
			.map(|(first, last, word)| (UnicodeIndex::new(first, last), word))
			.collect::<Vec<_>>();
		ranges.sort_by_key(|val| val.0.first());
		Self::new(ranges, default)
	}

	/// Word returned for codepoints outside of any range.
	pub fn default_word(&self) -> u32 {
		self.default
	}

	/// Number of stored ranges.
	pub fn num_ranges(&self) -> usize {
		self.ranges.len()
	}
}

impl PropertySource for RangePropertySource {
	fn property_word(&self, codepoint: u32) -> u32 {
		from_index_or(codepoint, &self.ranges, self.default)
	}
}
