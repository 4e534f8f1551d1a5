use core::{cmp::Ordering, fmt};

// Unicode index into info arrays, ranges are inclusive
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnicodeIndex {
	Single(u32),
	Range(u32, u32),
}

impl UnicodeIndex {
	pub fn new(first: u32, last: u32) -> Self {
		if first == last {
			Self::Single(first)
		} else {
			Self::Range(first, last)
		}
	}

	pub fn first(&self) -> u32 {
		match *self {
			UnicodeIndex::Single(val) => val,
			UnicodeIndex::Range(begin, _) => begin,
		}
	}

	pub fn last(&self) -> u32 {
		match *self {
			UnicodeIndex::Single(val) => val,
			UnicodeIndex::Range(_, end) => end,
		}
	}

	/// Merge 2 indices when `other` directly follows `self`
	pub fn merge(self, other: Self) -> Option<Self> {
		if self.last().checked_add(1) == Some(other.first()) {
			Some(Self::Range(self.first(), other.last()))
		} else {
			None
		}
	}

	/// Parse either `XXXX` or `XXXX..YYYY`
	pub fn parse(s: &str) -> Option<Self> {
		match s.split_once("..") {
			Some((begin, end)) => {
				let begin = u32::from_str_radix(begin.trim(), 16).ok()?;
				let end = u32::from_str_radix(end.trim(), 16).ok()?;
				if begin > end {
					return None;
				}
				Some(Self::new(begin, end))
			},
			None => u32::from_str_radix(s.trim(), 16).ok().map(Self::Single),
		}
	}

	/// Where the index lies relative to `codepoint`, usable as a binary search comparator
	pub fn cmp_codepoint(&self, codepoint: u32) -> Ordering {
		if self.last() < codepoint {
			Ordering::Less
		} else if self.first() > codepoint {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

impl fmt::Debug for UnicodeIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Single(val) => write!(f, "UnicodeIndex::Single({val:#07X}         )"),
			Self::Range(begin, end) => write!(f, "UnicodeIndex::Range ({begin:#07X}, {end:#07X})"),
		}
	}
}

/// Look up the value stored for the index that contains `codepoint`
pub(crate) fn from_index<T: Copy>(codepoint: u32, arr: &[(UnicodeIndex, T)]) -> Option<T> {
	match arr.binary_search_by(|val| val.0.cmp_codepoint(codepoint)) {
		Ok(idx) => Some(arr[idx].1),
		Err(_) => None,
	}
}

pub(crate) fn from_index_or<T: Copy>(codepoint: u32, arr: &[(UnicodeIndex, T)], default: T) -> T {
	from_index(codepoint, arr).unwrap_or(default)
}

/// Sort the entries and merge adjacent indices that carry the same value.
///
/// Entries equal to `exclude_filter` are dropped.
pub(crate) fn sort_and_compact<T: Eq + Clone>(arr: &mut Vec<(UnicodeIndex, T)>, exclude_filter: Option<&T>) {
	arr.sort_by_key(|val| val.0.first());

	let mut compacted: Vec<(UnicodeIndex, T)> = Vec::with_capacity(arr.len());
	for (index, value) in arr.drain(..) {
		if exclude_filter.map_or(false, |exclude| *exclude == value) {
			continue;
		}

		if let Some(prev) = compacted.last_mut() {
			if prev.1 == value {
				if let Some(merged) = prev.0.merge(index) {
					prev.0 = merged;
					continue;
				}
			}
		}
		compacted.push((index, value));
	}
	*arr = compacted;
}

/// Check that the indices ascend and don't overlap
pub(crate) fn is_sorted_and_disjoint<T>(arr: &[(UnicodeIndex, T)]) -> bool {
	arr.windows(2).all(|pair| pair[0].0.last() < pair[1].0.first())
}
