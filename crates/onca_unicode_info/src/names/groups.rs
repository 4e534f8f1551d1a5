//! Name groups
//!
//! Every group covers 32 consecutive codepoints that share `codepoint >> 5`. The data of a group starts at its offset in the shared pool
//! with the length of each of the 32 names, followed by the name bytes. A length below `0x80` takes 1 byte, longer lengths are stored
//! as 2 big endian bytes with the top bit set. Offsets are not stored, they are the running sum of the lengths.

use crate::{Error, Result};

/// Number of codepoints in a group.
pub const LINES_PER_GROUP: u32 = 32;
/// Shift from a codepoint to the MSB bucket of its group.
pub const GROUP_SHIFT: u32 = 5;
pub(crate) const GROUP_MASK: u32 = LINES_PER_GROUP - 1;

const MAX_NAME_LEN: usize = 0x7FFF;

/// Group of 32 consecutive codepoints with stored names
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NameGroup {
	/// `codepoint >> GROUP_SHIFT` of all codepoints in the group
	pub msb    : u32,
	/// Offset of the group data in the name pool
	pub offset : u32,
}

impl NameGroup {
	/// First codepoint covered by the group.
	pub const fn first_codepoint(&self) -> u32 {
		self.msb << GROUP_SHIFT
	}

	/// One past the last codepoint covered by the group.
	pub const fn end_codepoint(&self) -> u32 {
		(self.msb + 1) << GROUP_SHIFT
	}
}

/// Decoded offsets and lengths of a group, reused between lookups in the same group.
#[derive(Clone)]
pub(crate) struct GroupScratch {
	group   : Option<usize>,
	offsets : [u32; LINES_PER_GROUP as usize],
	lengths : [u16; LINES_PER_GROUP as usize],
}

impl GroupScratch {
	pub const fn new() -> Self {
		Self {
			group: None,
			offsets: [0; LINES_PER_GROUP as usize],
			lengths: [0; LINES_PER_GROUP as usize],
		}
	}

	/// Decode the group at `group_idx`, skipped when it is already decoded.
	///
	/// Returns `false` if the group data doesn't fit in the pool.
	pub fn decode(&mut self, group_idx: usize, group: &NameGroup, pool: &[u8]) -> bool {
		if self.group == Some(group_idx) {
			return true;
		}
		self.group = None;

		let mut cursor = group.offset as usize;
		for len in &mut self.lengths {
			let Some(&first) = pool.get(cursor) else { return false };
			if first < 0x80 {
				*len = first as u16;
				cursor += 1;
			} else {
				let Some(&second) = pool.get(cursor + 1) else { return false };
				*len = (((first & 0x7F) as u16) << 8) | second as u16;
				cursor += 2;
			}
		}

		for (offset, len) in self.offsets.iter_mut().zip(self.lengths.iter()) {
			*offset = cursor as u32;
			cursor += *len as usize;
		}

		if cursor > pool.len() {
			return false;
		}
		self.group = Some(group_idx);
		true
	}

	/// Get the raw slot bytes of a line in the last decoded group, an empty slice when no name is stored.
	pub fn slot<'a>(&self, line: u32, pool: &'a [u8]) -> &'a [u8] {
		let line = (line & GROUP_MASK) as usize;
		let start = self.offsets[line] as usize;
		pool.get(start..start + self.lengths[line] as usize).unwrap_or(&[])
	}
}

/// Append the encoded group for the given slots to the pool, returns the offset of the group.
pub(crate) fn encode_group(slots: &[String], pool: &mut Vec<u8>) -> Result<u32> {
	debug_assert_eq!(slots.len(), LINES_PER_GROUP as usize);

	let offset = u32::try_from(pool.len()).map_err(|_| Error::Integrity("name pool is too large"))?;
	for slot in slots {
		let len = slot.len();
		if len > MAX_NAME_LEN {
			return Err(Error::Integrity("name is too long to be stored"));
		}

		if len < 0x80 {
			pool.push(len as u8);
		} else {
			pool.push(0x80 | (len >> 8) as u8);
			pool.push(len as u8);
		}
	}
	for slot in slots {
		pool.extend_from_slice(slot.as_bytes());
	}
	Ok(offset)
}

/// Split a stored slot in its modern and legacy part.
pub(crate) fn split_slot(slot: &str) -> (&str, &str) {
	slot.split_once(';').unwrap_or((slot, ""))
}
