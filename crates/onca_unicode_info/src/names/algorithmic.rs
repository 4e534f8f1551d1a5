use core::fmt::Write;

/// Rule used to generate the names in an algorithmic range
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AlgorithmicNameKind {
	/// `CJK UNIFIED IDEOGRAPH-XXXX`
	CjkUnifiedIdeograph,
	/// `CJK COMPATIBILITY IDEOGRAPH-XXXX`
	CjkCompatibilityIdeograph,
	/// `TANGUT IDEOGRAPH-XXXX`
	TangutIdeograph,
	/// `KHITAN SMALL SCRIPT CHARACTER-XXXX`
	KhitanSmallScriptCharacter,
	/// `NUSHU CHARACTER-XXXX`
	NushuCharacter,
	/// `HANGUL SYLLABLE ` followed by the short names of the syllable's jamo
	HangulSyllable,
}

impl AlgorithmicNameKind {
	/// Get the prefix shared by all names of this kind.
	pub const fn prefix(self) -> &'static str {
		match self {
			AlgorithmicNameKind::CjkUnifiedIdeograph        => "CJK UNIFIED IDEOGRAPH-",
			AlgorithmicNameKind::CjkCompatibilityIdeograph  => "CJK COMPATIBILITY IDEOGRAPH-",
			AlgorithmicNameKind::TangutIdeograph            => "TANGUT IDEOGRAPH-",
			AlgorithmicNameKind::KhitanSmallScriptCharacter => "KHITAN SMALL SCRIPT CHARACTER-",
			AlgorithmicNameKind::NushuCharacter             => "NUSHU CHARACTER-",
			AlgorithmicNameKind::HangulSyllable             => "HANGUL SYLLABLE ",
		}
	}
}

/// Half open range of codepoints `[start, end)` with generated names
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AlgorithmicNameRange {
	pub start : u32,
	pub end   : u32,
	pub kind  : AlgorithmicNameKind,
}

impl AlgorithmicNameRange {
	pub const fn new(start: u32, end: u32, kind: AlgorithmicNameKind) -> Self {
		Self { start, end, kind }
	}

	pub const fn contains(&self, codepoint: u32) -> bool {
		self.start <= codepoint && codepoint < self.end
	}

	pub const fn len(&self) -> u32 {
		self.end.saturating_sub(self.start)
	}

	pub const fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Write the name of a codepoint in this range to `out`.
	pub fn write_name(&self, codepoint: u32, out: &mut String) {
		out.push_str(self.kind.prefix());
		match self.kind {
			AlgorithmicNameKind::HangulSyllable => hangul::write_syllable(codepoint, out),
			_ => {
				_ = out.write_fmt(format_args!("{codepoint:04X}"));
			},
		}
	}

	/// Get the name of a codepoint in this range.
	pub fn name(&self, codepoint: u32) -> String {
		let mut name = String::with_capacity(self.kind.prefix().len() + 6);
		self.write_name(codepoint, &mut name);
		name
	}

	/// Get the codepoint in this range with the given uppercase name.
	pub fn parse(&self, name: &str) -> Option<u32> {
		let suffix = name.strip_prefix(self.kind.prefix())?;
		let codepoint = match self.kind {
			AlgorithmicNameKind::HangulSyllable => hangul::parse_syllable(suffix)?,
			_ => parse_hex_suffix(suffix)?,
		};
		self.contains(codepoint).then_some(codepoint)
	}
}

/// Parse the hex suffix exactly the way it would have been formatted
pub(super) fn parse_hex_suffix(suffix: &str) -> Option<u32> {
	if !(4..=6).contains(&suffix.len()) || !suffix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
		return None;
	}
	if suffix.len() > 4 && suffix.starts_with('0') {
		return None;
	}
	u32::from_str_radix(suffix, 16).ok()
}

/// Generated names as defined by Unicode 14.0
pub const DEFAULT_ALGORITHMIC_RANGES: [AlgorithmicNameRange; 16] = {
	use AlgorithmicNameKind::*;
	[
		AlgorithmicNameRange::new(0x3400 , 0x4DC0 , CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x4E00 , 0xA000 , CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0xAC00 , 0xD7A4 , HangulSyllable),
		AlgorithmicNameRange::new(0xF900 , 0xFA6E , CjkCompatibilityIdeograph),
		AlgorithmicNameRange::new(0xFA70 , 0xFADA , CjkCompatibilityIdeograph),
		AlgorithmicNameRange::new(0x17000, 0x187F8, TangutIdeograph),
		AlgorithmicNameRange::new(0x18B00, 0x18CD6, KhitanSmallScriptCharacter),
		AlgorithmicNameRange::new(0x18D00, 0x18D09, TangutIdeograph),
		AlgorithmicNameRange::new(0x1B170, 0x1B2FC, NushuCharacter),
		AlgorithmicNameRange::new(0x20000, 0x2A6E0, CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x2A700, 0x2B739, CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x2B740, 0x2B81E, CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x2B820, 0x2CEA2, CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x2CEB0, 0x2EBE1, CjkUnifiedIdeograph),
		AlgorithmicNameRange::new(0x2F800, 0x2FA1E, CjkCompatibilityIdeograph),
		AlgorithmicNameRange::new(0x30000, 0x3134B, CjkUnifiedIdeograph),
	]
};

mod hangul {
	pub const S_BASE  : u32 = 0xAC00;
	pub const L_COUNT : u32 = 19;
	pub const V_COUNT : u32 = 21;
	pub const T_COUNT : u32 = 28;
	pub const N_COUNT : u32 = V_COUNT * T_COUNT;
	pub const S_COUNT : u32 = L_COUNT * N_COUNT;

	const JAMO_L : [&str; L_COUNT as usize] = [
		"G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P", "H",
	];
	const JAMO_V : [&str; V_COUNT as usize] = [
		"A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE", "WI", "YU", "EU", "YI", "I",
	];
	const JAMO_T : [&str; T_COUNT as usize] = [
		"", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M", "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
	];

	pub fn write_syllable(codepoint: u32, out: &mut String) {
		let s_index = codepoint.wrapping_sub(S_BASE);
		if s_index >= S_COUNT {
			return;
		}

		out.push_str(JAMO_L[(s_index / N_COUNT) as usize]);
		out.push_str(JAMO_V[((s_index % N_COUNT) / T_COUNT) as usize]);
		out.push_str(JAMO_T[(s_index % T_COUNT) as usize]);
	}

	/// Syllable names are unique, so the first decomposition that matches is the syllable.
	pub fn parse_syllable(jamo: &str) -> Option<u32> {
		for (l, l_name) in JAMO_L.iter().enumerate() {
			let Some(rest) = jamo.strip_prefix(l_name) else { continue };
			for (v, v_name) in JAMO_V.iter().enumerate() {
				let Some(rest) = rest.strip_prefix(v_name) else { continue };
				if let Some(t) = JAMO_T.iter().position(|t_name| *t_name == rest) {
					return Some(S_BASE + (l as u32 * N_COUNT) + (v as u32 * T_COUNT) + t as u32);
				}
			}
		}
		None
	}
}
