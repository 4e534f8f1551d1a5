use core::fmt;

use onca_base::{EnumCountT, EnumFromIndexT, EnumNameT};
use static_assertions::const_assert;

onca_base::indexed_enum!{
	/// Scripts
	///
	/// The discriminant of each script is its script code, as stored in the packed script field.
	/// Every script can be parsed from both its long property value alias (e.g. `Old_Italic`) and its ISO 15924 code (e.g. `Ital`).
	#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
	pub enum Script : u16 {
		/// Used by multiple scripts, to see which, check the script extensions of the codepoint.
		Common                    =   0 => "Common", "Zyyy";
		/// Inherits the script of the preceding base character.
		Inherited                 =   1 => "Inherited", "Zinh";
		Arabic                    =   2 => "Arabic", "Arab";
		Armenian                  =   3 => "Armenian", "Armn";
		Bengali                   =   4 => "Bengali", "Beng";
		Bopomofo                  =   5 => "Bopomofo", "Bopo";
		Cherokee                  =   6 => "Cherokee", "Cher";
		Coptic                    =   7 => "Coptic", "Copt";
		Cyrillic                  =   8 => "Cyrillic", "Cyrl";
		Deseret                   =   9 => "Deseret", "Dsrt";
		Devanagari                =  10 => "Devanagari", "Deva";
		Ethiopic                  =  11 => "Ethiopic", "Ethi";
		Georgian                  =  12 => "Georgian", "Geor";
		Gothic                    =  13 => "Gothic", "Goth";
		Greek                     =  14 => "Greek", "Grek";
		Gujarati                  =  15 => "Gujarati", "Gujr";
		Gurmukhi                  =  16 => "Gurmukhi", "Guru";
		Han                       =  17 => "Han", "Hani";
		Hangul                    =  18 => "Hangul", "Hang";
		Hebrew                    =  19 => "Hebrew", "Hebr";
		Hiragana                  =  20 => "Hiragana", "Hira";
		Kannada                   =  21 => "Kannada", "Knda";
		Katakana                  =  22 => "Katakana", "Kana";
		Khmer                     =  23 => "Khmer", "Khmr";
		Lao                       =  24 => "Lao", "Laoo";
		Latin                     =  25 => "Latin", "Latn";
		Malayalam                 =  26 => "Malayalam", "Mlym";
		Mongolian                 =  27 => "Mongolian", "Mong";
		Myanmar                   =  28 => "Myanmar", "Mymr";
		Ogham                     =  29 => "Ogham", "Ogam";
		OldItalic                 =  30 => "Old_Italic", "Ital";
		Oriya                     =  31 => "Oriya", "Orya";
		Runic                     =  32 => "Runic", "Runr";
		Sinhala                   =  33 => "Sinhala", "Sinh";
		Syriac                    =  34 => "Syriac", "Syrc";
		Tamil                     =  35 => "Tamil", "Taml";
		Telugu                    =  36 => "Telugu", "Telu";
		Thaana                    =  37 => "Thaana", "Thaa";
		Thai                      =  38 => "Thai", "Thai";
		Tibetan                   =  39 => "Tibetan", "Tibt";
		CanadianAboriginal        =  40 => "Canadian_Aboriginal", "Cans";
		Yi                        =  41 => "Yi", "Yiii";
		Tagalog                   =  42 => "Tagalog", "Tglg";
		Hanunoo                   =  43 => "Hanunoo", "Hano";
		Buhid                     =  44 => "Buhid", "Buhd";
		Tagbanwa                  =  45 => "Tagbanwa", "Tagb";
		Braille                   =  46 => "Braille", "Brai";
		Cypriot                   =  47 => "Cypriot", "Cprt";
		Limbu                     =  48 => "Limbu", "Limb";
		LinearB                   =  49 => "Linear_B", "Linb";
		Osmanya                   =  50 => "Osmanya", "Osma";
		Shavian                   =  51 => "Shavian", "Shaw";
		TaiLe                     =  52 => "Tai_Le", "Tale";
		Ugaritic                  =  53 => "Ugaritic", "Ugar";
		/// Only used as a script extension value.
		KatakanaOrHiragana        =  54 => "Katakana_Or_Hiragana", "Hrkt";
		Buginese                  =  55 => "Buginese", "Bugi";
		Glagolitic                =  56 => "Glagolitic", "Glag";
		Kharoshthi                =  57 => "Kharoshthi", "Khar";
		SylotiNagri               =  58 => "Syloti_Nagri", "Sylo";
		NewTaiLue                 =  59 => "New_Tai_Lue", "Talu";
		Tifinagh                  =  60 => "Tifinagh", "Tfng";
		OldPersian                =  61 => "Old_Persian", "Xpeo";
		Balinese                  =  62 => "Balinese", "Bali";
		Batak                     =  63 => "Batak", "Batk";
		Blissymbols               =  64 => "Blissymbols", "Blis";
		Brahmi                    =  65 => "Brahmi", "Brah";
		Cham                      =  66 => "Cham", "Cham";
		Cirth                     =  67 => "Cirth", "Cirt";
		OldChurchSlavonicCyrillic =  68 => "Old_Church_Slavonic_Cyrillic", "Cyrs";
		DemoticEgyptian           =  69 => "Demotic_Egyptian", "Egyd";
		HieraticEgyptian          =  70 => "Hieratic_Egyptian", "Egyh";
		EgyptianHieroglyphs       =  71 => "Egyptian_Hieroglyphs", "Egyp";
		Khutsuri                  =  72 => "Khutsuri", "Geok";
		SimplifiedHan             =  73 => "Simplified_Han", "Hans";
		TraditionalHan            =  74 => "Traditional_Han", "Hant";
		PahawhHmong               =  75 => "Pahawh_Hmong", "Hmng";
		OldHungarian              =  76 => "Old_Hungarian", "Hung";
		HarappanIndus             =  77 => "Harappan_Indus", "Inds";
		Javanese                  =  78 => "Javanese", "Java";
		KayahLi                   =  79 => "Kayah_Li", "Kali";
		LatinFraktur              =  80 => "Latin_Fraktur", "Latf";
		LatinGaelic               =  81 => "Latin_Gaelic", "Latg";
		Lepcha                    =  82 => "Lepcha", "Lepc";
		LinearA                   =  83 => "Linear_A", "Lina";
		Mandaic                   =  84 => "Mandaic", "Mand";
		MayanHieroglyphs          =  85 => "Mayan_Hieroglyphs", "Maya";
		MeroiticHieroglyphs       =  86 => "Meroitic_Hieroglyphs", "Mero";
		Nko                       =  87 => "Nko", "Nkoo";
		OldTurkic                 =  88 => "Old_Turkic", "Orkh";
		OldPermic                 =  89 => "Old_Permic", "Perm";
		PhagsPa                   =  90 => "Phags_Pa", "Phag";
		Phoenician                =  91 => "Phoenician", "Phnx";
		Miao                      =  92 => "Miao", "Plrd";
		Rongorongo                =  93 => "Rongorongo", "Roro";
		Sarati                    =  94 => "Sarati", "Sara";
		EstrangeloSyriac          =  95 => "Estrangelo_Syriac", "Syre";
		WesternSyriac             =  96 => "Western_Syriac", "Syrj";
		EasternSyriac             =  97 => "Eastern_Syriac", "Syrn";
		Tengwar                   =  98 => "Tengwar", "Teng";
		Vai                       =  99 => "Vai", "Vaii";
		VisibleSpeech             = 100 => "Visible_Speech", "Visp";
		Cuneiform                 = 101 => "Cuneiform", "Xsux";
		UnwrittenLanguages        = 102 => "Unwritten_Languages", "Zxxx";
		/// Unassigned, private use, noncharacter and surrogate codepoints.
		Unknown                   = 103 => "Unknown", "Zzzz";
		Carian                    = 104 => "Carian", "Cari";
		/// Alias for Han + Hiragana + Katakana, not used in the character database.
		Japanese                  = 105 => "Japanese", "Jpan";
		TaiTham                   = 106 => "Tai_Tham", "Lana";
		Lycian                    = 107 => "Lycian", "Lyci";
		Lydian                    = 108 => "Lydian", "Lydi";
		OlChiki                   = 109 => "Ol_Chiki", "Olck";
		Rejang                    = 110 => "Rejang", "Rjng";
		Saurashtra                = 111 => "Saurashtra", "Saur";
		SignWriting               = 112 => "SignWriting", "Sgnw";
		Sundanese                 = 113 => "Sundanese", "Sund";
		Moon                      = 114 => "Moon", "Moon";
		MeeteiMayek               = 115 => "Meetei_Mayek", "Mtei";
		ImperialAramaic           = 116 => "Imperial_Aramaic", "Armi";
		Avestan                   = 117 => "Avestan", "Avst";
		Chakma                    = 118 => "Chakma", "Cakm";
		/// Alias for Hangul + Han, not used in the character database.
		Korean                    = 119 => "Korean", "Kore";
		Kaithi                    = 120 => "Kaithi", "Kthi";
		Manichaean                = 121 => "Manichaean", "Mani";
		InscriptionalPahlavi      = 122 => "Inscriptional_Pahlavi", "Phli";
		PsalterPahlavi            = 123 => "Psalter_Pahlavi", "Phlp";
		BookPahlavi               = 124 => "Book_Pahlavi", "Phlv";
		InscriptionalParthian     = 125 => "Inscriptional_Parthian", "Prti";
		Samaritan                 = 126 => "Samaritan", "Samr";
		TaiViet                   = 127 => "Tai_Viet", "Tavt";
		MathematicalNotation      = 128 => "Mathematical_Notation", "Zmth";
		Symbols                   = 129 => "Symbols", "Zsym";
		Bamum                     = 130 => "Bamum", "Bamu";
		Lisu                      = 131 => "Lisu", "Lisu";
		NakhiGeba                 = 132 => "Nakhi_Geba", "Nkgb";
		OldSouthArabian           = 133 => "Old_South_Arabian", "Sarb";
		BassaVah                  = 134 => "Bassa_Vah", "Bass";
		Duployan                  = 135 => "Duployan", "Dupl";
		Elbasan                   = 136 => "Elbasan", "Elba";
		Grantha                   = 137 => "Grantha", "Gran";
		Kpelle                    = 138 => "Kpelle", "Kpel";
		Loma                      = 139 => "Loma", "Loma";
		MendeKikakui              = 140 => "Mende_Kikakui", "Mend";
		MeroiticCursive           = 141 => "Meroitic_Cursive", "Merc";
		OldNorthArabian           = 142 => "Old_North_Arabian", "Narb";
		Nabataean                 = 143 => "Nabataean", "Nbat";
		Palmyrene                 = 144 => "Palmyrene", "Palm";
		Khudawadi                 = 145 => "Khudawadi", "Sind";
		WarangCiti                = 146 => "Warang_Citi", "Wara";
		Afaka                     = 147 => "Afaka", "Afak";
		Jurchen                   = 148 => "Jurchen", "Jurc";
		Mro                       = 149 => "Mro", "Mroo";
		Nushu                     = 150 => "Nushu", "Nshu";
		Sharada                   = 151 => "Sharada", "Shrd";
		SoraSompeng               = 152 => "Sora_Sompeng", "Sora";
		Takri                     = 153 => "Takri", "Takr";
		Tangut                    = 154 => "Tangut", "Tang";
		Woleai                    = 155 => "Woleai", "Wole";
		AnatolianHieroglyphs      = 156 => "Anatolian_Hieroglyphs", "Hluw";
		Khojki                    = 157 => "Khojki", "Khoj";
		Tirhuta                   = 158 => "Tirhuta", "Tirh";
		CaucasianAlbanian         = 159 => "Caucasian_Albanian", "Aghb";
		Mahajani                  = 160 => "Mahajani", "Mahj";
		Ahom                      = 161 => "Ahom", "Ahom";
		Hatran                    = 162 => "Hatran", "Hatr";
		Modi                      = 163 => "Modi", "Modi";
		Multani                   = 164 => "Multani", "Mult";
		PauCinHau                 = 165 => "Pau_Cin_Hau", "Pauc";
		Siddham                   = 166 => "Siddham", "Sidd";
		Adlam                     = 167 => "Adlam", "Adlm";
		Bhaiksuki                 = 168 => "Bhaiksuki", "Bhks";
		Marchen                   = 169 => "Marchen", "Marc";
		Newa                      = 170 => "Newa", "Newa";
		Osage                     = 171 => "Osage", "Osge";
		/// Alias for Han + Bopomofo, not used in the character database.
		HanWithBopomofo           = 172 => "Han_With_Bopomofo", "Hanb";
		Jamo                      = 173 => "Jamo", "Jamo";
		SymbolsEmoji              = 174 => "Symbols_Emoji", "Zsye";
		MasaramGondi              = 175 => "Masaram_Gondi", "Gonm";
		Soyombo                   = 176 => "Soyombo", "Soyo";
		ZanabazarSquare           = 177 => "Zanabazar_Square", "Zanb";
		Dogra                     = 178 => "Dogra", "Dogr";
		GunjalaGondi              = 179 => "Gunjala_Gondi", "Gong";
		Makasar                   = 180 => "Makasar", "Maka";
		Medefaidrin               = 181 => "Medefaidrin", "Medf";
		HanifiRohingya            = 182 => "Hanifi_Rohingya", "Rohg";
		Sogdian                   = 183 => "Sogdian", "Sogd";
		OldSogdian                = 184 => "Old_Sogdian", "Sogo";
		Elymaic                   = 185 => "Elymaic", "Elym";
		NyiakengPuachueHmong      = 186 => "Nyiakeng_Puachue_Hmong", "Hmnp";
		Nandinagari               = 187 => "Nandinagari", "Nand";
		Wancho                    = 188 => "Wancho", "Wcho";
		Chorasmian                = 189 => "Chorasmian", "Chrs";
		DivesAkuru                = 190 => "Dives_Akuru", "Diak";
		KhitanSmallScript         = 191 => "Khitan_Small_Script", "Kits";
		Yezidi                    = 192 => "Yezidi", "Yezi";
		CyproMinoan               = 193 => "Cypro_Minoan", "Cpmn";
		OldUyghur                 = 194 => "Old_Uyghur", "Ougr";
		Tangsa                    = 195 => "Tangsa", "Tnsa";
		Toto                      = 196 => "Toto", "Toto";
		Vithkuqi                  = 197 => "Vithkuqi", "Vith";
		Kawi                      = 198 => "Kawi", "Kawi";
		NagMundari                = 199 => "Nag_Mundari", "Nagm";
	}
}

impl Script {
	/// Get the script code.
	pub const fn code(self) -> u16 {
		self as u16
	}

	/// Get the script for a script code, or `None` if the code is not known.
	pub fn from_code(code: u32) -> Option<Self> {
		Self::from_idx(code as usize)
	}

	/// Is this one of the scripts that don't identify a single writing system, i.e. `Common` or `Inherited`.
	pub const fn is_shared(self) -> bool {
		matches!(self, Script::Common | Script::Inherited)
	}
}

impl fmt::Display for Script {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.long_name())
	}
}

//==============================================================

/// Set of scripts.
///
/// Fixed size bitset indexed by script code, so it is `Copy` and never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScriptSet {
	bits : [u64; Self::NUM_WORDS],
}

const_assert!(<Script as EnumCountT>::COUNT <= ScriptSet::CAPACITY);

impl ScriptSet {
	const NUM_WORDS: usize = 4;
	const BITS_PER_WORD: usize = u64::BITS as usize;

	/// Maximum number of scripts a set can hold.
	pub const CAPACITY: usize = Self::NUM_WORDS * Self::BITS_PER_WORD;

	/// Create an empty set.
	pub const fn new() -> Self {
		Self { bits: [0; Self::NUM_WORDS] }
	}

	fn split(script: Script) -> (usize, u64) {
		let idx = script.index();
		(idx / Self::BITS_PER_WORD, 1u64 << (idx % Self::BITS_PER_WORD))
	}

	/// Insert a script, returns `true` if it was not yet in the set.
	pub fn insert(&mut self, script: Script) -> bool {
		let (word, mask) = Self::split(script);
		let inserted = self.bits[word] & mask == 0;
		self.bits[word] |= mask;
		inserted
	}

	/// Remove a script, returns `true` if it was in the set.
	pub fn remove(&mut self, script: Script) -> bool {
		let (word, mask) = Self::split(script);
		let removed = self.bits[word] & mask != 0;
		self.bits[word] &= !mask;
		removed
	}

	pub fn contains(&self, script: Script) -> bool {
		let (word, mask) = Self::split(script);
		self.bits[word] & mask != 0
	}

	pub fn len(&self) -> usize {
		self.bits.iter().map(|word| word.count_ones() as usize).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.bits.iter().all(|word| *word == 0)
	}

	/// Remove all scripts, so the set can be reused.
	pub fn clear(&mut self) {
		self.bits = [0; Self::NUM_WORDS];
	}

	/// Iterate over the scripts in ascending script code order.
	pub fn iter(&self) -> ScriptSetIter {
		ScriptSetIter { bits: self.bits, word: 0 }
	}
}

impl fmt::Debug for ScriptSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter().map(|script| script.short_name())).finish()
	}
}

impl FromIterator<Script> for ScriptSet {
	fn from_iter<T: IntoIterator<Item = Script>>(iter: T) -> Self {
		let mut set = ScriptSet::new();
		for script in iter {
			set.insert(script);
		}
		set
	}
}

impl<'a> IntoIterator for &'a ScriptSet {
	type Item = Script;
	type IntoIter = ScriptSetIter;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the scripts in a [`ScriptSet`]
pub struct ScriptSetIter {
	bits : [u64; ScriptSet::NUM_WORDS],
	word : usize,
}

impl Iterator for ScriptSetIter {
	type Item = Script;

	fn next(&mut self) -> Option<Self::Item> {
		while self.word < ScriptSet::NUM_WORDS {
			let bits = self.bits[self.word];
			if bits == 0 {
				self.word += 1;
				continue;
			}

			let bit = bits.trailing_zeros() as usize;
			self.bits[self.word] &= bits - 1;
			// Only valid scripts are ever inserted
			return Script::from_idx(self.word * ScriptSet::BITS_PER_WORD + bit);
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		// Words before `self.word` are already exhausted
		let remaining = self.bits.iter().map(|word| word.count_ones() as usize).sum();
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for ScriptSetIter {}
