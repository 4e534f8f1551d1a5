use super::*;

#[test]
fn test_script_names() {
	assert_eq!(Script::COUNT, 200);
	assert_eq!(Script::parse("Old_Italic"), Some(Script::OldItalic));
	assert_eq!(Script::parse("Ital"), Some(Script::OldItalic));
	assert_eq!(Script::parse("Nag_Mundari"), Some(Script::NagMundari));
	assert_eq!(Script::parse("Old Italic"), None);
	assert_eq!(Script::Latin.long_name(), "Latin");
	assert_eq!(Script::Latin.short_name(), "Latn");
	assert_eq!(Script::KhitanSmallScript.to_string(), "Khitan_Small_Script");

	assert_eq!(Script::Common.code(), 0);
	assert_eq!(Script::Inherited.code(), 1);
	assert_eq!(Script::Latin.code(), 25);
	assert_eq!(Script::from_code(103), Some(Script::Unknown));
	assert_eq!(Script::from_code(200), None);

	for (idx, script) in all_scripts().enumerate() {
		assert_eq!(script.index(), idx);
		assert_eq!(Script::parse(script.long_name()), Some(script));
		assert_eq!(Script::parse(script.short_name()), Some(script));
	}
}

#[test]
fn test_script_set() {
	let mut set = ScriptSet::new();
	assert!(set.is_empty());
	assert!(set.insert(Script::Latin));
	assert!(set.insert(Script::NagMundari));
	assert!(set.insert(Script::Common));
	assert!(!set.insert(Script::Latin));
	assert_eq!(set.len(), 3);
	assert!(set.contains(Script::NagMundari));
	assert!(!set.contains(Script::Greek));

	assert_eq!(set.iter().collect::<Vec<_>>(), [Script::Common, Script::Latin, Script::NagMundari]);
	assert_eq!(set.iter().len(), 3);

	assert!(set.remove(Script::Latin));
	assert!(!set.remove(Script::Latin));
	assert_eq!(set.len(), 2);

	let other = [Script::NagMundari, Script::Common].into_iter().collect::<ScriptSet>();
	assert_eq!(set, other);
	assert_eq!(format!("{set:?}"), r#"{"Zyyy", "Nagm"}"#);

	set.clear();
	assert!(set.is_empty());
	assert_eq!(set.iter().next(), None);
}

#[test]
fn test_packed_field() {
	assert_eq!(PackedScriptField::decode(25), PackedScriptField::Direct(25));
	assert_eq!(PackedScriptField::decode(0xFFFF_0000 | 25), PackedScriptField::Direct(25));
	assert_eq!(PackedScriptField::decode(0x405), PackedScriptField::Common(5));
	assert_eq!(PackedScriptField::decode(0x80A), PackedScriptField::Inherited(10));
	assert_eq!(PackedScriptField::decode(0xC03), PackedScriptField::Overflow { index: 3, indirect: false });
	assert_eq!(PackedScriptField::decode(0x1C03), PackedScriptField::Overflow { index: 3, indirect: true });

	assert_eq!(PackedScriptField::Common(5).encode(), Some(0x405));
	assert_eq!(PackedScriptField::Overflow { index: 0x3FF, indirect: true }.encode(), Some(0x1FFF));
	assert_eq!(PackedScriptField::Common(0x400).encode(), None);
	assert_eq!(PackedScriptField::Direct(0x400).encode(), None);
}

/// Resolver over a handmade table: a set `[Grek, Latn]` at 0 and an indirection cell `[Latn, 0]` at 2
fn handmade_resolver(entries: Vec<u16>) -> ScriptResolver {
	let properties = |codepoint: u32| match codepoint {
		0x10 => SCRIPT_X_WITH_COMMON,
		0x11 => SCRIPT_X_WITH_INHERITED,
		0x12 => SCRIPT_X_WITH_OTHER,
		0x13 => SCRIPT_X_WITH_OTHER | SCRIPT_X_INDIRECT | 2,
		_ => Script::Latin.code() as u32,
	};
	ScriptResolver::new(properties, ExtensionTable::new(entries))
}

#[test]
fn test_resolve_zones() {
	let grek = Script::Greek.code();
	let latn = Script::Latin.code();
	let resolver = handmade_resolver(vec![grek, EXTENSION_TERMINATOR | latn, latn, 0]);
	assert!(resolver.validate([0x10, 0x11, 0x12, 0x13, 0x41]).is_ok());

	assert_eq!(resolver.get_script(0x41), Ok(Script::Latin));
	assert_eq!(resolver.get_script(0x10), Ok(Script::Common));
	assert_eq!(resolver.get_script(0x11), Ok(Script::Inherited));
	assert_eq!(resolver.get_script(0x12), Ok(Script::Greek));
	assert_eq!(resolver.get_script(0x13), Ok(Script::Latin));

	let set = [Script::Greek, Script::Latin].into_iter().collect::<ScriptSet>();
	for codepoint in 0x10..=0x13 {
		assert_eq!(resolver.get_script_extensions(codepoint), Ok(ScriptExtensions::Extended(set)));
		assert!(resolver.has_script(codepoint, Script::Greek));
		assert!(resolver.has_script(codepoint, Script::Latin));
		assert!(!resolver.has_script(codepoint, Script::Cyrillic));
		assert!(!resolver.has_script(codepoint, Script::Common));
		// Larger than every script in the set, the scan has to stop at the terminator
		assert!(!resolver.has_script(codepoint, Script::Malayalam));
		assert!(!resolver.has_script_code(codepoint, (EXTENSION_TERMINATOR | latn) as u32));
	}

	assert_eq!(resolver.get_script_extensions(0x41), Ok(ScriptExtensions::Single(Script::Latin)));
	assert!(resolver.has_script_code(0x41, latn as u32));
	assert!(!resolver.has_script_code(0x41, 0x8000 + latn as u32));
}

#[test]
fn test_resolve_out_of_range() {
	let resolver = handmade_resolver(Vec::new());
	assert_eq!(resolver.get_script(0x110000), Err(Error::OutOfRange(0x110000)));
	assert_eq!(resolver.get_script_code(u32::MAX), Err(Error::OutOfRange(u32::MAX as i64)));
	assert!(resolver.get_script_extensions(0x110000).is_err());
	assert!(!resolver.has_script(0x110000, Script::Latin));
	assert!(resolver.get_script(MAX_CODE_POINT).is_ok());
}

#[test]
fn test_range_property_source() {
	let latn = Script::Latin.code() as u32;
	let grek = Script::Greek.code() as u32;
	let unknown = Script::Unknown.code() as u32;

	let source = RangePropertySource::from_ranges([(0x370, 0x3FF, grek), (0x41, 0x5A, latn)], unknown).unwrap();
	assert_eq!(source.num_ranges(), 2);
	assert_eq!(source.default_word(), unknown);
	assert_eq!(source.property_word(0x41), latn);
	assert_eq!(source.property_word(0x3FF), grek);
	assert_eq!(source.property_word(0x5B), unknown);

	assert!(RangePropertySource::from_ranges([(0x41, 0x5A, latn), (0x50, 0x60, grek)], unknown).is_err());

	let resolver = ScriptResolver::new(source, ExtensionTable::default());
	assert_eq!(resolver.get_script(0x3B1), Ok(Script::Greek));
	assert_eq!(resolver.get_script(0x20), Ok(Script::Unknown));
}

#[test]
fn test_validate_corrupt_sets() {
	let grek = Script::Greek.code();
	let latn = Script::Latin.code();

	// Unterminated
	let resolver = handmade_resolver(vec![grek, latn]);
	assert!(matches!(resolver.validate([0x12]), Err(Error::Integrity(_))));
	// Not sorted
	let resolver = handmade_resolver(vec![latn, EXTENSION_TERMINATOR | grek]);
	assert!(matches!(resolver.validate([0x12]), Err(Error::Integrity(_))));
	// Single script
	let resolver = handmade_resolver(vec![EXTENSION_TERMINATOR | grek]);
	assert!(matches!(resolver.validate([0x10]), Err(Error::Integrity(_))));
	// Cell outside of the table
	let resolver = handmade_resolver(vec![grek, EXTENSION_TERMINATOR | latn]);
	assert!(matches!(resolver.validate([0x13]), Err(Error::Integrity(_))));
	assert!(resolver.validate([0x10, 0x12, 0x41]).is_ok());
}

#[test]
fn test_builder_shares_sets() {
	let mut builder = ScriptDataBuilder::new();
	builder.add_script(0x100, 0x1FF, Script::Common).unwrap();
	builder.add_extensions(0x120, 0x120, &[Script::Latin, Script::Greek]).unwrap();
	builder.add_extensions(0x140, 0x141, &[Script::Greek, Script::Latin, Script::Greek]).unwrap();
	builder.add_script(0x200, 0x2FF, Script::Latin).unwrap();
	builder.add_extensions(0x210, 0x210, &[Script::Greek, Script::Latin]).unwrap();
	builder.add_extensions(0x220, 0x220, &[Script::Cyrillic]).unwrap();
	let resolver = builder.build().unwrap();

	let grek = Script::Greek.code();
	let latn = Script::Latin.code();
	// One shared set, plus an indirection cell for the Latin codepoint
	assert_eq!(resolver.extension_table().entries(), [grek, EXTENSION_TERMINATOR | latn, latn, 0]);

	assert_eq!(resolver.get_script(0x120), Ok(Script::Common));
	assert_eq!(resolver.get_script(0x141), Ok(Script::Common));
	assert_eq!(resolver.get_script(0x210), Ok(Script::Latin));
	assert!(resolver.has_script(0x210, Script::Greek));
	assert_eq!(resolver.get_script(0x220), Ok(Script::Cyrillic));
	assert_eq!(resolver.get_script_extensions(0x220), Ok(ScriptExtensions::Single(Script::Cyrillic)));
	assert_eq!(resolver.get_script(0x1FF), Ok(Script::Common));
	assert_eq!(resolver.get_script(0x300), Ok(Script::Unknown));
	assert_eq!(resolver.get_script(0xFF), Ok(Script::Unknown));

	assert!(ScriptDataBuilder::new().add_script(0x20, 0x10, Script::Latin).is_err());
	assert!(ScriptDataBuilder::new().add_script(0x20, 0x110000, Script::Latin).is_err());
}

#[test]
fn test_builder_extension_table_limit() {
	// Every codepoint gets its own 2 script set, which overflows the 10 bit index
	let mut builder = ScriptDataBuilder::new();
	let scripts = all_scripts().collect::<Vec<_>>();
	let mut codepoint = 0x1000;
	for (i, first) in scripts.iter().enumerate() {
		for second in &scripts[i + 1..] {
			builder.add_script(codepoint, codepoint, Script::Common).unwrap();
			builder.add_extensions(codepoint, codepoint, &[*first, *second]).unwrap();
			codepoint += 1;
		}
	}
	assert!(matches!(builder.build(), Err(Error::Data { .. })));
}

//==============================================================
// Built-in tables
//==============================================================

#[test]
fn test_latin_capital_a() {
	assert_eq!(get_script(0x41), Ok(Script::Latin));
	assert_eq!(get_script_code(0x41), Ok(25));
	assert_eq!(get_script_extensions(0x41), Ok(ScriptExtensions::Single(Script::Latin)));
	assert!(has_script(0x41, Script::Latin));
	assert!(!has_script(0x41, Script::Greek));
	assert!(!has_script(0x41, Script::Common));
}

#[test]
fn test_arabic_tatweel() {
	let Ok(ScriptExtensions::Extended(set)) = get_script_extensions(0x0640) else {
		panic!("U+0640 should have script extensions");
	};
	assert_eq!(set.len(), 9);
	assert!(set.contains(Script::Arabic));
	assert!(set.contains(Script::Syriac));
	assert!(set.contains(Script::OldUyghur));
	assert!(!set.contains(Script::Latin));
	assert!(!set.contains(Script::Common));

	assert_eq!(get_script(0x0640), Ok(Script::Common));
	assert!(has_script(0x0640, Script::Arabic));
	assert!(has_script(0x0640, Script::Adlam));
	assert!(!has_script(0x0640, Script::Hebrew));
}

#[test]
fn test_script_zones_in_builtin_data() {
	// Inherited with extensions
	assert_eq!(get_script(0x0951), Ok(Script::Inherited));
	assert!(has_script(0x0951, Script::Devanagari));
	assert!(has_script(0x0951, Script::Tirhuta));

	// Primary script is the smallest script in its extensions
	assert_eq!(get_script(0x0483), Ok(Script::Cyrillic));
	assert!(has_script(0x0483, Script::OldPermic));
	assert_eq!(get_script(0x0966), Ok(Script::Devanagari));
	assert!(has_script(0x0966, Script::Kaithi));

	// Single script extensions replace the script
	assert_eq!(get_script_extensions(0x0342), Ok(ScriptExtensions::Single(Script::Greek)));
	assert_eq!(get_script(0x303E), Ok(Script::Han));
	assert_eq!(get_script(0x0300), Ok(Script::Inherited));
	assert_eq!(get_script_extensions(0x0300), Ok(ScriptExtensions::Single(Script::Inherited)));

	// Unassigned and algorithmic ranges
	assert_eq!(get_script(0x0378), Ok(Script::Unknown));
	assert_eq!(get_script(0x4E00), Ok(Script::Han));
	assert_eq!(get_script(0xAC00), Ok(Script::Hangul));
	assert_eq!(get_script(MAX_CODE_POINT), Ok(Script::Unknown));
	assert_eq!(get_script(MAX_CODE_POINT + 1), Err(Error::OutOfRange(0x110000)));
}

#[test]
fn test_scripts_across_the_database() {
	assert_eq!(get_script(0x0E01), Ok(Script::Thai));
	assert_eq!(get_script(0x0531), Ok(Script::Armenian));
	assert_eq!(get_script(0x10000), Ok(Script::LinearB));
	assert_eq!(get_script(0x12000), Ok(Script::Cuneiform));
	assert_eq!(get_script(0x10570), Ok(Script::Vithkuqi));
	assert_eq!(get_script(0x2A700), Ok(Script::Han));
	assert_eq!(get_script(0xE0001), Ok(Script::Common));
	assert_eq!(get_script(0xE0100), Ok(Script::Inherited));

	// U+0342 has the Inherited script, but only a single extension
	assert_eq!(get_script(0x0342), Ok(Script::Greek));

	// Every generated name belongs to the script of its range
	for range in UnicodeTables::builtin().names().algorithmic_ranges() {
		let script = match range.kind {
			AlgorithmicNameKind::CjkUnifiedIdeograph | AlgorithmicNameKind::CjkCompatibilityIdeograph => Script::Han,
			AlgorithmicNameKind::TangutIdeograph => Script::Tangut,
			AlgorithmicNameKind::KhitanSmallScriptCharacter => Script::KhitanSmallScript,
			AlgorithmicNameKind::NushuCharacter => Script::Nushu,
			AlgorithmicNameKind::HangulSyllable => Script::Hangul,
		};
		for codepoint in (range.start..range.end).step_by(13).chain([range.end - 1]) {
			assert_eq!(get_script(codepoint), Ok(script), "U+{codepoint:04X}");
		}
	}
}

#[test]
fn test_script_extension_consistency() {
	let resolver = UnicodeTables::builtin().scripts();
	for codepoint in (0..0x3100).chain(0x1F600..0x1F650) {
		let script = resolver.get_script(codepoint).unwrap();
		match resolver.get_script_extensions(codepoint).unwrap() {
			ScriptExtensions::Single(single) => {
				assert_eq!(single, script, "U+{codepoint:04X}");
				for other in all_scripts() {
					assert_eq!(resolver.has_script(codepoint, other), other == single, "U+{codepoint:04X} {other:?}");
				}
			},
			ScriptExtensions::Extended(set) => {
				assert!(set.len() >= 2, "U+{codepoint:04X}");
				if !script.is_shared() {
					assert!(set.contains(script), "U+{codepoint:04X}");
				}
				for other in all_scripts() {
					assert_eq!(resolver.has_script(codepoint, other), set.contains(other), "U+{codepoint:04X} {other:?}");
				}

				let view = resolver.extension_set(codepoint).unwrap().unwrap();
				let codes = view.codes().collect::<Vec<_>>();
				assert!(codes.windows(2).all(|pair| pair[0] < pair[1]), "U+{codepoint:04X}");
				assert_eq!(view.to_script_set(), set);
			},
		}
	}
}
