use super::*;

fn collect_range(table: &NameTable, choice: NameChoice, start: i64, limit: i64) -> Vec<(u32, String)> {
	let mut names = table.enumerator(choice);
	names.set_range(start, limit).unwrap();
	names.collect()
}

/// Check that the enumerator yields exactly the codepoints that have a name
fn check_totality(table: &NameTable, choice: NameChoice, start: u32, limit: u32) {
	let expected = (start..limit)
		.filter_map(|codepoint| table.get_name(codepoint, choice).map(|name| (codepoint, name)))
		.collect::<Vec<_>>();
	let found = collect_range(table, choice, start as i64, limit as i64);
	assert_eq!(found.len(), expected.len(), "{choice:?} [{start:#X}, {limit:#X})");
	for (found, expected) in found.iter().zip(expected.iter()) {
		assert_eq!(found, expected);
	}
}

#[test]
fn test_totality() {
	let names = UnicodeTables::builtin().names();
	check_totality(names, NameChoice::Modern, 0, 0x3100);
	check_totality(names, NameChoice::Modern, 0xA000, 0xAD00);
	check_totality(names, NameChoice::Modern, 0x1F000, 0x1F700);
	check_totality(names, NameChoice::Extended, 0x370, 0x400);
	check_totality(names, NameChoice::Extended, 0xD7A0, 0xE010);
	check_totality(names, NameChoice::Legacy, 0, 0x100);
	check_totality(names, NameChoice::Legacy, 0xE00, 0xF00);
	check_totality(names, NameChoice::Modern, 0x10000, 0x10200);
}

#[test]
fn test_whole_codespace() {
	let mut prev = None;
	let mut count = 0;
	for (codepoint, name) in name_enumerator(NameChoice::Modern) {
		assert!(prev.map_or(true, |prev| prev < codepoint));
		if codepoint % 0x100 == 0 || name.starts_with("HANGUL") {
			assert_eq!(get_name(codepoint, NameChoice::Modern).as_deref(), Some(name.as_str()));
		}
		prev = Some(codepoint);
		count += 1;
	}
	// All generated names are included
	let generated = DEFAULT_ALGORITHMIC_RANGES.iter().map(|range| range.len()).sum::<u32>();
	assert!(count > generated);
	assert_eq!(prev, Some(0xE01EF));
}

#[test]
fn test_extended_is_dense() {
	let mut names = name_enumerator(NameChoice::Extended);
	names.set_range(0, 0x20000).unwrap();

	let mut expected = 0;
	while names.move_next() {
		let (codepoint, name) = names.current().unwrap();
		assert_eq!(codepoint, expected);
		assert!(!name.is_empty());
		expected += 1;
	}
	assert_eq!(expected, 0x20000);
}

#[test]
fn test_legacy_names() {
	let names = collect_range(UnicodeTables::builtin().names(), NameChoice::Legacy, 0, MAX_CODE_POINT as i64 + 1);
	assert_eq!(names[0], (0, "NULL".to_owned()));
	assert!(names.contains(&(0x27, "APOSTROPHE-QUOTE".to_owned())));
	assert!(names.contains(&(0x0E01, "THAI LETTER KO KAI".to_owned())));

	let table = UnicodeTables::builtin().names();
	for (codepoint, name) in &names {
		assert!(table.algorithmic_range_for(*codepoint).is_none(), "{codepoint:#X}");
		assert_eq!(table.get_name(*codepoint, NameChoice::Legacy).as_ref(), Some(name));
	}
}

#[test]
fn test_set_range() {
	let mut names = name_enumerator(NameChoice::Modern);
	names.set_range(0x41, 0x5B).unwrap();
	assert_eq!(names.range(), (0x41, 0x5B));
	assert_eq!(names.by_ref().count(), 26);

	assert_eq!(names.set_range(5, 5), Err(Error::InvalidRange { start: 5, limit: 5 }));
	assert_eq!(names.set_range(10, 5), Err(Error::InvalidRange { start: 10, limit: 5 }));
	// A failed call keeps the previous range
	assert_eq!(names.range(), (0x41, 0x5B));

	let mut names = name_enumerator(NameChoice::Legacy);
	names.set_range(-10, 5).unwrap();
	assert_eq!(names.range(), (0, 5));
	assert!(names.move_next());
	assert_eq!(names.current(), Some((0, "NULL")));

	let mut names = name_enumerator(NameChoice::Extended);
	names.set_range(0x10FF00, MAX_CODE_POINT as i64 + 100).unwrap();
	assert_eq!(names.range(), (0x10FF00, 0x110000));
	assert_eq!(names.last(), Some((0x10FFFF, "<noncharacter-10FFFF>".to_owned())));
}

#[test]
fn test_range_outside_codespace() {
	let mut names = name_enumerator(NameChoice::Extended);
	names.set_range(0x200000, 0x300000).unwrap();
	assert_eq!(names.range(), (0x110000, 0x110000));
	assert!(!names.move_next());
}

#[test]
fn test_reset_and_exhaustion() {
	let mut names = name_enumerator(NameChoice::Modern);
	assert_eq!(names.current(), None);

	names.set_range(0xD7A0, 0xD7B0).unwrap();
	let first = names.by_ref().collect::<Vec<_>>();
	assert_eq!(first.len(), 4);
	assert_eq!(first[3], (0xD7A3, "HANGUL SYLLABLE HIH".to_owned()));

	assert!(!names.move_next());
	assert_eq!(names.current(), None);
	assert!(!names.move_next());

	names.reset();
	names.reset();
	assert_eq!(names.current(), None);
	assert_eq!(names.by_ref().collect::<Vec<_>>(), first);
}

#[test]
fn test_independent_enumerators() {
	let table = UnicodeTables::builtin().names();
	let mut a = table.enumerator(NameChoice::Modern);
	let mut b = table.enumerator(NameChoice::Modern);
	a.set_range(0x20, 0x800).unwrap();
	b.set_range(0x20, 0x800).unwrap();

	// Advance `a` by one so both point into different groups most of the time
	assert!(a.move_next());
	let mut from_a = vec![a.current().map(|(codepoint, _)| codepoint).unwrap()];
	let mut from_b = Vec::new();
	loop {
		let next_a = a.move_next();
		let next_b = b.move_next();
		if next_a {
			from_a.push(a.current().unwrap().0);
		}
		if next_b {
			from_b.push(b.current().unwrap().0);
		}
		if !next_a && !next_b {
			break;
		}
	}
	assert_eq!(from_a, from_b);
}

//==============================================================
// Synthetic table
//==============================================================

#[test]
fn test_synthetic_modern() {
	let table = synthetic_name_table();

	let names = collect_range(&table, NameChoice::Modern, 0xF0, 0x104);
	let codepoints = names.iter().map(|(codepoint, _)| *codepoint).collect::<Vec<_>>();
	assert_eq!(codepoints, [0xFF, 0x100, 0x101, 0x102, 0x103]);
	assert_eq!(names[0].1, "BEFORE");
	assert_eq!(names[3].1, "CJK UNIFIED IDEOGRAPH-0102");

	let names = collect_range(&table, NameChoice::Modern, 0xF0, 0x106);
	assert_eq!(names.last(), Some(&(0x104, "AFTER".to_owned())));

	let names = collect_range(&table, NameChoice::Modern, 0, 0x110000);
	let codepoints = names.iter().map(|(codepoint, _)| *codepoint).collect::<Vec<_>>();
	assert_eq!(codepoints, [0xFF, 0x100, 0x101, 0x102, 0x103, 0x104, 0x140, 0x1F0, 0x1F1]);

	// Starting inside a generated range
	let names = collect_range(&table, NameChoice::Modern, 0x102, 0x141);
	let codepoints = names.iter().map(|(codepoint, _)| *codepoint).collect::<Vec<_>>();
	assert_eq!(codepoints, [0x102, 0x103, 0x104, 0x140]);
}

#[test]
fn test_synthetic_legacy() {
	let table = synthetic_name_table();
	let names = collect_range(&table, NameChoice::Legacy, 0, 0x110000);
	assert_eq!(names, [(0x104, "OLD AFTER".to_owned()), (0x105, "ONLY LEGACY".to_owned())]);
}

#[test]
fn test_synthetic_extended() {
	let table = synthetic_name_table();
	let names = collect_range(&table, NameChoice::Extended, 0xFE, 0x107);
	let names = names.iter().map(|(_, name)| name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, [
		"<reserved-00FE>",
		"BEFORE",
		"CJK UNIFIED IDEOGRAPH-0100",
		"CJK UNIFIED IDEOGRAPH-0101",
		"CJK UNIFIED IDEOGRAPH-0102",
		"CJK UNIFIED IDEOGRAPH-0103",
		"AFTER",
		"<reserved-0105>",
		"<reserved-0106>",
	]);

	check_totality(&table, NameChoice::Extended, 0, 0x300);
	check_totality(&table, NameChoice::Modern, 0, 0x300);
	check_totality(&table, NameChoice::Legacy, 0, 0x300);
}
