use crate::*;

mod scripts;
mod enumerator;

/// Every script, in script code order
fn all_scripts() -> impl Iterator<Item = Script> {
	(0..Script::COUNT).filter_map(Script::from_idx)
}

/// Name table over a small part of the codespace, to check the enumerator against exact expectations
fn synthetic_name_table() -> NameTable {
	let mut builder = NameTableBuilder::new();
	builder.add_algorithmic_range(AlgorithmicNameRange::new(0x100, 0x104, AlgorithmicNameKind::CjkUnifiedIdeograph));
	builder.add_algorithmic_range(AlgorithmicNameRange::new(0x1F0, 0x1F2, AlgorithmicNameKind::NushuCharacter));
	builder.add_name(0x0FF, "BEFORE", "").unwrap();
	builder.add_name(0x102, "HIDDEN", "").unwrap();
	builder.add_name(0x104, "AFTER", "OLD AFTER").unwrap();
	builder.add_name(0x105, "", "ONLY LEGACY").unwrap();
	builder.add_name(0x140, "FAR", "").unwrap();
	builder.build().unwrap()
}
