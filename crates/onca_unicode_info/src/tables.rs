use once_cell::sync::Lazy;
use onca_logging::{log_info, log_severe};
use static_assertions::assert_impl_all;

use crate::{
	builder::{NameTableBuilder, ScriptDataBuilder},
	names::NameTable,
	script_ext::ScriptResolver,
	ucd::{self, UcdSources},
	Result, LOG_CAT_UCD,
};

/// Script and name tables of the unicode character database.
pub struct UnicodeTables {
	scripts : ScriptResolver,
	names   : NameTable,
}

assert_impl_all!(UnicodeTables: Send, Sync);
assert_impl_all!(ScriptResolver: Send, Sync);
assert_impl_all!(NameTable: Send, Sync);

static BUILTIN: Lazy<UnicodeTables> = Lazy::new(|| {
	match UnicodeTables::from_ucd(&UcdSources::builtin()) {
		Ok(tables) => tables,
		Err(err) => {
			log_severe!(LOG_CAT_UCD, UnicodeTables::builtin, "Built-in unicode tables are corrupt: {err}");
			panic!("Built-in unicode tables are corrupt: {err}");
		},
	}
});

impl UnicodeTables {
	/// Build the tables from the contents of the unicode character database files.
	pub fn from_ucd(sources: &UcdSources) -> Result<Self> {
		let mut script_builder = ScriptDataBuilder::new();
		let num_scripts = ucd::load_scripts(sources.scripts, &mut script_builder)?;
		let num_extensions = ucd::load_script_extensions(sources.script_extensions, &mut script_builder)?;
		let scripts = script_builder.build()?;

		let mut name_builder = NameTableBuilder::with_default_algorithmic_ranges();
		let num_names = ucd::load_unicode_data(sources.unicode_data, &mut name_builder)?;
		let names = name_builder.build()?;

		log_info!(LOG_CAT_UCD, "Loaded {num_scripts} script ranges, {num_extensions} script extension ranges and {num_names} character entries");
		log_info!(LOG_CAT_UCD, "Extension table holds {} entries, name table holds {} groups in a {} byte pool",
			scripts.extension_table().len(), names.groups().len(), names.pool().len());

		Ok(Self { scripts, names })
	}

	/// Create tables from an already built resolver and name table.
	pub fn new(scripts: ScriptResolver, names: NameTable) -> Self {
		Self { scripts, names }
	}

	/// Get the tables built from the Unicode 14.0 database files shipped with the crate, these are built on first use.
	///
	/// # Panics
	///
	/// Panics if the shipped data is corrupt.
	pub fn builtin() -> &'static UnicodeTables {
		&BUILTIN
	}

	pub fn scripts(&self) -> &ScriptResolver {
		&self.scripts
	}

	pub fn names(&self) -> &NameTable {
		&self.names
	}
}
