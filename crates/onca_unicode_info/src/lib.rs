//! Libary to retrieve the script and name of unicode characters
//!
//! Scripts are decoded from a packed script field, with script extensions stored in a shared table of sorted sets.
//! Names are either generated algorithmically or stored in groups of 32 codepoints, and can be enumerated in codepoint order.
//!
//! Official info:
//! https://www.unicode.org/reports/tr24/
//! https://www.unicode.org/reports/tr44/

use onca_logging::LogCategory;

pub use onca_base::{EnumCountT, EnumFromIndexT, EnumFromNameT, EnumNameT};

mod error;
pub use error::*;

mod index;

mod script;
pub use script::*;

mod script_ext;
pub use script_ext::*;

mod props;
pub use props::*;

pub mod names;
pub use names::{
	AlgorithmicNameKind, AlgorithmicNameRange, CodePointKind, NameChoice, NameEnumerator, NameGroup, NameTable,
	DEFAULT_ALGORITHMIC_RANGES, GROUP_SHIFT, LINES_PER_GROUP,
};

mod builder;
pub use builder::*;

pub mod ucd;
pub use ucd::UcdSources;

mod tables;
pub use tables::*;

/// Smallest valid codepoint
pub const MIN_CODE_POINT: u32 = 0;
/// Largest valid codepoint
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

pub(crate) const LOG_CAT_SCRIPTS: LogCategory = LogCategory::new_with_sub("Unicode", "Scripts");
pub(crate) const LOG_CAT_NAMES: LogCategory = LogCategory::new_with_sub("Unicode", "Names");
pub(crate) const LOG_CAT_UCD: LogCategory = LogCategory::new_with_sub("Unicode", "Ucd");

//==============================================================
// Direct getters
//==============================================================

/// Get the script of a codepoint.
///
/// Codepoints shared between scripts return `Common` or `Inherited`, their scripts can be found using [`get_script_extensions`].
pub fn get_script(codepoint: u32) -> Result<Script> {
	UnicodeTables::builtin().scripts().get_script(codepoint)
}

/// Get the script code of a codepoint.
pub fn get_script_code(codepoint: u32) -> Result<u32> {
	UnicodeTables::builtin().scripts().get_script_code(codepoint)
}

/// Check if a codepoint is used with the script, `false` for invalid codepoints.
pub fn has_script(codepoint: u32, script: Script) -> bool {
	UnicodeTables::builtin().scripts().has_script(codepoint, script)
}

/// Check if a codepoint is used with the script code, `false` for invalid codepoints and script codes.
pub fn has_script_code(codepoint: u32, code: u32) -> bool {
	UnicodeTables::builtin().scripts().has_script_code(codepoint, code)
}

/// Get the script extensions of a codepoint.
pub fn get_script_extensions(codepoint: u32) -> Result<ScriptExtensions> {
	UnicodeTables::builtin().scripts().get_script_extensions(codepoint)
}

/// Get the name of a codepoint, or `None` if it has no name for the given choice.
pub fn get_name(codepoint: u32, choice: NameChoice) -> Option<String> {
	UnicodeTables::builtin().names().get_name(codepoint, choice)
}

/// Get the codepoint with a given name, ignoring ascii case.
pub fn get_codepoint(name: &str, choice: NameChoice) -> Option<u32> {
	UnicodeTables::builtin().names().get_codepoint(name, choice)
}

/// Create an enumerator over the names of all codepoints.
pub fn name_enumerator(choice: NameChoice) -> NameEnumerator<'static> {
	UnicodeTables::builtin().names().enumerator(choice)
}

#[cfg(test)]
mod tests;
