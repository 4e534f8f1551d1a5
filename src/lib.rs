//! Onca unicode: script and character name lookups backed by compact tables.
//!
//! ```
//! use onca_unicode::{get_name, get_script, NameChoice, Script};
//!
//! assert_eq!(get_script(0x41), Ok(Script::Latin));
//! assert_eq!(get_name(0xAC00, NameChoice::Modern).as_deref(), Some("HANGUL SYLLABLE GA"));
//! ```
//!
//! Table loading and range coercion are reported through the global logger in [`logging`].

pub use onca_unicode_info::*;

pub use onca_logging as logging;
