//! Library defining cross library utilities that can be implemented using `#![no_std]`
#![cfg_attr(not(test), no_std)]

mod macro_traits;
pub use macro_traits::*;

mod helper_macros;
