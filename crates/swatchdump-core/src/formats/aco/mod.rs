//! Adobe Color Swatch (ACO) decoding.
//!
//! An ACO file is a version/count header followed by fixed-size color
//! entries. Version 2 files append a name table with one length-prefixed
//! UTF-16BE name per declared entry. The parser reserves one slot per
//! declared entry and attaches each name to its own slot, so entries in
//! color spaces the decoder does not render never shift names onto other
//! colors.
//!
//! Only the header count bounds the entry loop; the version field is not
//! validated, but the name table is read only when it equals 2.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{AcoEntry, AcoHeader, AcoPalette, ColorSpace, parse_aco};
