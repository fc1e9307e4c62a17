//! Adobe Swatch Exchange (ASE) decoding.
//!
//! An ASE file is an `ASEF` signature, a version pair and a block count,
//! followed by type/length-prefixed blocks. Only color-entry blocks are
//! decoded; group markers and unknown block types are skipped by their
//! declared length. Inside a color entry the 4-byte mode tag selects how
//! many big-endian floats follow; unknown modes are skipped up to the
//! block boundary so the next block is read from the right offset.
//!
//! Version française (résumé):
//! Le module lit les blocs ASE (signature, version, nombre de blocs) et ne
//! décode que les entrées couleur RGB, CMYK et LAB ; les autres blocs et
//! modes sont sautés selon leur longueur déclarée.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{AseColor, AseColorEntry, AseDocument, BlockType, ColorMode, parse_ase};
