//! Swatch format decoding modules.
//!
//! Each format follows a layered structure:
//! - `layout`: tags, codes and fixed field widths (source of truth)
//! - `reader`: format conventions on top of the shared byte cursor
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; the `decode` layer handles file
//! access and turns parsed entries into color records.

pub mod aco;
pub mod ase;
pub(crate) mod common;
