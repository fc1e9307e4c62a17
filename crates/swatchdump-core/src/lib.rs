//! swatchdump core library for decoding Adobe color swatch files.
//!
//! This crate implements the decode pipeline used by the CLI: a file is read
//! into memory once, a format parser (layout/reader/parser) walks it with a
//! forward-only big-endian cursor, and the decode layer turns parsed entries
//! into normalized color records plus diagnostics for entries it skipped.
//! Parsing is byte-oriented and side-effect free; file access lives in
//! `decode`, and CSV/JSON writing is left to callers.
//!
//! Supported inputs:
//! - ACO (Adobe Color Swatch) versions 1 and 2, RGB entries.
//! - ASE (Adobe Swatch Exchange), RGB / CMYK / LAB color entries.
//!
//! Invariants:
//! - Records appear in file order and are never mutated after decode.
//! - Truncated input is fatal and yields no records.
//! - Unsupported color spaces or modes are consumed in full and reported in
//!   `skipped`, never as errors.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use swatchdump_core::decode_swatch_file;
//!
//! let report = decode_swatch_file(Path::new("palette.ase"))?;
//! println!("{} colors", report.records.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

mod decode;
pub mod formats;
mod rows;

pub use decode::{DecodeError, ErrorKind, decode_bytes, decode_swatch_file};
pub use rows::{COLUMNS, ColorRow, NOT_APPLICABLE, to_rows};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Swatch container format.
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// use swatchdump_core::SourceFormat;
///
/// assert_eq!(
///     SourceFormat::from_extension(Path::new("colors.ASE")),
///     Some(SourceFormat::Ase)
/// );
/// assert_eq!(SourceFormat::sniff(b"ASEF\x00\x01"), SourceFormat::Ase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Aco,
    Ase,
}

impl SourceFormat {
    /// Detect the format from a case-insensitive `.aco` / `.ase` extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "aco" => Some(SourceFormat::Aco),
            "ase" => Some(SourceFormat::Ase),
            _ => None,
        }
    }

    /// Detect the format from content. ACO has no signature, so anything
    /// not starting with `ASEF` is treated as ACO.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(formats::ase::layout::SIGNATURE) {
            SourceFormat::Ase
        } else {
            SourceFormat::Aco
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Aco => "ACO",
            SourceFormat::Ase => "ASE",
        }
    }
}

/// File format version as declared in the header (ACO has no minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatVersion {
    pub major: u16,
    pub minor: u16,
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Decoded channel values; each variant carries only its own model's fields.
///
/// # Examples
/// ```
/// use swatchdump_core::ColorValue;
///
/// let color = ColorValue::Rgb { r: 255, g: 0, b: 128 };
/// assert_eq!(color.hex().as_deref(), Some("#FF0080"));
/// assert_eq!(color.rvb().as_deref(), Some("255-000-128"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ColorValue {
    /// 8-bit channels.
    Rgb { r: u8, g: u8, b: u8 },
    /// Percentages with one decimal.
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
    /// L in `[0, 100]`; a/b unscaled, one decimal.
    Lab { l: f64, a: f64, b: f64 },
}

impl ColorValue {
    pub fn model(&self) -> &'static str {
        match self {
            ColorValue::Rgb { .. } => "RGB",
            ColorValue::Cmyk { .. } => "CMYK",
            ColorValue::Lab { .. } => "LAB",
        }
    }

    /// `#RRGGBB` for RGB colors.
    pub fn hex(&self) -> Option<String> {
        match self {
            ColorValue::Rgb { r, g, b } => Some(format!("#{r:02X}{g:02X}{b:02X}")),
            ColorValue::Cmyk { .. } | ColorValue::Lab { .. } => None,
        }
    }

    /// Zero-padded `RRR-GGG-BBB` for RGB colors.
    pub fn rvb(&self) -> Option<String> {
        match self {
            ColorValue::Rgb { r, g, b } => Some(format!("{r:03}-{g:03}-{b:03}")),
            ColorValue::Cmyk { .. } | ColorValue::Lab { .. } => None,
        }
    }
}

/// One decoded swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Swatch name, absent when the file carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source_format: SourceFormat,
    pub color: ColorValue,
}

/// Why an entry produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    UnsupportedColorSpace { code: u16 },
    UnsupportedColorMode { mode: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedColorSpace { code } => {
                write!(f, "unsupported color space {code}")
            }
            SkipReason::UnsupportedColorMode { mode } => {
                write!(f, "unsupported color mode '{mode}'")
            }
        }
    }
}

/// Entry that was consumed but not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// Entry index (ACO) or block index (ASE).
    pub index: usize,
    /// Byte offset of the entry.
    pub offset: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reason: SkipReason,
}

/// Result of decoding one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub format: SourceFormat,
    pub version: FormatVersion,
    /// ACO color count or ASE block count from the header.
    pub declared_entries: u32,
    /// ASE group and unknown blocks skipped by declared length.
    pub non_color_blocks: u32,
    pub records: Vec<ColorRecord>,
    pub skipped: Vec<SkippedEntry>,
    /// Final cursor position; equals the input length for well-formed files.
    pub bytes_read: usize,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "swatchdump").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Decoded swatch file with provenance, in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub format: SourceFormat,
    pub format_version: FormatVersion,
    /// ACO color count or ASE block count from the header.
    pub declared_entries: u32,
    /// ASE group and unknown blocks; always 0 for ACO.
    pub non_color_blocks: u32,
    pub records: Vec<ColorRecord>,
    /// Entries that were consumed but not rendered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

/// Wrap a decoded palette with tool and input metadata.
///
/// # Examples
/// ```
/// use swatchdump_core::{SourceFormat, decode_bytes, make_report};
///
/// let palette = decode_bytes(SourceFormat::Aco, &[0, 1, 0, 0])?;
/// let report = make_report("empty.aco", 4, palette);
/// assert_eq!(report.report_version, swatchdump_core::REPORT_VERSION);
/// assert!(report.records.is_empty());
/// # Ok::<(), swatchdump_core::DecodeError>(())
/// ```
pub fn make_report(input_path: &str, input_bytes: u64, palette: Palette) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "swatchdump".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        format: palette.format,
        format_version: palette.version,
        declared_entries: palette.declared_entries,
        non_color_blocks: palette.non_color_blocks,
        records: palette.records,
        skipped: palette.skipped,
    }
}
