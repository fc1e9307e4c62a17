use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::formats::aco::error::AcoError;
use crate::formats::aco::parse_aco;
use crate::formats::ase::error::AseError;
use crate::formats::ase::parse_ase;
use crate::{Palette, Report, SourceFormat, make_report};

mod aco;
mod ase;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Aco(#[from] AcoError),
    #[error(transparent)]
    Ase(#[from] AseError),
}

/// Coarse failure class of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ended before a required field.
    TruncatedInput,
    /// The buffer is not a valid instance of the format.
    InvalidFormat,
    Io,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Io(_) => ErrorKind::Io,
            DecodeError::Aco(AcoError::TruncatedInput { .. })
            | DecodeError::Ase(AseError::TruncatedInput { .. }) => ErrorKind::TruncatedInput,
            DecodeError::Ase(AseError::InvalidSignature { .. })
            | DecodeError::Ase(AseError::InvalidBlockSize { .. }) => ErrorKind::InvalidFormat,
        }
    }
}

/// Decode an in-memory buffer as the given format.
///
/// Either every record is returned or the first fatal error is.
///
/// # Examples
/// ```
/// use swatchdump_core::{ColorValue, SourceFormat, decode_bytes};
///
/// let data = [
///     0x00, 0x01, 0x00, 0x01, // version 1, one color
///     0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00,
/// ];
/// let palette = decode_bytes(SourceFormat::Aco, &data)?;
/// assert_eq!(palette.records[0].color, ColorValue::Rgb { r: 255, g: 0, b: 128 });
/// assert_eq!(palette.bytes_read, data.len());
/// # Ok::<(), swatchdump_core::DecodeError>(())
/// ```
pub fn decode_bytes(format: SourceFormat, data: &[u8]) -> Result<Palette, DecodeError> {
    match format {
        SourceFormat::Aco => Ok(aco::palette_from_aco(parse_aco(data)?)),
        SourceFormat::Ase => Ok(ase::palette_from_ase(parse_ase(data)?)),
    }
}

/// Read and decode a swatch file. The format comes from the extension when
/// it is `.aco` or `.ase`, otherwise from the content.
pub fn decode_swatch_file(path: &Path) -> Result<Report, DecodeError> {
    let data = fs::read(path)?;
    let format = SourceFormat::from_extension(path).unwrap_or_else(|| SourceFormat::sniff(&data));
    let palette = decode_bytes(format, &data)?;
    Ok(make_report(
        &path.display().to_string(),
        data.len() as u64,
        palette,
    ))
}
