use thiserror::Error;

use crate::formats::common::CursorError;

/// Errors returned by ASE parsing.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use swatchdump_core::formats::ase::error::AseError;
///
/// let err = AseError::InvalidSignature { found: *b"RIFF" };
/// assert!(err.to_string().contains("invalid ASE signature"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AseError {
    #[error("ASE truncated at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("invalid ASE signature: {}", String::from_utf8_lossy(.found))]
    InvalidSignature { found: [u8; 4] },
    #[error("invalid block size {size} at offset {offset}: {consumed} bytes already read")]
    InvalidBlockSize {
        offset: usize,
        size: u32,
        consumed: usize,
    },
}

impl From<CursorError> for AseError {
    fn from(value: CursorError) -> Self {
        match value {
            CursorError::TooShort {
                offset,
                needed,
                available,
            } => AseError::TruncatedInput {
                offset,
                needed,
                available,
            },
        }
    }
}
