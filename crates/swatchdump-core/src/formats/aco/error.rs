use thiserror::Error;

use crate::formats::common::CursorError;

/// Errors returned by ACO parsing.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use swatchdump_core::formats::aco::error::AcoError;
///
/// let err = AcoError::TruncatedInput { offset: 4, needed: 2, available: 0 };
/// assert!(err.to_string().contains("truncated"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcoError {
    #[error("ACO truncated at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl From<CursorError> for AcoError {
    fn from(value: CursorError) -> Self {
        match value {
            CursorError::TooShort {
                offset,
                needed,
                available,
            } => AcoError::TruncatedInput {
                offset,
                needed,
                available,
            },
        }
    }
}
