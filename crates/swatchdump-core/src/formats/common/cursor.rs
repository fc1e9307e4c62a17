use thiserror::Error;

/// Read failures of [`SwatchCursor`].
///
/// Every variant is fatal for the decode that hit it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("truncated input at offset {offset}: need {needed} bytes, {available} available")]
    TooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Sequential big-endian reader over an in-memory buffer.
///
/// Reads only move forward; skipping is an explicit `skip`/`read_bytes`.
pub struct SwatchCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SwatchCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CursorError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(CursorError::TooShort {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), CursorError> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u16_be(&mut self) -> Result<u16, CursorError> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub fn read_u32_be(&mut self) -> Result<u32, CursorError> {
        self.read_array().map(u32::from_be_bytes)
    }

    pub fn read_f32_be(&mut self) -> Result<f32, CursorError> {
        self.read_array().map(f32::from_be_bytes)
    }

    /// Read `units` UTF-16BE code units as a display name.
    ///
    /// Trailing NULs are stripped and remaining control characters dropped;
    /// unpaired surrogates decode to U+FFFD.
    pub fn read_utf16_be(&mut self, units: u16) -> Result<String, CursorError> {
        let bytes = self.read_bytes(usize::from(units) * 2)?;
        let code_units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let raw = String::from_utf16_lossy(&code_units);
        Ok(raw
            .trim_end_matches('\0')
            .chars()
            .filter(|c| !c.is_control())
            .collect())
    }

    /// Read a 4-byte ASCII tag, keeping the raw bytes for diagnostics.
    pub fn read_tag(&mut self) -> Result<[u8; 4], CursorError> {
        self.read_array()
    }
}
