use super::error::AseError;
use super::layout;
use crate::formats::common::SwatchCursor;

pub struct AseReader<'a> {
    cursor: SwatchCursor<'a>,
}

impl<'a> AseReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: SwatchCursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn read_signature(&mut self) -> Result<[u8; 4], AseError> {
        Ok(self.cursor.read_tag()?)
    }

    /// Returns `(major, minor, num_blocks)`.
    pub fn read_header_fields(&mut self) -> Result<(u16, u16, u32), AseError> {
        let major = self.cursor.read_u16_be()?;
        let minor = self.cursor.read_u16_be()?;
        let num_blocks = self.cursor.read_u32_be()?;
        Ok((major, minor, num_blocks))
    }

    /// Returns `(block_type, block_size)`.
    pub fn read_block_header(&mut self) -> Result<(u16, u32), AseError> {
        let block_type = self.cursor.read_u16_be()?;
        let block_size = self.cursor.read_u32_be()?;
        Ok((block_type, block_size))
    }

    pub fn read_name(&mut self) -> Result<String, AseError> {
        let units = self.cursor.read_u16_be()?;
        Ok(self.cursor.read_utf16_be(units)?)
    }

    pub fn read_mode_tag(&mut self) -> Result<[u8; layout::MODE_TAG_LEN], AseError> {
        Ok(self.cursor.read_tag()?)
    }

    pub fn read_floats<const N: usize>(&mut self) -> Result<[f32; N], AseError> {
        let mut values = [0f32; N];
        for value in &mut values {
            *value = self.cursor.read_f32_be()?;
        }
        Ok(values)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), AseError> {
        self.cursor.skip(len)?;
        Ok(())
    }

    pub fn skip_color_type(&mut self) -> Result<(), AseError> {
        self.skip(layout::COLOR_TYPE_LEN)
    }
}

/// Mode tag as text, trimmed of space and NUL padding.
pub fn mode_tag_text(tag: &[u8; layout::MODE_TAG_LEN]) -> String {
    String::from_utf8_lossy(tag)
        .trim_matches(|c: char| c == ' ' || c == '\0')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{AseReader, mode_tag_text};

    #[test]
    fn mode_tag_is_trimmed() {
        assert_eq!(mode_tag_text(b"RGB "), "RGB");
        assert_eq!(mode_tag_text(b"LAB\0"), "LAB");
        assert_eq!(mode_tag_text(b"CMYK"), "CMYK");
    }

    #[test]
    fn read_block_header_big_endian() {
        let data = [0x00, 0x01, 0x00, 0x00, 0x00, 0x22];
        let mut reader = AseReader::new(&data);
        assert_eq!(reader.read_block_header().unwrap(), (0x0001, 0x22));
        assert_eq!(reader.position(), 6);
    }

    #[test]
    fn read_floats_reads_in_order() {
        let mut data = Vec::new();
        for value in [0.25f32, 0.5, 1.0] {
            data.extend_from_slice(&value.to_be_bytes());
        }
        let mut reader = AseReader::new(&data);
        assert_eq!(reader.read_floats::<3>().unwrap(), [0.25, 0.5, 1.0]);
    }
}
