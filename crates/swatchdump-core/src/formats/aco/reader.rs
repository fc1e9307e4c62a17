use super::error::AcoError;
use super::layout;
use crate::formats::common::SwatchCursor;

pub struct AcoReader<'a> {
    cursor: SwatchCursor<'a>,
}

impl<'a> AcoReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: SwatchCursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns `(version, num_colors)`.
    pub fn read_header(&mut self) -> Result<(u16, u16), AcoError> {
        let version = self.cursor.read_u16_be()?;
        let num_colors = self.cursor.read_u16_be()?;
        Ok((version, num_colors))
    }

    /// Returns the color space code and the four raw channel words.
    pub fn read_color(&mut self) -> Result<(u16, [u16; layout::VALUES_PER_ENTRY]), AcoError> {
        let color_space = self.cursor.read_u16_be()?;
        let mut values = [0u16; layout::VALUES_PER_ENTRY];
        for value in &mut values {
            *value = self.cursor.read_u16_be()?;
        }
        Ok((color_space, values))
    }

    pub fn skip_name_table_header(&mut self) -> Result<(), AcoError> {
        self.cursor.skip(layout::NAME_TABLE_HEADER_LEN)?;
        Ok(())
    }

    /// Read one name record; the terminator is consumed even for empty names.
    pub fn read_name(&mut self) -> Result<Option<String>, AcoError> {
        let units = self.cursor.read_u16_be()?;
        let name = if units > 0 {
            Some(self.cursor.read_utf16_be(units)?)
        } else {
            None
        };
        self.cursor.skip(layout::NAME_TERMINATOR_LEN)?;
        Ok(name.filter(|name| !name.is_empty()))
    }
}
