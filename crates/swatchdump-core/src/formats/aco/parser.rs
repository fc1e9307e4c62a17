use super::error::AcoError;
use super::layout;
use super::reader::AcoReader;

/// ACO color space tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Cmyk,
    Lab,
    Grayscale,
    Other(u16),
}

impl ColorSpace {
    pub fn from_code(code: u16) -> Self {
        match code {
            layout::COLOR_SPACE_RGB => ColorSpace::Rgb,
            layout::COLOR_SPACE_HSB => ColorSpace::Hsb,
            layout::COLOR_SPACE_CMYK => ColorSpace::Cmyk,
            layout::COLOR_SPACE_LAB => ColorSpace::Lab,
            layout::COLOR_SPACE_GRAYSCALE => ColorSpace::Grayscale,
            other => ColorSpace::Other(other),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            ColorSpace::Rgb => layout::COLOR_SPACE_RGB,
            ColorSpace::Hsb => layout::COLOR_SPACE_HSB,
            ColorSpace::Cmyk => layout::COLOR_SPACE_CMYK,
            ColorSpace::Lab => layout::COLOR_SPACE_LAB,
            ColorSpace::Grayscale => layout::COLOR_SPACE_GRAYSCALE,
            ColorSpace::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcoHeader {
    pub version: u16,
    pub num_colors: u16,
}

impl AcoHeader {
    pub fn has_names(&self) -> bool {
        self.version == layout::VERSION_NAMED
    }
}

/// One declared entry, kept whatever its color space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcoEntry {
    /// Position in the declared color sequence.
    pub index: usize,
    /// Byte offset of the entry's color space field.
    pub offset: usize,
    pub color_space: ColorSpace,
    pub values: [u16; layout::VALUES_PER_ENTRY],
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcoPalette {
    pub header: AcoHeader,
    pub entries: Vec<AcoEntry>,
    /// Final cursor position.
    pub bytes_read: usize,
}

pub fn parse_aco(data: &[u8]) -> Result<AcoPalette, AcoError> {
    let mut reader = AcoReader::new(data);
    let (version, num_colors) = reader.read_header()?;
    let header = AcoHeader {
        version,
        num_colors,
    };

    let mut entries = Vec::with_capacity(usize::from(num_colors));
    for index in 0..usize::from(num_colors) {
        let offset = reader.position();
        let (code, values) = reader.read_color()?;
        entries.push(AcoEntry {
            index,
            offset,
            color_space: ColorSpace::from_code(code),
            values,
            name: None,
        });
    }

    if header.has_names() {
        reader.skip_name_table_header()?;
        for entry in &mut entries {
            entry.name = reader.read_name()?;
        }
    }

    Ok(AcoPalette {
        header,
        entries,
        bytes_read: reader.position(),
    })
}
