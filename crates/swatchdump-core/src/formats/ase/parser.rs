use super::error::AseError;
use super::layout;
use super::reader::{AseReader, mode_tag_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    ColorEntry,
    GroupStart,
    GroupEnd,
    Other(u16),
}

impl BlockType {
    pub fn from_code(code: u16) -> Self {
        match code {
            layout::BLOCK_COLOR_ENTRY => BlockType::ColorEntry,
            layout::BLOCK_GROUP_START => BlockType::GroupStart,
            layout::BLOCK_GROUP_END => BlockType::GroupEnd,
            other => BlockType::Other(other),
        }
    }
}

/// Color model tag of a color entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Cmyk,
    Lab,
    /// Trimmed tag text of a mode this decoder does not render.
    Other(String),
}

impl ColorMode {
    pub fn from_tag(tag: &[u8; layout::MODE_TAG_LEN]) -> Self {
        let text = mode_tag_text(tag);
        match text.as_str() {
            layout::MODE_RGB => ColorMode::Rgb,
            layout::MODE_CMYK => ColorMode::Cmyk,
            layout::MODE_LAB => ColorMode::Lab,
            _ => ColorMode::Other(text),
        }
    }
}

/// Raw channel floats of a color entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AseColor {
    Rgb([f32; 3]),
    Cmyk([f32; 4]),
    Lab([f32; 3]),
    Unsupported { mode: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AseColorEntry {
    /// Index of the block in the file's block sequence.
    pub block_index: u32,
    /// Byte offset of the block header.
    pub offset: usize,
    pub name: String,
    pub color: AseColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AseDocument {
    pub major: u16,
    pub minor: u16,
    pub num_blocks: u32,
    pub entries: Vec<AseColorEntry>,
    /// Non-color blocks skipped by declared length.
    pub skipped_blocks: u32,
    /// Final cursor position.
    pub bytes_read: usize,
}

pub fn parse_ase(data: &[u8]) -> Result<AseDocument, AseError> {
    let mut reader = AseReader::new(data);
    let signature = reader.read_signature()?;
    if &signature != layout::SIGNATURE {
        return Err(AseError::InvalidSignature { found: signature });
    }
    let (major, minor, num_blocks) = reader.read_header_fields()?;

    let mut entries = Vec::new();
    let mut skipped_blocks = 0u32;
    for block_index in 0..num_blocks {
        let offset = reader.position();
        let (code, size) = reader.read_block_header()?;
        match BlockType::from_code(code) {
            BlockType::ColorEntry => {
                let (name, color) = parse_color_body(&mut reader, offset, size)?;
                entries.push(AseColorEntry {
                    block_index,
                    offset,
                    name,
                    color,
                });
            }
            BlockType::GroupStart | BlockType::GroupEnd | BlockType::Other(_) => {
                reader.skip(size as usize)?;
                skipped_blocks += 1;
            }
        }
    }

    Ok(AseDocument {
        major,
        minor,
        num_blocks,
        entries,
        skipped_blocks,
        bytes_read: reader.position(),
    })
}

fn parse_color_body(
    reader: &mut AseReader<'_>,
    offset: usize,
    size: u32,
) -> Result<(String, AseColor), AseError> {
    let body_start = reader.position();
    let body_len = size as usize;
    let name = reader.read_name()?;
    let tag = reader.read_mode_tag()?;

    let color = match ColorMode::from_tag(&tag) {
        ColorMode::Rgb => AseColor::Rgb(reader.read_floats()?),
        ColorMode::Cmyk => AseColor::Cmyk(reader.read_floats()?),
        ColorMode::Lab => AseColor::Lab(reader.read_floats()?),
        ColorMode::Other(mode) => {
            let consumed = reader.position() - body_start;
            let rest = body_len
                .checked_sub(consumed + layout::COLOR_TYPE_LEN)
                .ok_or(AseError::InvalidBlockSize {
                    offset,
                    size,
                    consumed,
                })?;
            reader.skip(rest)?;
            AseColor::Unsupported { mode }
        }
    };
    reader.skip_color_type()?;

    let consumed = reader.position() - body_start;
    if let Some(padding) = body_len.checked_sub(consumed).filter(|len| *len > 0) {
        reader.skip(padding)?;
    }
    Ok((name, color))
}
