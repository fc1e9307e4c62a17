pub const VERSION_NAMED: u16 = 2;

pub const HEADER_LEN: usize = 4;
pub const VALUES_PER_ENTRY: usize = 4;
pub const ENTRY_LEN: usize = 2 + VALUES_PER_ENTRY * 2;

/// Sub-header preceding the version 2 name table.
pub const NAME_TABLE_HEADER_LEN: usize = 4;
/// Trailing field after each name record.
pub const NAME_TERMINATOR_LEN: usize = 2;

pub const COLOR_SPACE_RGB: u16 = 0;
pub const COLOR_SPACE_HSB: u16 = 1;
pub const COLOR_SPACE_CMYK: u16 = 2;
pub const COLOR_SPACE_LAB: u16 = 7;
pub const COLOR_SPACE_GRAYSCALE: u16 = 8;
