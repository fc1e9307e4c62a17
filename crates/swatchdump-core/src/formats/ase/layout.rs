pub const SIGNATURE: &[u8; 4] = b"ASEF";

pub const BLOCK_COLOR_ENTRY: u16 = 0x0001;
pub const BLOCK_GROUP_START: u16 = 0xC001;
pub const BLOCK_GROUP_END: u16 = 0xC002;

pub const MODE_TAG_LEN: usize = 4;
/// Color type marker closing every color entry.
pub const COLOR_TYPE_LEN: usize = 2;

pub const MODE_RGB: &str = "RGB";
pub const MODE_CMYK: &str = "CMYK";
pub const MODE_LAB: &str = "LAB";
