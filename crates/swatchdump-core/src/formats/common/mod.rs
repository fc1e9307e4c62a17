pub(crate) mod color;
pub(crate) mod cursor;

pub(crate) use cursor::{CursorError, SwatchCursor};
