/// The size of each character of the built-in font in bytes.
pub(crate) const CHAR_SIZE: usize = 5;
/// The number of characters in the built-in font (hex digits 0 to F).
pub(crate) const CHAR_COUNT: usize = 16;
/// The sprites of the built-in hexadecimal font, where each character is one byte wide
/// and `CHAR_SIZE` bytes tall.  Each bit represents one pixel in the sprite.
const FONT_DATA: [u8; CHAR_SIZE * CHAR_COUNT] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// The built-in font, prior to loading to memory.
pub(crate) struct Font;

impl Font {
    /// Returns the font sprite data.
    pub(crate) fn font_data() -> &'static [u8] {
        &FONT_DATA
    }

    /// Returns the offset of the glyph for the low nibble of `character` from the start of
    /// the font data.
    ///
    /// # Arguments
    ///
    /// * `character` - the value whose low nibble selects the glyph
    pub(crate) fn glyph_offset(character: u8) -> usize {
        ((character & 0x0F) as usize) * CHAR_SIZE
    }
}
