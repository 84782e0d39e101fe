use crate::options::SpriteEdge;
use std::ops::{Index, IndexMut};

/// The display width in pixels.
pub const DISPLAY_WIDTH_PIXELS: usize = 64;
/// The display height in pixels.
pub const DISPLAY_HEIGHT_PIXELS: usize = 32;
/// The word stored for a pixel that is on.
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;
/// The word stored for a pixel that is off.
pub const PIXEL_OFF: u32 = 0x0000_0000;

/// An abstraction of the CHIP-8 frame buffer.
///
/// This is only written to from within the crate (by the clear and draw instructions), but is
/// exposed publicly for read access by hosting applications so the display can be rendered,
/// either through [Processor::frame_buffer()](crate::Processor::frame_buffer) or a
/// [StateSnapshot](crate::StateSnapshot).
#[derive(Clone, Debug, PartialEq)]
pub struct Display {
    /// One machine word per pixel, row-major, [PIXEL_ON] or [PIXEL_OFF].  The [Index] trait is
    /// implemented so a pixel can be read as `display[row][column]`, where (0, 0) is the top-left
    /// of the display with positive coordinates extending right and down.
    pixels: Box<[u32]>,
}

// Allow the 1D pixel array to be indexed as a 2D array
impl Index<usize> for Display {
    type Output = [u32];

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index * DISPLAY_WIDTH_PIXELS..(index + 1) * DISPLAY_WIDTH_PIXELS]
    }
}

// Allow the 1D pixel array to be indexed as a 2D array mutably
impl IndexMut<usize> for Display {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.pixels[index * DISPLAY_WIDTH_PIXELS..(index + 1) * DISPLAY_WIDTH_PIXELS]
    }
}

impl Display {
    /// Constructor that returns a [Display] instance with all pixels set to off.
    pub(crate) fn new() -> Self {
        Self {
            pixels: vec![PIXEL_OFF; DISPLAY_WIDTH_PIXELS * DISPLAY_HEIGHT_PIXELS]
                .into_boxed_slice(),
        }
    }

    /// Returns the whole frame buffer as a row-major slice of pixel words
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns true if the pixel at the specified coordinate is on.  Coordinates outside the
    /// display are reported as off.
    pub fn is_pixel_on(&self, column: usize, row: usize) -> bool {
        column < DISPLAY_WIDTH_PIXELS
            && row < DISPLAY_HEIGHT_PIXELS
            && self[row][column] != PIXEL_OFF
    }

    /// Clears the display by setting every pixel to off.
    pub(crate) fn clear(&mut self) {
        self.pixels.fill(PIXEL_OFF);
    }

    /// XORs a sprite onto the display.  Returns true if any pixel that was on before the draw
    /// has been turned off by it (a collision).
    ///
    /// The starting coordinate is always wrapped onto the display; pixels of the sprite that
    /// then extend past the right or bottom edge are clipped or wrapped as per `edge`.
    ///
    /// # Arguments
    ///
    /// * `x_start_pixel` - the zero-based x coordinate of the sprite's top-left pixel
    /// * `y_start_pixel` - the zero-based y coordinate of the sprite's top-left pixel
    /// * `sprite` - an array slice holding the sprite rows, one byte (8 pixels) per row
    /// * `edge` - the policy for pixels falling beyond the display edges
    pub(crate) fn draw_sprite(
        &mut self,
        x_start_pixel: usize,
        y_start_pixel: usize,
        sprite: &[u8],
        edge: SpriteEdge,
    ) -> bool {
        let x_start: usize = x_start_pixel % DISPLAY_WIDTH_PIXELS;
        let y_start: usize = y_start_pixel % DISPLAY_HEIGHT_PIXELS;
        let mut any_pixel_turned_off: bool = false;
        for (j, &sprite_row) in sprite.iter().enumerate() {
            let row: usize = match (edge, y_start + j) {
                (SpriteEdge::Clip, y) if y >= DISPLAY_HEIGHT_PIXELS => break,
                (_, y) => y % DISPLAY_HEIGHT_PIXELS,
            };
            for i in 0..8 {
                // Most significant bit is the leftmost pixel
                if sprite_row & (0x80_u8 >> i) == 0 {
                    continue;
                }
                let column: usize = match (edge, x_start + i) {
                    (SpriteEdge::Clip, x) if x >= DISPLAY_WIDTH_PIXELS => break,
                    (_, x) => x % DISPLAY_WIDTH_PIXELS,
                };
                let pixel: &mut u32 = &mut self[row][column];
                if *pixel != PIXEL_OFF {
                    any_pixel_turned_off = true;
                }
                *pixel ^= PIXEL_ON;
            }
        }
        any_pixel_turned_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Reads a display row back as a byte, 8 pixels starting at the given column
    fn row_byte(display: &Display, row: usize, column: usize) -> u8 {
        (0..8).fold(0u8, |acc, i| {
            (acc << 1) | display.is_pixel_on(column + i, row) as u8
        })
    }

    fn setup_test_display() -> Display {
        let mut display: Display = Display::new();
        // Setup test display as follows:
        // 00001111   (i.e. 0F in hex)
        // 11110000   (i.e. F0 in hex)
        display.draw_sprite(0, 0, &[0x0F, 0xF0], SpriteEdge::Clip);
        display
    }

    fn setup_test_sprite() -> [u8; 2] {
        // Setup test sprite as follows:
        // 10110110   (i.e. B6 in hex)
        // 11100011   (i.e. E3 in hex)
        [0xB6, 0xE3]
    }

    #[test]
    fn test_new_display_is_off() {
        let display: Display = Display::new();
        assert!(display.pixels().iter().all(|p| *p == PIXEL_OFF));
        assert_eq!(display.pixels().len(), 64 * 32);
    }

    #[test]
    fn test_draw_sprite_aligned() {
        let mut display: Display = setup_test_display();
        let collision: bool = display.draw_sprite(0, 0, &setup_test_sprite(), SpriteEdge::Clip);
        // Result should be:
        // 10111001   (i.e. B9 in hex)
        // 00010011   (i.e. 13 in hex)
        assert!(collision);
        assert_eq!(row_byte(&display, 0, 0), 0xB9);
        assert_eq!(row_byte(&display, 1, 0), 0x13);
    }

    #[test]
    fn test_draw_sprite_unaligned() {
        let mut display: Display = setup_test_display();
        let collision: bool = display.draw_sprite(3, 0, &setup_test_sprite(), SpriteEdge::Clip);
        // Result should be:
        // 00011001 11000000   (i.e. 19 C0 in hex)
        // 11101100 01100000   (i.e. EC 60 in hex)
        assert!(collision);
        assert_eq!(row_byte(&display, 0, 0), 0x19);
        assert_eq!(row_byte(&display, 0, 8), 0xC0);
        assert_eq!(row_byte(&display, 1, 0), 0xEC);
        assert_eq!(row_byte(&display, 1, 8), 0x60);
    }

    #[test]
    fn test_draw_sprite_no_collision() {
        let mut display: Display = setup_test_display();
        let collision: bool = display.draw_sprite(16, 4, &setup_test_sprite(), SpriteEdge::Clip);
        assert!(!collision);
        assert_eq!(row_byte(&display, 4, 16), 0xB6);
        assert_eq!(row_byte(&display, 5, 16), 0xE3);
    }

    #[test]
    fn test_draw_sprite_start_coordinates_wrap() {
        let mut display: Display = Display::new();
        display.draw_sprite(64 + 8, 32 + 2, &[0xFF], SpriteEdge::Clip);
        assert_eq!(row_byte(&display, 2, 8), 0xFF);
    }

    #[test]
    fn test_draw_sprite_clipped_right() {
        let mut display: Display = Display::new();
        display.draw_sprite(60, 0, &[0xFF], SpriteEdge::Clip);
        assert!((60..64).all(|x| display.is_pixel_on(x, 0)));
        assert!((0..4).all(|x| !display.is_pixel_on(x, 0)));
    }

    #[test]
    fn test_draw_sprite_wrapped_right() {
        let mut display: Display = Display::new();
        display.draw_sprite(60, 0, &[0xFF], SpriteEdge::Wrap);
        assert!((60..64).all(|x| display.is_pixel_on(x, 0)));
        assert!((0..4).all(|x| display.is_pixel_on(x, 0)));
        assert!(!display.is_pixel_on(4, 0));
    }

    #[test]
    fn test_draw_sprite_clipped_bottom() {
        let mut display: Display = Display::new();
        display.draw_sprite(0, 31, &setup_test_sprite(), SpriteEdge::Clip);
        assert_eq!(row_byte(&display, 31, 0), 0xB6);
        assert_eq!(row_byte(&display, 0, 0), 0x00);
    }

    #[test]
    fn test_draw_sprite_wrapped_bottom() {
        let mut display: Display = Display::new();
        display.draw_sprite(0, 31, &setup_test_sprite(), SpriteEdge::Wrap);
        assert_eq!(row_byte(&display, 31, 0), 0xB6);
        assert_eq!(row_byte(&display, 0, 0), 0xE3);
    }

    #[test]
    fn test_draw_empty_sprite() {
        let mut display: Display = setup_test_display();
        let before: Display = display.clone();
        assert!(!display.draw_sprite(0, 0, &[], SpriteEdge::Clip));
        assert_eq!(display, before);
    }

    #[test]
    fn test_clear() {
        let mut display: Display = setup_test_display();
        display.clear();
        assert!(display.pixels().iter().all(|p| *p == PIXEL_OFF));
    }

    proptest! {
        #[test]
        fn prop_draw_twice_restores_display(
            x in 0usize..256,
            y in 0usize..256,
            sprite in proptest::collection::vec(any::<u8>(), 1..=15),
            wrap in any::<bool>(),
        ) {
            let edge = if wrap { SpriteEdge::Wrap } else { SpriteEdge::Clip };
            let mut display: Display = setup_test_display();
            let before: Display = display.clone();
            display.draw_sprite(x, y, &sprite, edge);
            display.draw_sprite(x, y, &sprite, edge);
            prop_assert_eq!(display, before);
        }
    }
}
