use crate::error::ErrorDetail;

/// The number of keys in the CHIP-8 keypad.
const NUMBER_OF_KEYS: u8 = 16;

/// An abstraction of the state of each key on the CHIP-8 keypad (pressed / not pressed).
///
/// Only the hosting application writes key state; the processor only reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct KeyState {
    /// Array holding a boolean for each key (true means pressed, false means not pressed).
    keys_pressed: [bool; NUMBER_OF_KEYS as usize],
}

impl KeyState {
    /// Constructor that returns a [KeyState] instance with no keys pressed.
    pub(crate) fn new() -> Self {
        KeyState::default()
    }

    /// Returns true if the key selected by the low nibble of `key` is pressed.
    ///
    /// # Arguments
    ///
    /// * `key` - a register value; only its low nibble selects the key
    pub(crate) fn is_key_pressed(&self, key: u8) -> bool {
        self.keys_pressed[(key & 0x0F) as usize]
    }

    /// Sets the state of the specified key; returns an [ErrorDetail::InvalidKey] if the
    /// specified key is invalid.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    /// * `status` - boolean representing key state (true meaning pressed)
    pub(crate) fn set_key_status(&mut self, key: u8, status: bool) -> Result<(), ErrorDetail> {
        match self.keys_pressed.get_mut(key as usize) {
            Some(pressed) => {
                *pressed = status;
                Ok(())
            }
            None => Err(ErrorDetail::InvalidKey { key }),
        }
    }

    /// Returns the lowest-numbered key currently pressed, if any.
    pub(crate) fn first_key_pressed(&self) -> Option<u8> {
        (0..NUMBER_OF_KEYS).find(|key| self.keys_pressed[*key as usize])
    }
}
