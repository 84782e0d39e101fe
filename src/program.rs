/// An abstraction of a CHIP-8 program image, ready for loading into the machine.
///
/// Reading the image from storage is left to the hosting application; this only holds the bytes
/// that will be copied verbatim into memory at the program start address.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// A byte vector containing the program data as loaded from the ROM.
    program_data: Vec<u8>,
}

impl Program {
    /// Constructor that returns [Program] instance representing the passed program data.
    pub fn new(data: Vec<u8>) -> Self {
        Program { program_data: data }
    }

    /// Constructor that builds a [Program] from a sequence of instruction words, each stored
    /// big-endian.
    ///
    /// # Arguments
    ///
    /// * `words` - the instruction words in program order
    pub fn from_words(words: &[u16]) -> Self {
        Program {
            program_data: words.iter().flat_map(|word| word.to_be_bytes()).collect(),
        }
    }

    /// Returns a reference to the program data held in this instance.
    pub fn program_data(&self) -> &[u8] {
        &self.program_data
    }

    /// Returns the size of the instance's program data (in bytes).
    pub fn program_data_size(&self) -> usize {
        self.program_data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_program() -> Vec<u8> {
        vec![0xA1, 0x14, 0x0C, 0xFD, 0xA3]
    }

    #[test]
    fn test_program_data() {
        let test_program: Vec<u8> = setup_test_program();
        let program: Program = Program::new(test_program.clone());
        assert_eq!(program.program_data(), &test_program[..]);
        assert_eq!(program.program_data_size(), test_program.len());
    }

    #[test]
    fn test_from_words() {
        let program: Program = Program::from_words(&[0x6A02, 0x8AB4]);
        assert_eq!(program.program_data(), &[0x6A, 0x02, 0x8A, 0xB4]);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Program::default().program_data_size(), 0);
    }
}
