use crate::error::ErrorDetail;

/// An enum with a variant for each instruction within the CHIP-8 instruction set.
///
/// Register operands are held as `usize` (always 0x0 to 0xF, as they are decoded from a single
/// nibble) so they can index the register file directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Instruction {
    Op00E0,                               // Clear screen
    Op00EE,                               // Subroutine (return)
    Op0NNN { nnn: u16 },                  // Execute machine language routine
    Op1NNN { nnn: u16 },                  // Jump to NNN
    Op2NNN { nnn: u16 },                  // Subroutine (call)
    Op3XNN { x: usize, nn: u8 },          // Skip (if Vx = NN)
    Op4XNN { x: usize, nn: u8 },          // Skip (if Vx != NN)
    Op5XY0 { x: usize, y: usize },        // Skip (if Vx = Vy)
    Op6XNN { x: usize, nn: u8 },          // Set register
    Op7XNN { x: usize, nn: u8 },          // Add (NN to Vx), no carry
    Op8XY0 { x: usize, y: usize },        // Set
    Op8XY1 { x: usize, y: usize },        // Binary OR
    Op8XY2 { x: usize, y: usize },        // Binary AND
    Op8XY3 { x: usize, y: usize },        // Logical XOR
    Op8XY4 { x: usize, y: usize },        // Add (Vy to Vx), Vf = carry
    Op8XY5 { x: usize, y: usize },        // Subtract (Vx - Vy -> Vx), Vf = not borrow
    Op8XY6 { x: usize, y: usize },        // Shift right, Vf = shifted-out bit
    Op8XY7 { x: usize, y: usize },        // Subtract (Vy - Vx -> Vx), Vf = not borrow
    Op8XYE { x: usize, y: usize },        // Shift left, Vf = shifted-out bit
    Op9XY0 { x: usize, y: usize },        // Skip (if Vx != Vy)
    OpANNN { nnn: u16 },                  // Set I = NNN
    OpBNNN { nnn: u16 },                  // Jump to NNN + V0
    OpCXNN { x: usize, nn: u8 },          // Rnd & NN, insert to Vx
    OpDXYN { x: usize, y: usize, n: u8 }, // Draw sprite
    OpEX9E { x: usize },                  // Skip if Vx key is pressed
    OpEXA1 { x: usize },                  // Skip if Vx key is not pressed
    OpFX07 { x: usize },                  // Vx = value of delay timer
    OpFX0A { x: usize },                  // Vx = blocks until keypress
    OpFX15 { x: usize },                  // value of delay timer = Vx
    OpFX18 { x: usize },                  // value of sound timer = Vx
    OpFX1E { x: usize },                  // I = I + Vx
    OpFX29 { x: usize },                  // Set I to address of font glyph for low nibble of Vx
    OpFX33 { x: usize },                  // Binary-coded decimal conversion
    OpFX55 { x: usize },                  // Store V registers to memory
    OpFX65 { x: usize },                  // Load V registers from memory
}

impl Instruction {
    /// Constructor/builder method that parses the supplied two-byte opcode and returns the
    /// corresponding [Instruction] enum variant.  Returns [ErrorDetail::UnknownInstruction] if
    /// the opcode cannot be parsed or recognised.
    ///
    /// # Arguments
    ///
    /// * `opcode` - a (big-endian) two-byte representation of the opcode to be parsed
    pub(crate) fn decode_from(opcode: u16) -> Result<Instruction, ErrorDetail> {
        // Divide the 16-bit opcode into four 4-bit nibbles
        let first_nibble: u16 = opcode >> 12;
        let x: usize = ((opcode & 0x0F00) >> 8) as usize;
        let y: usize = ((opcode & 0x00F0) >> 4) as usize;
        let n: u8 = (opcode & 0x000F) as u8;
        let nn: u8 = (opcode & 0x00FF) as u8;
        let nnn: u16 = opcode & 0x0FFF;
        match (first_nibble, x, y, n) {
            (0x0, 0x0, 0xE, 0x0) => Ok(Instruction::Op00E0),
            (0x0, 0x0, 0xE, 0xE) => Ok(Instruction::Op00EE),
            (0x0, ..) => Ok(Instruction::Op0NNN { nnn }),
            (0x1, ..) => Ok(Instruction::Op1NNN { nnn }),
            (0x2, ..) => Ok(Instruction::Op2NNN { nnn }),
            (0x3, ..) => Ok(Instruction::Op3XNN { x, nn }),
            (0x4, ..) => Ok(Instruction::Op4XNN { x, nn }),
            (0x5, _, _, 0x0) => Ok(Instruction::Op5XY0 { x, y }),
            (0x6, ..) => Ok(Instruction::Op6XNN { x, nn }),
            (0x7, ..) => Ok(Instruction::Op7XNN { x, nn }),
            (0x8, _, _, 0x0) => Ok(Instruction::Op8XY0 { x, y }),
            (0x8, _, _, 0x1) => Ok(Instruction::Op8XY1 { x, y }),
            (0x8, _, _, 0x2) => Ok(Instruction::Op8XY2 { x, y }),
            (0x8, _, _, 0x3) => Ok(Instruction::Op8XY3 { x, y }),
            (0x8, _, _, 0x4) => Ok(Instruction::Op8XY4 { x, y }),
            (0x8, _, _, 0x5) => Ok(Instruction::Op8XY5 { x, y }),
            (0x8, _, _, 0x6) => Ok(Instruction::Op8XY6 { x, y }),
            (0x8, _, _, 0x7) => Ok(Instruction::Op8XY7 { x, y }),
            (0x8, _, _, 0xE) => Ok(Instruction::Op8XYE { x, y }),
            (0x9, _, _, 0x0) => Ok(Instruction::Op9XY0 { x, y }),
            (0xA, ..) => Ok(Instruction::OpANNN { nnn }),
            (0xB, ..) => Ok(Instruction::OpBNNN { nnn }),
            (0xC, ..) => Ok(Instruction::OpCXNN { x, nn }),
            (0xD, ..) => Ok(Instruction::OpDXYN { x, y, n }),
            (0xE, _, 0x9, 0xE) => Ok(Instruction::OpEX9E { x }),
            (0xE, _, 0xA, 0x1) => Ok(Instruction::OpEXA1 { x }),
            (0xF, _, 0x0, 0x7) => Ok(Instruction::OpFX07 { x }),
            (0xF, _, 0x0, 0xA) => Ok(Instruction::OpFX0A { x }),
            (0xF, _, 0x1, 0x5) => Ok(Instruction::OpFX15 { x }),
            (0xF, _, 0x1, 0x8) => Ok(Instruction::OpFX18 { x }),
            (0xF, _, 0x1, 0xE) => Ok(Instruction::OpFX1E { x }),
            (0xF, _, 0x2, 0x9) => Ok(Instruction::OpFX29 { x }),
            (0xF, _, 0x3, 0x3) => Ok(Instruction::OpFX33 { x }),
            (0xF, _, 0x5, 0x5) => Ok(Instruction::OpFX55 { x }),
            (0xF, _, 0x6, 0x5) => Ok(Instruction::OpFX65 { x }),
            // If we have not matched by this point then we cannot identify the
            // instruction; return an Error
            _ => Err(ErrorDetail::UnknownInstruction { opcode }),
        }
    }

    /// Returns a textual representation of each enum variant.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Instruction::Op00E0 => "00E0",
            Instruction::Op00EE => "00EE",
            Instruction::Op0NNN { .. } => "0NNN",
            Instruction::Op1NNN { .. } => "1NNN",
            Instruction::Op2NNN { .. } => "2NNN",
            Instruction::Op3XNN { .. } => "3XNN",
            Instruction::Op4XNN { .. } => "4XNN",
            Instruction::Op5XY0 { .. } => "5XY0",
            Instruction::Op6XNN { .. } => "6XNN",
            Instruction::Op7XNN { .. } => "7XNN",
            Instruction::Op8XY0 { .. } => "8XY0",
            Instruction::Op8XY1 { .. } => "8XY1",
            Instruction::Op8XY2 { .. } => "8XY2",
            Instruction::Op8XY3 { .. } => "8XY3",
            Instruction::Op8XY4 { .. } => "8XY4",
            Instruction::Op8XY5 { .. } => "8XY5",
            Instruction::Op8XY6 { .. } => "8XY6",
            Instruction::Op8XY7 { .. } => "8XY7",
            Instruction::Op8XYE { .. } => "8XYE",
            Instruction::Op9XY0 { .. } => "9XY0",
            Instruction::OpANNN { .. } => "ANNN",
            Instruction::OpBNNN { .. } => "BNNN",
            Instruction::OpCXNN { .. } => "CXNN",
            Instruction::OpDXYN { .. } => "DXYN",
            Instruction::OpEX9E { .. } => "EX9E",
            Instruction::OpEXA1 { .. } => "EXA1",
            Instruction::OpFX07 { .. } => "FX07",
            Instruction::OpFX0A { .. } => "FX0A",
            Instruction::OpFX15 { .. } => "FX15",
            Instruction::OpFX18 { .. } => "FX18",
            Instruction::OpFX1E { .. } => "FX1E",
            Instruction::OpFX29 { .. } => "FX29",
            Instruction::OpFX33 { .. } => "FX33",
            Instruction::OpFX55 { .. } => "FX55",
            Instruction::OpFX65 { .. } => "FX65",
        }
    }

    /// Returns true if executing this instruction may change the frame buffer.
    pub(crate) fn updates_display(&self) -> bool {
        matches!(self, Instruction::Op00E0 | Instruction::OpDXYN { .. })
    }
}
