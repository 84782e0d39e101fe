use super::*;
use crate::memory::MEMORY_SIZE_BYTES;

impl Processor {
    /// Executes the 00E0 instruction - CLS
    /// Purpose: clear the display
    pub(super) fn execute_00E0(&mut self) -> Result<(), ErrorDetail> {
        self.frame_buffer.clear();
        Ok(())
    }

    /// Executes the 00EE instruction - RET
    /// Purpose: return from a subroutine
    pub(super) fn execute_00EE(&mut self) -> Result<(), ErrorDetail> {
        let address: u16 = self.stack.pop()?;
        self.program_counter = address;
        Ok(())
    }

    /// Executes the 0NNN instruction - SYS addr
    /// Purpose: call a native machine code routine; there is no native code to run so this is
    /// a no-op
    pub(super) fn execute_0NNN(&mut self, nnn: u16) -> Result<(), ErrorDetail> {
        debug!("ignoring machine code routine call to {:#05X}", nnn);
        Ok(())
    }

    /// Executes the 1NNN instruction - JP addr
    /// Purpose: jump to address NNN
    pub(super) fn execute_1NNN(&mut self, nnn: u16) -> Result<(), ErrorDetail> {
        self.program_counter = nnn;
        Ok(())
    }

    /// Executes the 2NNN instruction - CALL addr
    /// Purpose: call subroutine at NNN
    pub(super) fn execute_2NNN(&mut self, nnn: u16) -> Result<(), ErrorDetail> {
        // The program counter already points at the instruction after the call
        self.stack.push(self.program_counter)?;
        self.program_counter = nnn;
        Ok(())
    }

    /// Executes the 3XNN instruction - SE Vx, byte
    /// Purpose: skip next instruction if Vx = NN
    pub(super) fn execute_3XNN(&mut self, x: usize, nn: u8) -> Result<(), ErrorDetail> {
        if self.variable_registers[x] == nn {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the 4XNN instruction - SNE Vx, byte
    /// Purpose: skip next instruction if Vx != NN
    pub(super) fn execute_4XNN(&mut self, x: usize, nn: u8) -> Result<(), ErrorDetail> {
        if self.variable_registers[x] != nn {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the 5XY0 instruction - SE Vx, Vy
    /// Purpose: skip next instruction if Vx = Vy
    pub(super) fn execute_5XY0(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        if self.variable_registers[x] == self.variable_registers[y] {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the 6XNN instruction - LD Vx, byte
    /// Purpose: set Vx = NN
    pub(super) fn execute_6XNN(&mut self, x: usize, nn: u8) -> Result<(), ErrorDetail> {
        self.variable_registers[x] = nn;
        Ok(())
    }

    /// Executes the 7XNN instruction - ADD Vx, byte
    /// Purpose: set Vx = Vx + NN (wrapping, VF is not affected)
    pub(super) fn execute_7XNN(&mut self, x: usize, nn: u8) -> Result<(), ErrorDetail> {
        self.variable_registers[x] = self.variable_registers[x].wrapping_add(nn);
        Ok(())
    }

    /// Executes the 8XY0 instruction - LD Vx, Vy
    /// Purpose: set Vx = Vy
    pub(super) fn execute_8XY0(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        self.variable_registers[x] = self.variable_registers[y];
        Ok(())
    }

    /// Executes the 8XY1 instruction - OR Vx, Vy
    /// Purpose: set Vx = Vx OR Vy
    pub(super) fn execute_8XY1(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        self.variable_registers[x] |= self.variable_registers[y];
        self.reset_flag_after_logic();
        Ok(())
    }

    /// Executes the 8XY2 instruction - AND Vx, Vy
    /// Purpose: set Vx = Vx AND Vy
    pub(super) fn execute_8XY2(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        self.variable_registers[x] &= self.variable_registers[y];
        self.reset_flag_after_logic();
        Ok(())
    }

    /// Executes the 8XY3 instruction - XOR Vx, Vy
    /// Purpose: set Vx = Vx XOR Vy
    pub(super) fn execute_8XY3(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        self.variable_registers[x] ^= self.variable_registers[y];
        self.reset_flag_after_logic();
        Ok(())
    }

    /// Executes the 8XY4 instruction - ADD Vx, Vy
    /// Purpose: set Vx = Vx + Vy, VF = carry
    pub(super) fn execute_8XY4(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        let (result, carry) = self.variable_registers[x].overflowing_add(self.variable_registers[y]);
        // The flag is written last so it survives when x is F
        self.variable_registers[x] = result;
        self.variable_registers[FLAG_REGISTER] = carry as u8;
        Ok(())
    }

    /// Executes the 8XY5 instruction - SUB Vx, Vy
    /// Purpose: set Vx = Vx - Vy, VF = NOT borrow
    pub(super) fn execute_8XY5(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        let (result, borrow) = self.variable_registers[x].overflowing_sub(self.variable_registers[y]);
        self.variable_registers[x] = result;
        self.variable_registers[FLAG_REGISTER] = !borrow as u8;
        Ok(())
    }

    /// Executes the 8XY6 instruction - SHR Vx {, Vy}
    /// Purpose: set Vx = Vx SHR 1 (or Vy SHR 1), VF = the bit shifted out
    pub(super) fn execute_8XY6(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        let source: u8 = self.shift_source(x, y);
        self.variable_registers[x] = source >> 1;
        self.variable_registers[FLAG_REGISTER] = source & 0x01;
        Ok(())
    }

    /// Executes the 8XY7 instruction - SUBN Vx, Vy
    /// Purpose: set Vx = Vy - Vx, VF = NOT borrow
    pub(super) fn execute_8XY7(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        let (result, borrow) = self.variable_registers[y].overflowing_sub(self.variable_registers[x]);
        self.variable_registers[x] = result;
        self.variable_registers[FLAG_REGISTER] = !borrow as u8;
        Ok(())
    }

    /// Executes the 8XYE instruction - SHL Vx {, Vy}
    /// Purpose: set Vx = Vx SHL 1 (or Vy SHL 1), VF = the bit shifted out
    pub(super) fn execute_8XYE(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        let source: u8 = self.shift_source(x, y);
        self.variable_registers[x] = source << 1;
        self.variable_registers[FLAG_REGISTER] = source >> 7;
        Ok(())
    }

    /// Executes the 9XY0 instruction - SNE Vx, Vy
    /// Purpose: skip next instruction if Vx != Vy
    pub(super) fn execute_9XY0(&mut self, x: usize, y: usize) -> Result<(), ErrorDetail> {
        if self.variable_registers[x] != self.variable_registers[y] {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the ANNN instruction - LD I, addr
    /// Purpose: set I = NNN
    pub(super) fn execute_ANNN(&mut self, nnn: u16) -> Result<(), ErrorDetail> {
        self.index_register = nnn;
        Ok(())
    }

    /// Executes the BNNN instruction - JP V0, addr
    /// Purpose: jump to location NNN + V0 (or NNN + Vx, where x is the high nibble of NNN)
    pub(super) fn execute_BNNN(&mut self, nnn: u16) -> Result<(), ErrorDetail> {
        let offset_register: usize = match self.quirks.jump_uses_vx {
            true => ((nnn >> 8) & 0xF) as usize,
            false => 0x0,
        };
        let target: u16 = nnn + self.variable_registers[offset_register] as u16;
        if target as usize >= MEMORY_SIZE_BYTES {
            return Err(ErrorDetail::MemoryAddressOutOfBounds {
                address: target as usize,
            });
        }
        self.program_counter = target;
        Ok(())
    }

    /// Executes the CXNN instruction - RND Vx, byte
    /// Purpose: set Vx = random byte AND NN
    pub(super) fn execute_CXNN(&mut self, x: usize, nn: u8) -> Result<(), ErrorDetail> {
        self.variable_registers[x] = self.rng.gen::<u8>() & nn;
        Ok(())
    }

    /// Executes the DXYN instruction - DRW Vx, Vy, nibble
    /// Purpose: display N-byte sprite starting at memory location I at (Vx, Vy), VF = collision
    pub(super) fn execute_DXYN(&mut self, x: usize, y: usize, n: u8) -> Result<(), ErrorDetail> {
        let sprite: &[u8] = self
            .memory
            .read_bytes(self.index_register as usize, n as usize)?;
        let collision: bool = self.frame_buffer.draw_sprite(
            self.variable_registers[x] as usize,
            self.variable_registers[y] as usize,
            sprite,
            self.quirks.sprite_edge,
        );
        self.variable_registers[FLAG_REGISTER] = collision as u8;
        Ok(())
    }

    /// Executes the EX9E instruction - SKP Vx
    /// Purpose: skip next instruction if key with the value of Vx is pressed
    pub(super) fn execute_EX9E(&mut self, x: usize) -> Result<(), ErrorDetail> {
        if self.keystate.is_key_pressed(self.variable_registers[x]) {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the EXA1 instruction - SKNP Vx
    /// Purpose: skip next instruction if key with the value of Vx is not pressed
    pub(super) fn execute_EXA1(&mut self, x: usize) -> Result<(), ErrorDetail> {
        if !self.keystate.is_key_pressed(self.variable_registers[x]) {
            self.program_counter += 2;
        }
        Ok(())
    }

    /// Executes the FX07 instruction - LD Vx, DT
    /// Purpose: set Vx = delay timer value
    pub(super) fn execute_FX07(&mut self, x: usize) -> Result<(), ErrorDetail> {
        self.variable_registers[x] = self.timers.delay;
        Ok(())
    }

    /// Executes the FX0A instruction - LD Vx, K
    /// Purpose: wait for a key press, store the value of the key in Vx
    pub(super) fn execute_FX0A(&mut self, x: usize) -> Result<(), ErrorDetail> {
        match self.keystate.first_key_pressed() {
            Some(key) => {
                if self.status == ProcessorStatus::WaitingForKeypress {
                    debug!("key {:X} pressed, resuming", key);
                }
                self.variable_registers[x] = key;
                self.status = ProcessorStatus::Running;
            }
            None => {
                if self.status != ProcessorStatus::WaitingForKeypress {
                    debug!("waiting for keypress");
                }
                // Re-execute this instruction on the next cycle
                self.program_counter -= 2;
                self.status = ProcessorStatus::WaitingForKeypress;
            }
        }
        Ok(())
    }

    /// Executes the FX15 instruction - LD DT, Vx
    /// Purpose: set delay timer = Vx
    pub(super) fn execute_FX15(&mut self, x: usize) -> Result<(), ErrorDetail> {
        self.timers.delay = self.variable_registers[x];
        Ok(())
    }

    /// Executes the FX18 instruction - LD ST, Vx
    /// Purpose: set sound timer = Vx
    pub(super) fn execute_FX18(&mut self, x: usize) -> Result<(), ErrorDetail> {
        self.timers.sound = self.variable_registers[x];
        Ok(())
    }

    /// Executes the FX1E instruction - ADD I, Vx
    /// Purpose: set I = I + Vx (VF is not affected)
    pub(super) fn execute_FX1E(&mut self, x: usize) -> Result<(), ErrorDetail> {
        self.index_register = self
            .index_register
            .wrapping_add(self.variable_registers[x] as u16);
        Ok(())
    }

    /// Executes the FX29 instruction - LD F, Vx
    /// Purpose: set I = location of font sprite for digit Vx
    pub(super) fn execute_FX29(&mut self, x: usize) -> Result<(), ErrorDetail> {
        let address: usize =
            self.font_start_address + Font::glyph_offset(self.variable_registers[x]);
        self.index_register = address as u16;
        Ok(())
    }

    /// Executes the FX33 instruction - LD B, Vx
    /// Purpose: store BCD representation of Vx in memory locations I, I+1, and I+2
    pub(super) fn execute_FX33(&mut self, x: usize) -> Result<(), ErrorDetail> {
        let value: u8 = self.variable_registers[x];
        let digits: [u8; 3] = [value / 100, (value / 10) % 10, value % 10];
        self.memory
            .write_bytes(self.index_register as usize, &digits)?;
        Ok(())
    }

    /// Executes the FX55 instruction - LD [I], Vx
    /// Purpose: store registers V0 through Vx in memory starting at location I
    pub(super) fn execute_FX55(&mut self, x: usize) -> Result<(), ErrorDetail> {
        self.memory.write_bytes(
            self.index_register as usize,
            &self.variable_registers[..=x],
        )?;
        self.increment_index_after_load_store(x);
        Ok(())
    }

    /// Executes the FX65 instruction - LD Vx, [I]
    /// Purpose: read registers V0 through Vx from memory starting at location I
    pub(super) fn execute_FX65(&mut self, x: usize) -> Result<(), ErrorDetail> {
        let bytes: &[u8] = self
            .memory
            .read_bytes(self.index_register as usize, x + 1)?;
        self.variable_registers[..=x].copy_from_slice(bytes);
        self.increment_index_after_load_store(x);
        Ok(())
    }

    // Clears VF after 8XY1/8XY2/8XY3 when the flag reset quirk is on
    fn reset_flag_after_logic(&mut self) {
        if self.quirks.logic_resets_flag {
            self.variable_registers[FLAG_REGISTER] = 0x0;
        }
    }

    // The register shifted by 8XY6/8XYE
    fn shift_source(&self, x: usize, y: usize) -> u8 {
        match self.quirks.shift_uses_vy {
            true => self.variable_registers[y],
            false => self.variable_registers[x],
        }
    }

    // Moves I past the registers transferred by FX55/FX65 when that quirk is on
    fn increment_index_after_load_store(&mut self, x: usize) {
        if self.quirks.load_store_increments_index {
            self.index_register = self.index_register.wrapping_add(x as u16 + 1);
        }
    }
}
