#![allow(non_snake_case)]

use super::display::Display;
use super::error::{ErrorDetail, MachineError};
use super::font::Font;
use super::instruction::Instruction;
use super::keystate::KeyState;
use super::memory::Memory;
use super::options::{Options, Quirks};
use super::program::Program;
use super::stack::Stack;
use super::timers::{Timers, TIMER_TICK_HERTZ};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod execute; // separate sub-module for all the instruction execution methods

/// The number of variable registers available.
pub(crate) const VARIABLE_REGISTER_COUNT: usize = 16;
/// The index of the variable register doubling as carry / borrow / collision flag.
const FLAG_REGISTER: usize = 0xF;
/// The end (exclusive) of the low memory region reserved for the interpreter and font.
const RESERVED_REGION_END: usize = 0x200;

/// An enum used to keep track of the processor execution status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProcessorStatus {
    /// A program has been loaded into the processor's memory
    ProgramLoaded,
    /// The program is being executed (the fetch->decode->execute cycle has begun)
    Running,
    /// The processor is stalled on instruction FX0A, waiting for a keypress
    WaitingForKeypress,
    /// The processor has faulted; no further instructions will execute
    Crashed,
}

/// An enum used to indicate which variant of [StateSnapshot] should be returned when a call is
/// made to [Processor::export_state_snapshot()].
pub enum StateSnapshotVerbosity {
    /// Only the frame buffer state will be reported
    Minimal,
    /// The frame buffer, registers, timers, stack and memory state will all be reported
    Extended,
}

/// An enum with variants representing the state snapshots that can be returned to hosting
/// applications for rendering or fault reporting.
#[derive(Clone, Debug, PartialEq)]
pub enum StateSnapshot {
    /// Minimal snapshot containing only the frame buffer state
    MinimalSnapshot {
        frame_buffer: Display,
        status: ProcessorStatus,
    },
    /// Extended snapshot containing the frame buffer state along with all registers,
    /// timers, stack and memory
    ExtendedSnapshot {
        frame_buffer: Display,
        status: ProcessorStatus,
        stack: Stack,
        memory: Memory,
        program_counter: u16,
        index_register: u16,
        variable_registers: [u8; VARIABLE_REGISTER_COUNT],
        delay_timer: u8,
        sound_timer: u8,
        cycles: usize,
    },
}

/// An abstraction of the CHIP-8 processor, and the core public interface to the crate.
///
/// This struct owns all machine state, and exposes methods through which a program is loaded
/// and then executed one cycle at a time, timers are ticked, keypad input is supplied, and the
/// frame buffer is read for rendering.  Each instance is fully independent.
///
/// A host running instruction steps and timer ticks on separate threads must put the
/// [Processor] behind a lock (e.g. `Arc<Mutex<Processor>>`) so each step, tick and read is
/// applied whole.
#[derive(Debug)]
pub struct Processor {
    // MACHINE STATE FIELDS
    frame_buffer: Display, // The display frame buffer
    stack: Stack,          // The call stack (holds return addresses for subroutines)
    memory: Memory,        // The system memory
    program_counter: u16, // The program counter register (points to next opcode location in memory)
    index_register: u16,  // The index register (used to point to memory addresses)
    variable_registers: [u8; VARIABLE_REGISTER_COUNT], // General purpose registers, VF is the flag
    timers: Timers,       // Delay and sound timers, decremented by tick_timers()
    keystate: KeyState,   // A representation of the state (pressed/not pressed) of each key
    // ADDITIONAL STATE FIELDS
    cycles: usize,           // The number of processor cycles that have been executed
    status: ProcessorStatus, // The current execution status of the processor
    rng: StdRng,             // Source for the random number instruction
    // CONFIG FIELDS
    font_start_address: usize, // The start address in memory at which the font is loaded
    program_start_address: usize, // The start address in memory at which the program is loaded
    processor_speed_hertz: u64, // Used to size run_frame()
    quirks: Quirks,               // Instruction-compatibility configuration
}

impl Processor {
    /// Constructor/builder function that returns a freshly-initialised [Processor] instance
    /// with the font and the supplied program data loaded into memory ready for execution.
    ///
    /// Fails with [ErrorDetail::FontOutOfBounds] if the font would overlap the program area,
    /// [ErrorDetail::ProgramInReservedRegion] if the program start address is below 0x200, or
    /// [ErrorDetail::ProgramTooLarge] if the program does not fit in memory.
    ///
    /// # Arguments
    ///
    /// * `program` - a [Program] instance holding the bytes of the ROM to be executed
    /// * `options` - an [Options] instance holding start-up configuration information
    pub fn initialise_and_load(program: Program, options: Options) -> Result<Self, MachineError> {
        let rng: StdRng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut processor = Processor {
            frame_buffer: Display::new(),
            stack: Stack::new(),
            memory: Memory::new(),
            program_counter: options.program_start_address,
            index_register: 0x0,
            variable_registers: [0x0; VARIABLE_REGISTER_COUNT],
            timers: Timers::default(),
            keystate: KeyState::new(),
            cycles: 0,
            status: ProcessorStatus::ProgramLoaded,
            rng,
            font_start_address: options.font_start_address as usize,
            program_start_address: options.program_start_address as usize,
            processor_speed_hertz: options.processor_speed_hertz,
            quirks: options.quirks,
        };
        debug!(
            "initialising processor: program at {:#05X}, font at {:#05X}, {:?}",
            processor.program_start_address, processor.font_start_address, processor.quirks
        );
        if let Err(e) = processor.load_font_data() {
            return Err(processor.crash(e, None));
        }
        if let Err(e) = processor.load_program(&program) {
            return Err(processor.crash(e, None));
        }
        Ok(processor)
    }

    /// Sets the current processor speed in hertz
    ///
    /// # Arguments
    ///
    /// * `speed_hertz` - the new processor speed
    pub fn set_processor_speed(&mut self, speed_hertz: u64) {
        self.processor_speed_hertz = speed_hertz;
    }

    /// Returns the current processor speed in hertz
    pub fn processor_speed(&self) -> u64 {
        self.processor_speed_hertz
    }

    /// Returns the number of instructions [Processor::run_frame()] executes per timer tick
    pub fn cycles_per_frame(&self) -> u64 {
        (self.processor_speed_hertz / TIMER_TICK_HERTZ).max(1)
    }

    /// Returns the current execution status
    pub fn status(&self) -> ProcessorStatus {
        self.status
    }

    /// Returns a reference to the frame buffer, reflecting every draw executed so far
    pub fn frame_buffer(&self) -> &Display {
        &self.frame_buffer
    }

    /// Returns a copy of the current state of the machine.
    ///
    /// The minimal level of state reporting returns just a copy of the [Display] frame buffer
    /// and the processor status.  The extended level additionally returns a copy of all
    /// registers and timers, the [Stack] and the [Memory].
    ///
    /// # Arguments
    ///
    /// * `verbosity` - the amount of state that should be returned
    pub fn export_state_snapshot(&self, verbosity: StateSnapshotVerbosity) -> StateSnapshot {
        match verbosity {
            StateSnapshotVerbosity::Minimal => StateSnapshot::MinimalSnapshot {
                frame_buffer: self.frame_buffer.clone(),
                status: self.status,
            },
            StateSnapshotVerbosity::Extended => StateSnapshot::ExtendedSnapshot {
                frame_buffer: self.frame_buffer.clone(),
                status: self.status,
                stack: self.stack.clone(),
                memory: self.memory.clone(),
                program_counter: self.program_counter,
                index_register: self.index_register,
                variable_registers: self.variable_registers,
                delay_timer: self.timers.delay,
                sound_timer: self.timers.sound,
                cycles: self.cycles,
            },
        }
    }

    /// Provides key press input, by setting the state of the specified key to pressed / not
    /// pressed.  Returns [ErrorDetail::InvalidKey] for a key outside 0x0 to 0xF; the processor
    /// state is unaffected in that case.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    /// * `status` - the value to set for the specified key (true means pressed)
    pub fn set_key_status(&mut self, key: u8, status: bool) -> Result<(), ErrorDetail> {
        self.keystate.set_key_status(key, status)
    }

    /// Loads the built-in font into memory.  The font must end at or before the program start
    /// address, otherwise returns [ErrorDetail::FontOutOfBounds].
    fn load_font_data(&mut self) -> Result<(), ErrorDetail> {
        let font_end_address: usize = self.font_start_address + Font::font_data().len();
        if font_end_address > self.program_start_address {
            return Err(ErrorDetail::FontOutOfBounds {
                address: font_end_address,
            });
        }
        self.memory
            .write_bytes(self.font_start_address, Font::font_data())?;
        debug!(
            "loaded {} bytes of font data at {:#05X}",
            Font::font_data().len(),
            self.font_start_address
        );
        Ok(())
    }

    /// Loads the program data into memory at the program start address.  The start address
    /// must not fall in the reserved region below 0x200, otherwise returns
    /// [ErrorDetail::ProgramInReservedRegion].  If the program does not fit between there and
    /// the end of memory, returns [ErrorDetail::ProgramTooLarge].
    fn load_program(&mut self, program: &Program) -> Result<(), ErrorDetail> {
        if self.program_start_address < RESERVED_REGION_END {
            return Err(ErrorDetail::ProgramInReservedRegion {
                address: self.program_start_address,
            });
        }
        let capacity: usize = self
            .memory
            .max_addressable_size()
            .saturating_sub(self.program_start_address);
        if program.program_data_size() > capacity {
            return Err(ErrorDetail::ProgramTooLarge {
                size: program.program_data_size(),
                capacity,
            });
        }
        self.memory
            .write_bytes(self.program_start_address, program.program_data())?;
        debug!(
            "loaded {} byte program at {:#05X}",
            program.program_data_size(),
            self.program_start_address
        );
        Ok(())
    }

    /// Helper method that "crashes" the processor when an [ErrorDetail] instance is returned from
    /// a function call, and wraps this in a [MachineError] naming the faulting instruction.
    fn crash(&mut self, inner_error: ErrorDetail, opcode: Option<u16>) -> MachineError {
        self.status = ProcessorStatus::Crashed;
        warn!(
            "processor crashed at {:#05X}: {}",
            self.program_counter, inner_error
        );
        MachineError {
            address: self.program_counter,
            opcode,
            inner_error,
            state_snapshot_dump: self.export_state_snapshot(StateSnapshotVerbosity::Extended),
        }
    }

    /// Executes one iteration of the fetch -> decode -> execute cycle.  Returns a boolean
    /// indicating whether the display frame buffer may have been updated this cycle.
    ///
    /// Never blocks: while waiting for a keypress (FX0A) each call re-executes the waiting
    /// instruction and returns straight away.
    pub fn execute_cycle(&mut self) -> Result<bool, MachineError> {
        match self.status {
            ProcessorStatus::ProgramLoaded => self.status = ProcessorStatus::Running,
            ProcessorStatus::Running | ProcessorStatus::WaitingForKeypress => {
                // no change
            }
            ProcessorStatus::Crashed => {
                return Err(self.crash(ErrorDetail::ProcessorHalted, None));
            }
        }
        self.cycles += 1;
        // Fetch two byte opcode from current Program Counter memory location
        let opcode: u16 = match self.memory.read_two_bytes(self.program_counter as usize) {
            Ok(opcode) => opcode,
            Err(e) => return Err(self.crash(e, None)),
        };
        let instruction: Instruction = match Instruction::decode_from(opcode) {
            Ok(instruction) => instruction,
            Err(e) => return Err(self.crash(e, Some(opcode))),
        };
        trace!(
            "{:#05X}: {:04X} ({})",
            self.program_counter,
            opcode,
            instruction.name()
        );
        // Increment Program Counter (by two bytes, as we have 16-bit opcodes); instructions
        // that jump, call, return or skip then set it themselves
        let instruction_address: u16 = self.program_counter;
        self.program_counter += 2;
        if let Err(e) = self.execute(instruction) {
            // Report the fault against the instruction that raised it
            self.program_counter = instruction_address;
            return Err(self.crash(e, Some(opcode)));
        }
        Ok(instruction.updates_display())
    }

    /// Decrements the delay and sound timers by one if non-zero.  The host calls this at 60Hz,
    /// independently of the instruction rate.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Runs one 60Hz frame: executes [Processor::cycles_per_frame()] cycles and then ticks the
    /// timers once.  Returns whether the display may have been updated during the frame.
    pub fn run_frame(&mut self) -> Result<bool, MachineError> {
        let mut display_updated: bool = false;
        for _ in 0..self.cycles_per_frame() {
            display_updated |= self.execute_cycle()?;
        }
        self.tick_timers();
        Ok(display_updated)
    }

    /// Returns true if the sound timer is active i.e. if the hosting application should play audio
    pub fn sound_timer_active(&self) -> bool {
        self.timers.sound_active()
    }

    /// Executes the passed Instruction, dispatching to the per-opcode method.
    ///
    /// # Arguments
    ///
    /// * `instr` - the instruction to be executed
    fn execute(&mut self, instr: Instruction) -> Result<(), ErrorDetail> {
        match instr {
            Instruction::Op00E0 => self.execute_00E0(),
            Instruction::Op00EE => self.execute_00EE(),
            Instruction::Op0NNN { nnn } => self.execute_0NNN(nnn),
            Instruction::Op1NNN { nnn } => self.execute_1NNN(nnn),
            Instruction::Op2NNN { nnn } => self.execute_2NNN(nnn),
            Instruction::Op3XNN { x, nn } => self.execute_3XNN(x, nn),
            Instruction::Op4XNN { x, nn } => self.execute_4XNN(x, nn),
            Instruction::Op5XY0 { x, y } => self.execute_5XY0(x, y),
            Instruction::Op6XNN { x, nn } => self.execute_6XNN(x, nn),
            Instruction::Op7XNN { x, nn } => self.execute_7XNN(x, nn),
            Instruction::Op8XY0 { x, y } => self.execute_8XY0(x, y),
            Instruction::Op8XY1 { x, y } => self.execute_8XY1(x, y),
            Instruction::Op8XY2 { x, y } => self.execute_8XY2(x, y),
            Instruction::Op8XY3 { x, y } => self.execute_8XY3(x, y),
            Instruction::Op8XY4 { x, y } => self.execute_8XY4(x, y),
            Instruction::Op8XY5 { x, y } => self.execute_8XY5(x, y),
            Instruction::Op8XY6 { x, y } => self.execute_8XY6(x, y),
            Instruction::Op8XY7 { x, y } => self.execute_8XY7(x, y),
            Instruction::Op8XYE { x, y } => self.execute_8XYE(x, y),
            Instruction::Op9XY0 { x, y } => self.execute_9XY0(x, y),
            Instruction::OpANNN { nnn } => self.execute_ANNN(nnn),
            Instruction::OpBNNN { nnn } => self.execute_BNNN(nnn),
            Instruction::OpCXNN { x, nn } => self.execute_CXNN(x, nn),
            Instruction::OpDXYN { x, y, n } => self.execute_DXYN(x, y, n),
            Instruction::OpEX9E { x } => self.execute_EX9E(x),
            Instruction::OpEXA1 { x } => self.execute_EXA1(x),
            Instruction::OpFX07 { x } => self.execute_FX07(x),
            Instruction::OpFX0A { x } => self.execute_FX0A(x),
            Instruction::OpFX15 { x } => self.execute_FX15(x),
            Instruction::OpFX18 { x } => self.execute_FX18(x),
            Instruction::OpFX1E { x } => self.execute_FX1E(x),
            Instruction::OpFX29 { x } => self.execute_FX29(x),
            Instruction::OpFX33 { x } => self.execute_FX33(x),
            Instruction::OpFX55 { x } => self.execute_FX55(x),
            Instruction::OpFX65 { x } => self.execute_FX65(x),
        }
    }
}
