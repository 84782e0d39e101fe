use crate::processor::StateSnapshot;
use std::error;
use std::fmt;

/// An enum used within the crate to describe a fault raised by one of the machine components.
///
/// Every variant is fatal to the current run; the [Processor](crate::Processor) never attempts
/// to recover from any of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// An instruction word was read from memory that matches no known instruction
    UnknownInstruction { opcode: u16 },
    /// A subroutine call was made while the call stack was already full
    PushFullStack,
    /// A subroutine return was made while the call stack was empty
    PopEmptyStack,
    /// An attempt was made to read/write from an address outside the addressable range
    MemoryAddressOutOfBounds { address: usize },
    /// The program image does not fit between the load address and the end of memory
    ProgramTooLarge { size: usize, capacity: usize },
    /// The program load address lies inside the reserved interpreter / font region
    ProgramInReservedRegion { address: usize },
    /// The font data does not fit below the program load address
    FontOutOfBounds { address: usize },
    /// A key ordinal was referenced that is outside the keypad range (0x0 to 0xF)
    InvalidKey { key: u8 },
    /// Execution was requested after the processor had already crashed
    ProcessorHalted,
}

impl error::Error for ErrorDetail {}

impl fmt::Display for ErrorDetail {
    /// Returns a textual description of each enum variant for display purposes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::UnknownInstruction { opcode } => {
                write!(f, "an unrecognised opcode {:#06X} was decoded", opcode)
            }
            ErrorDetail::PushFullStack => {
                write!(f, "stack overflow: a call was made with the stack full")
            }
            ErrorDetail::PopEmptyStack => {
                write!(f, "stack underflow: a return was made with the stack empty")
            }
            ErrorDetail::MemoryAddressOutOfBounds { address } => {
                write!(f, "memory was accessed out of bounds at {:#05X}", address)
            }
            ErrorDetail::ProgramTooLarge { size, capacity } => {
                write!(
                    f,
                    "the program is {} bytes but only {} bytes are available",
                    size, capacity
                )
            }
            ErrorDetail::ProgramInReservedRegion { address } => {
                write!(
                    f,
                    "the program cannot be loaded at {:#05X}, inside the reserved region",
                    address
                )
            }
            ErrorDetail::FontOutOfBounds { address } => {
                write!(f, "the font overlaps the program area at {:#05X}", address)
            }
            ErrorDetail::InvalidKey { key } => {
                write!(f, "an invalid key {:#X} was specified", key)
            }
            ErrorDetail::ProcessorHalted => {
                write!(f, "the processor has halted after an earlier fault")
            }
        }
    }
}

/// The error type returned to hosting applications through the public [Processor](crate::Processor)
/// API.  Wraps the [ErrorDetail] fault together with where it happened and a full dump of the
/// machine state at the moment of the fault.
#[derive(Debug)]
pub struct MachineError {
    /// The address of the instruction being executed when the fault occurred
    pub address: u16,
    /// The instruction word being executed, if one had been fetched
    pub opcode: Option<u16>,
    /// The underlying fault
    pub inner_error: ErrorDetail,
    /// The machine state at the moment of the fault
    pub state_snapshot_dump: StateSnapshot,
}

impl error::Error for MachineError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.inner_error)
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Some(opcode) => write!(
                f,
                "{} (instruction {:#06X} at {:#05X})",
                self.inner_error, opcode, self.address
            ),
            None => write!(f, "{} (at {:#05X})", self.inner_error, self.address),
        }
    }
}
