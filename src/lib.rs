mod display;
mod error;
mod font;
mod instruction;
mod keystate;
mod memory;
mod options;
mod processor;
mod program;
mod stack;
mod timers;

// Re-exports
pub use crate::display::{
    Display, DISPLAY_HEIGHT_PIXELS, DISPLAY_WIDTH_PIXELS, PIXEL_OFF, PIXEL_ON,
};
pub use crate::error::*;
pub use crate::memory::Memory;
pub use crate::options::{Options, Quirks, SpriteEdge};
pub use crate::processor::{Processor, ProcessorStatus, StateSnapshot, StateSnapshotVerbosity};
pub use crate::program::Program;
pub use crate::stack::Stack;
pub use crate::timers::TIMER_TICK_HERTZ;
