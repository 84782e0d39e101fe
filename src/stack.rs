use crate::error::ErrorDetail;

/// The call stack depth (in terms of u16 return addresses).
pub(crate) const STACK_DEPTH: usize = 16;

/// An abstraction of the CHIP-8 stack, used for holding return addresses from subroutine calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    /// A stack-allocated array of 16-bit values representing the entire stack.
    pub entries: [u16; STACK_DEPTH],
    /// A pointer to the current top of the stack (i.e. the next available empty slot),
    /// which is also the current call depth.
    pub pointer: usize,
}

impl Stack {
    /// Constructor that returns an empty [Stack] instance.
    pub(crate) fn new() -> Self {
        Stack {
            entries: [0x0; STACK_DEPTH],
            pointer: 0,
        }
    }

    /// Pushes the specified 16-bit value on to the top of the stack.  If the stack is already
    /// full, returns [ErrorDetail::PushFullStack] and leaves the stack untouched.
    ///
    /// # Arguments
    ///
    /// * `value` - the value to push on to the stack
    pub fn push(&mut self, value: u16) -> Result<(), ErrorDetail> {
        if self.pointer >= STACK_DEPTH {
            return Err(ErrorDetail::PushFullStack);
        }
        self.entries[self.pointer] = value;
        self.pointer += 1;
        Ok(())
    }

    /// Pops the top entry off the stack and returns it.  If the stack is already empty, returns
    /// [ErrorDetail::PopEmptyStack].
    pub fn pop(&mut self) -> Result<u16, ErrorDetail> {
        if self.pointer == 0 {
            return Err(ErrorDetail::PopEmptyStack);
        }
        // Decrement the stack pointer (before accessing the item at this index)
        self.pointer -= 1;
        Ok(self.entries[self.pointer])
    }

    /// Returns the number of return addresses currently held
    pub fn depth(&self) -> usize {
        self.pointer
    }
}
