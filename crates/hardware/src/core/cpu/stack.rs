//! Stack operations.
//!
//! The stack grows downward from the configured top. `SP` addresses the most
//! recently pushed byte. Both directions are bounds checked:
//! 1. **Overflow:** A push with `SP` at or below the stack limit.
//! 2. **Underflow:** A pop that would move `SP` past the last memory address.
//!
//! Popping above the stack top is allowed and reads whatever memory holds there.

use super::Cpu;
use crate::common::{VmError, VmResult};

impl Cpu {
    /// Pushes a byte: `SP <- SP - 1; mem[SP] <- val`.
    pub fn push(&mut self, val: u8) -> VmResult<()> {
        if self.sp <= self.stack_limit {
            return Err(VmError::StackOverflow(self.sp));
        }
        let sp = self.sp - 1;
        self.ram.write(sp as usize, val)?;
        self.sp = sp;
        self.stats.record_push(self.stack_depth());
        Ok(())
    }

    /// Pops a byte: `val <- mem[SP]; SP <- SP + 1`.
    pub fn pop(&mut self) -> VmResult<u8> {
        let next = self
            .sp
            .checked_add(1)
            .ok_or(VmError::StackUnderflow(self.sp))?;
        let val = self.ram.read(self.sp as usize)?;
        self.sp = next;
        self.stats.pops += 1;
        Ok(val)
    }

    /// Number of bytes currently on the stack; zero once `SP` is above the top.
    pub const fn stack_depth(&self) -> u8 {
        self.stack_top.saturating_sub(self.sp)
    }

    /// Address of the stack top (initial `SP`).
    pub const fn stack_top(&self) -> u8 {
        self.stack_top
    }

    /// Lowest address the stack may occupy.
    pub const fn stack_limit(&self) -> u8 {
        self.stack_limit
    }
}
