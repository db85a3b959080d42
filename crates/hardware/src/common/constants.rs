//! Machine-wide constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Number of general-purpose registers.
//! 3. **Stack Constants:** Default stack top and limit.
//! 4. **Fetch Constants:** Entry point and operand width.

/// Number of addressable byte cells in main memory.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`r0`-`r7`).
pub const NUM_REGISTERS: usize = 8;

/// Default initial stack pointer.
///
/// The stack grows downward: the first push lands at `STACK_TOP - 1`.
pub const STACK_TOP: u8 = 0xF4;

/// Default lowest address the stack may occupy.
pub const STACK_LIMIT: u8 = 0x00;

/// Default program entry point.
pub const RESET_PC: u8 = 0x00;

/// Number of operand bytes fetched after every opcode.
pub const OPERAND_BYTES: usize = 2;
