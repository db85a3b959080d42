//! Instruction dispatch table.
//!
//! Maps every possible opcode byte to an optional handler. The table is built once
//! when a [`Cpu`] is constructed and is never mutated afterwards. Lookup is a single
//! array index.

use std::fmt;

use super::handlers;
use super::opcodes as op;
use crate::common::VmResult;
use crate::core::Cpu;
use crate::soc::traits::OutputSink;

/// What the execution loop should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Advance the PC by this many bytes and keep running.
    Advance(u8),
    /// Set the PC to this address and keep running.
    Jump(u8),
    /// Stop execution. The PC is left on the halting instruction.
    Halt,
}

/// Instruction handler: receives the CPU, the output sink, and both operand bytes.
pub type Handler = fn(&mut Cpu, &mut dyn OutputSink, u8, u8) -> VmResult<Control>;

/// Number of table slots (one per opcode byte).
const TABLE_SIZE: usize = 256;

/// Opcode-indexed handler table.
#[derive(Clone, Copy)]
pub struct DispatchTable {
    handlers: [Option<Handler>; TABLE_SIZE],
}

impl DispatchTable {
    /// Builds the table with every defined LS-8 instruction registered.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.register(op::HLT, handlers::hlt);
        table.register(op::LDI, handlers::ldi);
        table.register(op::PRN, handlers::prn);
        table.register(op::MUL, handlers::mul);
        table.register(op::POP, handlers::pop);
        table.register(op::PUSH, handlers::push);
        table.register(op::CALL, handlers::call);
        table.register(op::RET, handlers::ret);
        table
    }

    /// Builds a table with no handlers registered.
    pub const fn empty() -> Self {
        Self {
            handlers: [None; TABLE_SIZE],
        }
    }

    fn register(&mut self, opcode: u8, handler: Handler) {
        self.handlers[opcode as usize] = Some(handler);
    }

    /// Returns the handler for `opcode`, if one is registered.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Handler> {
        self.handlers[opcode as usize]
    }

    /// Opcodes with a registered handler, in ascending order.
    pub fn opcodes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&opcode| self.handlers[opcode as usize].is_some())
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.opcodes().map(|opcode| op::mnemonic(opcode).unwrap_or("???")))
            .finish()
    }
}
