//! Machine error definitions.
//!
//! This module defines the error handling for the virtual machine. It provides:
//! 1. **Execution Errors:** `VmError`, raised by storage, ALU, stack and dispatch.
//! 2. **Faults:** `Fault`, an execution error annotated with the PC and opcode that caused it.
//!
//! Every error is fatal to the current run; nothing here is retried.

use thiserror::Error;

/// Errors raised while executing a single instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Memory access outside the 256-byte address space.
    ///
    /// The associated value is the offending address.
    #[error("memory address {0:#04x} out of bounds")]
    AddressOutOfBounds(usize),

    /// Register access outside `r0`-`r7`.
    ///
    /// The associated value is the offending register index.
    #[error("register index {0} out of bounds")]
    RegisterOutOfBounds(usize),

    /// ALU invoked with an operation it does not implement.
    #[error("unsupported ALU operation `{0}`")]
    UnsupportedOperation(String),

    /// Opcode with no registered handler.
    #[error("unknown opcode {0:#010b}")]
    UnknownOpcode(u8),

    /// Push with the stack pointer already at the stack limit.
    #[error("stack overflow (sp = {0:#04x})")]
    StackOverflow(u8),

    /// Pop with the stack pointer at the last address, so `SP` would leave memory.
    #[error("stack underflow (sp = {0:#04x})")]
    StackUnderflow(u8),

    /// The output sink rejected a write.
    #[error("output sink failed: {0}")]
    Output(String),
}

impl From<std::io::Error> for VmError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// A fatal execution error, tagged with the instruction that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fatal fault at pc {pc:#04x} (opcode {opcode:#010b}): {error}")]
pub struct Fault {
    /// Address of the faulting instruction.
    pub pc: u8,
    /// Opcode fetched at `pc`.
    pub opcode: u8,
    /// Underlying cause.
    #[source]
    pub error: VmError,
}

/// Shorthand for results of single-instruction operations.
pub type VmResult<T> = Result<T, VmError>;
