//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode map, the handler for each instruction, the
//! opcode-indexed dispatch table and a disassembler.

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode-to-handler dispatch table.
pub mod dispatch;

/// Per-opcode instruction handlers.
pub mod handlers;

/// Opcode constants and encoding helpers.
pub mod opcodes;

pub use dispatch::{Control, DispatchTable, Handler};
