//! LS-8 virtual machine library.
//!
//! This crate implements a minimal 8-bit machine with the following:
//! 1. **Core:** 256 bytes of memory, eight registers, SP, FL and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode map, per-instruction handlers, dispatch table and disassembler.
//! 3. **ALU:** Wrapping 8-bit add and multiply.
//! 4. **SoC:** Main memory and the output sink `PRN` writes to.
//! 5. **Simulation:** Text program loader, configuration, and statistics collection.

/// Common types and constants (errors, machine dimensions).
pub mod common;
/// Run configuration (defaults, JSON loading, validation).
pub mod config;
/// CPU core (registers, ALU, stack, execution loop).
pub mod core;
/// Instruction set (opcodes, handlers, dispatch, disassembly).
pub mod isa;
/// Program loader and simulator wrapper.
pub mod sim;
/// Memory, output sink trait and console devices.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers and execution state.
pub use crate::core::Cpu;
/// CPU paired with an output sink.
pub use crate::sim::Simulator;
