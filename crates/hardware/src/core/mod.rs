//! Core processor implementation.
//!
//! This module contains the CPU: architectural state, the execution units the
//! instruction handlers call into, and the fetch-decode-execute loop.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunState};
