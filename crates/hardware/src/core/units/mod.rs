//! Execution units.
//!
//! This module contains the functional units the instruction handlers call into.

/// Arithmetic Logic Unit for 8-bit register operations.
pub mod alu;
