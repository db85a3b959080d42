//! Common types and constants used throughout the virtual machine.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Memory size, register count and stack defaults.
//! 2. **Error Handling:** Execution errors and fault reporting.

/// Machine-wide constants.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, STACK_TOP};
pub use error::{Fault, VmError, VmResult};
