//! General-Purpose Register File.
//!
//! This module implements the eight 8-bit general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains registers `r0`-`r7`, zero-initialized.
//! 2. **Invariant Enforcement:** Rejects register indices outside `0..8`.
//! 3. **Debugging:** Provides a formatter for dumping the register state.
//!
//! The stack pointer and flags are not part of this file; they live as dedicated
//! fields on [`Cpu`](crate::core::Cpu).

use crate::common::constants::NUM_REGISTERS;
use crate::common::{VmError, VmResult};

/// General-Purpose Register file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The register value, or `VmError::RegisterOutOfBounds` for an invalid index.
    #[inline]
    pub fn get(&self, idx: usize) -> VmResult<u8> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(VmError::RegisterOutOfBounds(idx))
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 8-bit value to write.
    #[inline]
    pub fn set(&mut self, idx: usize, val: u8) -> VmResult<()> {
        let reg = self
            .regs
            .get_mut(idx)
            .ok_or(VmError::RegisterOutOfBounds(idx))?;
        *reg = val;
        Ok(())
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Formats the registers as space-separated two-digit hex values.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .map(|r| format!("{r:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
