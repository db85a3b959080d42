//! Main memory.
//!
//! This module implements the 256-byte main memory. It provides:
//! 1. **Storage:** A zero-initialized fixed array of byte cells.
//! 2. **Access:** Bounds-checked byte reads and writes.
//! 3. **Loading:** Bulk copy of a program image at an offset.

use crate::common::constants::MEMORY_SIZE;
use crate::common::{VmError, VmResult};

/// Flat byte-addressable memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a new memory with every cell set to zero.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to read (0-255).
    ///
    /// # Returns
    ///
    /// The stored byte, or `VmError::AddressOutOfBounds` for addresses past the end.
    #[inline]
    pub fn read(&self, addr: usize) -> VmResult<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(VmError::AddressOutOfBounds(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to write (0-255).
    /// * `val` - Byte to store.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> VmResult<()> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(VmError::AddressOutOfBounds(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Nothing is written if the image does not fit; the error names the first
    /// address past the end of memory.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> VmResult<()> {
        let end = offset + data.len();
        if end > MEMORY_SIZE {
            return Err(VmError::AddressOutOfBounds(MEMORY_SIZE.max(offset)));
        }
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.cells.len())
            .finish_non_exhaustive()
    }
}
