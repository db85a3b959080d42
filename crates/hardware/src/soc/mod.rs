//! System components surrounding the CPU core.
//!
//! This module organizes the pieces the core talks to but does not own the logic of:
//! the flat main memory, the output sink trait, and the concrete console devices.

/// Console devices implementing the output sink.
pub mod devices;

/// Flat byte-addressable main memory.
pub mod memory;

/// Trait definitions for attached I/O.
pub mod traits;

pub use devices::{BufferConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::OutputSink;
