//! Console devices.
//!
//! Concrete `OutputSink` implementations:
//! 1. **Stdout:** Forwards each line to the process's standard output.
//! 2. **Buffer:** Captures lines in memory for tests and embedding.

/// Console device implementations.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};
