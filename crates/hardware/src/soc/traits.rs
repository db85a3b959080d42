//! Output sink trait.
//!
//! The `PRN` instruction is the machine's only way to talk to the outside world. It
//! writes through `OutputSink`, so the core never depends on a concrete stream.

use std::io;

/// Line-oriented text output used by `PRN`.
pub trait OutputSink {
    /// Writes one line of text. The implementation supplies the line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

