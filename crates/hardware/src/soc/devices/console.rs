//! Console output devices.

use std::io::{self, Write};

use crate::soc::traits::OutputSink;

/// Console that writes each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutConsole {
    lines_written: u64,
}

impl StdoutConsole {
    /// Creates a new stdout console.
    pub const fn new() -> Self {
        Self { lines_written: 0 }
    }

    /// Number of lines written so far.
    pub const fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl OutputSink for StdoutConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }
}

/// Console that captures every line in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    /// Creates an empty buffer console.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines captured so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Captured output joined with newline terminators, as it would appear on a terminal.
    pub fn contents(&self) -> String {
        self.lines.iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
    }

    /// Drains and returns the captured lines.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for BufferConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
