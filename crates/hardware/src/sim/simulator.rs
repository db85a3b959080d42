//! Simulator: owns the CPU and its output sink side-by-side.
//!
//! Keeping the sink outside the `Cpu` lets each cycle borrow the two
//! independently, and lets callers pick stdout or an in-memory buffer.

use crate::common::{Fault, VmResult};
use crate::config::Config;
use crate::core::{Cpu, RunState};
use crate::soc::traits::OutputSink;

/// Top-level simulator: CPU state plus the sink `PRN` writes to.
#[derive(Debug)]
pub struct Simulator<S> {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Output sink for `PRN`.
    pub output: S,
}

impl<S: OutputSink> Simulator<S> {
    /// Creates a new simulator with the given configuration and sink.
    pub fn new(config: &Config, output: S) -> Self {
        Self {
            cpu: Cpu::new(config),
            output,
        }
    }

    /// Loads a program image at address 0.
    pub fn load(&mut self, program: &[u8]) -> VmResult<()> {
        self.cpu.load(program)
    }

    /// Advances the simulator by one instruction.
    pub fn tick(&mut self) -> Result<RunState, Fault> {
        self.cpu.step(&mut self.output)
    }

    /// Runs until `HLT` or a fatal fault.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.cpu.run(&mut self.output)
    }

    /// Consumes the simulator, returning the CPU and the sink.
    pub fn into_parts(self) -> (Cpu, S) {
        (self.cpu, self.output)
    }
}
