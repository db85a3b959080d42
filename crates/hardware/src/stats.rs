//! Run statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Cycles:** Total instructions executed.
//! 2. **Instruction mix:** Counts by mnemonic.
//! 3. **Stack activity:** Pushes, pops, calls, returns and peak stack depth.
//! 4. **Timing:** Wall-clock time since the CPU was created.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::isa::opcodes;

/// Run statistics structure.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Instructions executed to completion (one per cycle).
    pub cycles: u64,
    /// Executed instruction count, keyed by mnemonic.
    pub instruction_mix: BTreeMap<&'static str, u64>,
    /// Bytes pushed onto the stack (including return addresses).
    pub pushes: u64,
    /// Bytes popped off the stack (including return addresses).
    pub pops: u64,
    /// Subroutine calls taken.
    pub calls: u64,
    /// Subroutine returns taken.
    pub returns: u64,
    /// Deepest the stack has been, in bytes.
    pub peak_stack_depth: u8,
}

impl SimStats {
    /// Creates an empty statistics record; the wall clock starts now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instruction_mix: BTreeMap::new(),
            pushes: 0,
            pops: 0,
            calls: 0,
            returns: 0,
            peak_stack_depth: 0,
        }
    }

    /// Records one executed instruction.
    pub fn record(&mut self, opcode: u8) {
        self.cycles += 1;
        let name = opcodes::mnemonic(opcode).unwrap_or("???");
        *self.instruction_mix.entry(name).or_insert(0) += 1;
    }

    /// Records a push that left the stack `depth` bytes deep.
    pub fn record_push(&mut self, depth: u8) {
        self.pushes += 1;
        self.peak_stack_depth = self.peak_stack_depth.max(depth);
    }

    /// Number of times `mnemonic` was executed.
    pub fn count(&self, mnemonic: &str) -> u64 {
        self.instruction_mix.get(mnemonic).copied().unwrap_or(0)
    }

    /// Wall-clock time since creation.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the summary to stderr, keeping stdout for program output.
    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 RUN STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "cycles                   {}", self.cycles)?;
        writeln!(f, "wall time                {:.3?}", self.elapsed())?;
        writeln!(f, "instruction mix:")?;
        for (name, count) in &self.instruction_mix {
            writeln!(f, "  {name:<6} {count:>10}")?;
        }
        writeln!(f, "stack pushes             {}", self.pushes)?;
        writeln!(f, "stack pops               {}", self.pops)?;
        writeln!(f, "calls / returns          {} / {}", self.calls, self.returns)?;
        write!(f, "peak stack depth         {}", self.peak_stack_depth)
    }
}
