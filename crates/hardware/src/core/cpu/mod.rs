//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine state.
//! It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter, stack pointer and flags.
//! 2. **Dispatch:** The opcode table consulted on every cycle.
//! 3. **Statistics:** Per-run execution counters.

/// Fetch-decode-execute loop and state reporting.
pub mod execution;

/// Stack push/pop with bounds checking.
pub mod stack;

use crate::common::VmResult;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::DispatchTable;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being executed.
    Running,
    /// `HLT` was executed. Terminal.
    Halted,
    /// A fatal error stopped execution. Terminal.
    Faulted,
}

impl RunState {
    /// Returns `true` once no further cycles will execute.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Main CPU structure containing all machine state.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers `r0`-`r7`.
    pub regs: Gpr,
    /// Main memory.
    pub ram: Memory,
    /// Program Counter.
    pub pc: u8,
    /// Stack Pointer.
    pub sp: u8,
    /// Flags register. No defined instruction reads or writes it.
    pub fl: u8,
    /// Current execution state.
    pub state: RunState,
    /// Print a trace line to stderr before each cycle.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    stack_top: u8,
    stack_limit: u8,
    dispatch: DispatchTable,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (entry point, stack placement, tracing).
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            ram: Memory::new(),
            pc: config.general.start_pc,
            sp: config.stack.top,
            fl: 0,
            state: RunState::Running,
            trace: config.general.trace_instructions,
            stats: SimStats::new(),
            stack_top: config.stack.top,
            stack_limit: config.stack.limit,
            dispatch: DispatchTable::new(),
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// # Arguments
    ///
    /// * `program` - Instruction bytes in order.
    pub fn load(&mut self, program: &[u8]) -> VmResult<()> {
        self.ram.load(0, program)?;
        tracing::debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Applies an ALU operation to two registers: `reg_a <- reg_a op reg_b`.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation.
    /// * `reg_a` - Destination and first source register.
    /// * `reg_b` - Second source register.
    pub fn alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) -> VmResult<()> {
        let a = self.regs.get(reg_a)?;
        let b = self.regs.get(reg_b)?;
        self.regs.set(reg_a, Alu::execute(op, a, b))
    }

    /// The dispatch table this CPU executes with.
    pub const fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
