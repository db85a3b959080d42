//! Instruction Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs:
//! 1. **Fetch:** Reads the opcode at `PC` and the two operand bytes after it.
//! 2. **Dispatch:** Looks the opcode up in the dispatch table and invokes its handler.
//! 3. **Advance:** Applies the handler's control outcome to `PC`.
//! 4. **Observability:** Trace lines and a state dump for debugging.

use super::{Cpu, RunState};
use crate::common::constants::OPERAND_BYTES;
use crate::common::{Fault, VmError, VmResult};
use crate::isa::Control;
use crate::isa::disasm::disassemble;
use crate::soc::traits::OutputSink;

impl Cpu {
    /// Executes a single instruction cycle.
    ///
    /// Does nothing once the CPU is halted or faulted.
    ///
    /// # Arguments
    ///
    /// * `out` - Sink receiving `PRN` output.
    ///
    /// # Returns
    ///
    /// The state after the cycle, or the `Fault` that stopped execution.
    pub fn step(&mut self, out: &mut dyn OutputSink) -> Result<RunState, Fault> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let pc = self.pc;
        // PC is a byte, so the opcode fetch itself is always in range.
        let opcode = self.ram.as_slice()[pc as usize];
        match self.execute(pc, opcode, out) {
            Ok(state) => Ok(state),
            Err(error) => {
                self.state = RunState::Faulted;
                tracing::error!(pc, opcode, %error, "fatal fault");
                Err(Fault { pc, opcode, error })
            }
        }
    }

    /// Runs until `HLT` or a fatal fault.
    ///
    /// # Arguments
    ///
    /// * `out` - Sink receiving `PRN` output.
    pub fn run(&mut self, out: &mut dyn OutputSink) -> Result<(), Fault> {
        while !self.step(out)?.is_terminal() {}
        Ok(())
    }

    fn execute(&mut self, pc: u8, opcode: u8, out: &mut dyn OutputSink) -> VmResult<RunState> {
        let addr = pc as usize;
        let mut operands = [0u8; OPERAND_BYTES];
        for (offset, operand) in (1..).zip(operands.iter_mut()) {
            *operand = self.ram.read(addr + offset)?;
        }
        let [operand_a, operand_b] = operands;

        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let handler = self
            .dispatch
            .lookup(opcode)
            .ok_or(VmError::UnknownOpcode(opcode))?;
        tracing::debug!(pc, "{}", disassemble(opcode, operand_a, operand_b));

        let control = handler(self, out, operand_a, operand_b)?;
        self.stats.record(opcode);

        match control {
            Control::Advance(len) => {
                self.pc = pc
                    .checked_add(len)
                    .ok_or(VmError::AddressOutOfBounds(addr + len as usize))?;
            }
            Control::Jump(target) => self.pc = target,
            Control::Halt => {
                self.state = RunState::Halted;
                tracing::info!(pc, cycles = self.stats.cycles, "halted");
            }
        }
        Ok(self.state)
    }

    /// Formats the current state as a single trace line.
    ///
    /// Layout: `TRACE: PC | OP A B | R0 R1 R2 R3 R4 R5 R6 R7`, all two-digit
    /// upper-case hex. Operand bytes past the end of memory show as `00`.
    pub fn trace_line(&self) -> String {
        let byte = |addr: usize| self.ram.read(addr).unwrap_or(0);
        let pc = self.pc as usize;
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {}",
            self.pc,
            byte(pc),
            byte(pc + 1),
            byte(pc + 2),
            self.regs.dump()
        )
    }

    /// Multi-line dump of the architectural state, for fatal-error reports.
    pub fn dump_state(&self) -> String {
        format!(
            "PC={:02X} SP={:02X} FL={:02X} state={:?}\nREGS: {}",
            self.pc,
            self.sp,
            self.fl,
            self.state,
            self.regs.dump()
        )
    }
}
