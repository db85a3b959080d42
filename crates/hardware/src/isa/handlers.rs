//! Instruction handlers.
//!
//! One free function per opcode, each with the [`Handler`](super::dispatch::Handler)
//! signature. Handlers are the only code that mutates registers, memory and the
//! stack pointer during a run; the PC is left to the execution loop.

// Every handler shares the table signature, infallible ones included.
#![allow(clippy::unnecessary_wraps)]

use super::dispatch::Control;
use super::opcodes::{self as op, instruction_len};
use crate::common::{VmError, VmResult};
use crate::core::Cpu;
use crate::core::units::alu::AluOp;
use crate::soc::traits::OutputSink;

/// `HLT`: stop the machine.
pub fn hlt(_cpu: &mut Cpu, _out: &mut dyn OutputSink, _a: u8, _b: u8) -> VmResult<Control> {
    Ok(Control::Halt)
}

/// `LDI reg, imm`: `reg <- imm`.
pub fn ldi(cpu: &mut Cpu, _out: &mut dyn OutputSink, reg: u8, imm: u8) -> VmResult<Control> {
    cpu.regs.set(reg as usize, imm)?;
    Ok(Control::Advance(instruction_len(op::LDI)))
}

/// `PRN reg`: print `reg` as a decimal line.
pub fn prn(cpu: &mut Cpu, out: &mut dyn OutputSink, reg: u8, _b: u8) -> VmResult<Control> {
    let val = cpu.regs.get(reg as usize)?;
    out.write_line(&val.to_string())?;
    Ok(Control::Advance(instruction_len(op::PRN)))
}

/// `MUL reg_a, reg_b`: `reg_a <- reg_a * reg_b` through the ALU.
pub fn mul(cpu: &mut Cpu, _out: &mut dyn OutputSink, reg_a: u8, reg_b: u8) -> VmResult<Control> {
    cpu.alu(AluOp::Mul, reg_a as usize, reg_b as usize)?;
    Ok(Control::Advance(instruction_len(op::MUL)))
}

/// `POP reg`: `reg <- mem[SP]; SP <- SP + 1`.
pub fn pop(cpu: &mut Cpu, _out: &mut dyn OutputSink, reg: u8, _b: u8) -> VmResult<Control> {
    // Validate the destination first so a bad index leaves the stack untouched.
    let _ = cpu.regs.get(reg as usize)?;
    let val = cpu.pop()?;
    cpu.regs.set(reg as usize, val)?;
    Ok(Control::Advance(instruction_len(op::POP)))
}

/// `PUSH reg`: `SP <- SP - 1; mem[SP] <- reg`.
pub fn push(cpu: &mut Cpu, _out: &mut dyn OutputSink, reg: u8, _b: u8) -> VmResult<Control> {
    let val = cpu.regs.get(reg as usize)?;
    cpu.push(val)?;
    Ok(Control::Advance(instruction_len(op::PUSH)))
}

/// `CALL reg`: push the address of the next instruction, then jump to `reg`.
pub fn call(cpu: &mut Cpu, _out: &mut dyn OutputSink, reg: u8, _b: u8) -> VmResult<Control> {
    let target = cpu.regs.get(reg as usize)?;
    let len = instruction_len(op::CALL);
    let ret_addr = cpu
        .pc
        .checked_add(len)
        .ok_or(VmError::AddressOutOfBounds(cpu.pc as usize + len as usize))?;
    cpu.push(ret_addr)?;
    cpu.stats.calls += 1;
    Ok(Control::Jump(target))
}

/// `RET`: pop the return address into the PC.
pub fn ret(cpu: &mut Cpu, _out: &mut dyn OutputSink, _a: u8, _b: u8) -> VmResult<Control> {
    let ret_addr = cpu.pop()?;
    cpu.stats.returns += 1;
    Ok(Control::Jump(ret_addr))
}
