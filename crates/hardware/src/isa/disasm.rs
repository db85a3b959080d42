//! Instruction Disassembler for LS-8.
//!
//! Converts an opcode and its operand bytes into a human-readable mnemonic
//! string for debug tracing, logging, and the `disasm` command.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::opcodes::LDI;
//!
//! assert_eq!(disassemble(LDI, 0, 8), "LDI r0, 8");
//! ```

use super::opcodes::{self as op, instruction_len};
use crate::common::constants::MEMORY_SIZE;

/// Disassembles one instruction.
///
/// Operands the instruction does not use are ignored. Undefined opcodes
/// render as `??? 0xNN`.
///
/// # Arguments
///
/// * `opcode` - The opcode byte.
/// * `a` - First operand byte.
/// * `b` - Second operand byte.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    match opcode {
        op::HLT => "HLT".to_owned(),
        op::RET => "RET".to_owned(),
        op::LDI => format!("LDI r{a}, {b}"),
        op::MUL => format!("MUL r{a}, r{b}"),
        op::PRN => format!("PRN r{a}"),
        op::PUSH => format!("PUSH r{a}"),
        op::POP => format!("POP r{a}"),
        op::CALL => format!("CALL r{a}"),
        _ => format!("??? {opcode:#04x}"),
    }
}

/// One decoded line of a program listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Address of the opcode byte.
    pub addr: u8,
    /// Raw instruction bytes (opcode first).
    pub bytes: Vec<u8>,
    /// Disassembled text.
    pub text: String,
}

/// Disassembles a whole program image linearly from address 0.
///
/// Instruction length comes from the opcode's operand-count bits, so data
/// bytes mixed into code will be decoded as instructions. Operands missing
/// at the end of the image are shown as zero. Bytes past the end of main
/// memory are not listed.
pub fn disassemble_program(image: &[u8]) -> Vec<Listing> {
    let program = &image[..image.len().min(MEMORY_SIZE)];
    let mut listing = Vec::new();
    let mut addr = 0usize;
    while let Some(&opcode) = program.get(addr) {
        let len = instruction_len(opcode) as usize;
        let end = (addr + len).min(program.len());
        let operand = |i: usize| program.get(addr + i).copied().unwrap_or(0);
        listing.push(Listing {
            addr: addr as u8,
            bytes: program[addr..end].to_vec(),
            text: disassemble(opcode, operand(1), operand(2)),
        });
        addr += len;
    }
    listing
}
