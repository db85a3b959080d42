//! LS-8 Opcodes.
//!
//! Each instruction is one opcode byte followed by up to two operand bytes.
//! The opcode's top two bits encode how many operands the instruction uses.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate byte into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers, storing into the first.
pub const MUL: u8 = 0b1010_0010;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Call the subroutine whose address is held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

/// Shift of the operand-count field within an opcode.
const OPERAND_COUNT_SHIFT: u8 = 6;

/// Number of operand bytes the instruction uses, taken from the opcode's top two bits.
#[inline]
pub const fn operand_count(opcode: u8) -> u8 {
    opcode >> OPERAND_COUNT_SHIFT
}

/// Encoded instruction length in bytes (opcode plus operands).
#[inline]
pub const fn instruction_len(opcode: u8) -> u8 {
    operand_count(opcode) + 1
}

/// Returns the mnemonic for a defined opcode.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    match opcode {
        HLT => Some("HLT"),
        LDI => Some("LDI"),
        PRN => Some("PRN"),
        MUL => Some("MUL"),
        POP => Some("POP"),
        PUSH => Some("PUSH"),
        CALL => Some("CALL"),
        RET => Some("RET"),
        _ => None,
    }
}
