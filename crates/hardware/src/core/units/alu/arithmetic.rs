//! ALU arithmetic operations.
//!
//! Implements 8-bit addition and multiplication. Results wrap modulo 256,
//! matching native unsigned byte semantics.

use super::AluOp;

/// Executes an arithmetic operation on two 8-bit operands.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The result truncated to 8 bits.
#[inline]
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    }
}
