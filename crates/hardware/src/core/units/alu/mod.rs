//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the register-to-register ALU. It handles
//! 8-bit addition and multiplication; both wrap modulo 256.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use std::fmt;
use std::str::FromStr;

use crate::common::VmError;

/// Operations supported by the ALU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`, wrapping.
    Add,
    /// `a * b`, wrapping.
    Mul,
}

impl AluOp {
    /// Upper-case mnemonic of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = VmError;

    /// Parses an operation name, ignoring case.
    ///
    /// Any name other than `ADD` or `MUL` yields `VmError::UnsupportedOperation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            _ => Err(VmError::UnsupportedOperation(s.to_owned())),
        }
    }
}

/// Arithmetic Logic Unit for 8-bit register operations.
///
/// Stateless: it computes results, and the caller writes them back.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand.
    ///
    /// # Returns
    ///
    /// The 8-bit result of the operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9), 72);
    ///
    /// // 200 * 200 = 40000, and 40000 mod 256 = 64
    /// assert_eq!(Alu::execute(AluOp::Mul, 200, 200), 64);
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 1), 0);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        arithmetic::execute(op, a, b)
    }
}
