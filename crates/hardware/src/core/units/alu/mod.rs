//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the two-operand byte ALU. It is a set of pure
//! functions: handlers read the register operands, call [`Alu::execute`] and
//! write back whatever the outcome carries.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      And, Or, Xor
//!
//! `Cmp` produces no numeric result, only a flags update.

/// Wrapping byte arithmetic (add, sub, mul).
pub mod arithmetic;

/// Bitwise operations (and, or, xor).
pub mod logic;

use crate::common::error::Trap;
use crate::core::arch::flags::Flags;
use crate::isa::opcodes;

/// Operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `(a + b) mod 256`.
    Add,
    /// `(a - b) mod 256`.
    Sub,
    /// `(a * b) mod 256`.
    Mul,
    /// Three-way comparison.
    Cmp,
    /// `a & b`.
    And,
    /// `a | b`.
    Or,
    /// `a ^ b`.
    Xor,
}

impl TryFrom<u8> for AluOp {
    type Error = Trap;

    /// Selects the operation named by an ALU opcode.
    ///
    /// Any byte that is not an implemented ALU opcode is rejected with
    /// [`Trap::UnsupportedOperation`].
    fn try_from(opcode: u8) -> Result<Self, Trap> {
        match opcode {
            opcodes::ADD => Ok(Self::Add),
            opcodes::SUB => Ok(Self::Sub),
            opcodes::MUL => Ok(Self::Mul),
            opcodes::CMP => Ok(Self::Cmp),
            opcodes::AND => Ok(Self::And),
            opcodes::OR => Ok(Self::Or),
            opcodes::XOR => Ok(Self::Xor),
            other => Err(Trap::UnsupportedOperation(other)),
        }
    }
}

/// What an ALU operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutcome {
    /// Value to write back to the first operand register, if any.
    pub result: Option<u8>,
    /// New flags register value, if the operation updates it.
    pub flags: Option<Flags>,
}

/// Arithmetic Logic Unit for byte operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    /// use ls8_core::core::arch::Flags;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100).result, Some(44));
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 16).result, Some(0));
    ///
    /// let cmp = Alu::execute(AluOp::Cmp, 3, 7);
    /// assert_eq!(cmp.result, None);
    /// assert_eq!(cmp.flags, Some(Flags::LESS));
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> AluOutcome {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul => AluOutcome {
                result: arithmetic::execute(op, a, b),
                flags: None,
            },
            AluOp::And | AluOp::Or | AluOp::Xor => AluOutcome {
                result: logic::execute(op, a, b),
                flags: None,
            },
            AluOp::Cmp => AluOutcome {
                result: None,
                flags: Some(Flags::compare(a, b)),
            },
        }
    }

    /// Decodes `opcode` into an operation and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedOperation`] if `opcode` is not an ALU operation.
    pub fn apply(opcode: u8, a: u8, b: u8) -> Result<AluOutcome, Trap> {
        let op = AluOp::try_from(opcode)?;
        Ok(Self::execute(op, a, b))
    }
}
